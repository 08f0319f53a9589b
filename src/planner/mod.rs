pub mod dp_alg;
pub mod ds;
pub mod grid;
pub mod model;
pub mod status;

pub use dp_alg::IrrigationPlanner;
pub use ds::{DailyPlan, ForecastDay, PlanReport, PlannerConfig};
pub use status::SoilStatus;

/// Width of a moisture bin on the raw ADC scale.
pub const MOISTURE_STEP: i32 = 10;
pub const MAX_MOISTURE: i32 = 4095; // 12-bit ADC
/// Increment between irrigation options, in liters.
pub const IRRIGATION_QUANTUM: f64 = 0.5;
/// Upper bound on irrigation options per day, keeps one DP day at `bins x options` transitions.
pub const MAX_IRRIGATION_OPTIONS: usize = 1024;
pub const REFERENCE_TEMP_C: f64 = 20.0;
