pub mod config;
pub mod error;
pub mod planner;
pub mod service;
pub mod test;
pub mod time;
pub mod utils;

pub use error::AppError;
pub use planner::{DailyPlan, ForecastDay, IrrigationPlanner, PlannerConfig};
