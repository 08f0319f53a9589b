pub mod mock_sources;
pub mod mock_store;
pub mod mock_time;

use crate::{
    planner::{ForecastDay, IrrigationPlanner, PlannerConfig},
    service::{ForecastSource, MoistureSource, PlanService, PlanSink},
};
use mock_time::MockTimeProvider;
use std::sync::Arc;

/// Settings in the range the field devices use (12-bit ADC, liters per day).
pub fn field_cfg() -> PlannerConfig {
    PlannerConfig {
        soil_optimal_min: 1800,
        soil_optimal_max: 2600,
        max_irrigation_per_day: 5.0,
        base_et: 2.0,
        temp_factor: 0.1,
        rain_conversion: 1.0,
        adc_to_moisture: 50.0,
        cost_w1: 0.001,
        cost_w2: 1.0,
        cost_w3: 0.5,
    }
}

/// Zero ET and rain, unit conversion, band [20, 30].
pub fn flat_cfg() -> PlannerConfig {
    PlannerConfig {
        soil_optimal_min: 20,
        soil_optimal_max: 30,
        max_irrigation_per_day: 1.0,
        base_et: 0.,
        temp_factor: 0.,
        rain_conversion: 0.,
        adc_to_moisture: 1.0,
        cost_w1: 1.,
        cost_w2: 1.,
        cost_w3: 0.,
    }
}

/// `days` consecutive June days, warm with a shower every fourth day.
pub fn summer_forecast(days: usize) -> Vec<ForecastDay> {
    (0..days)
        .map(|i| {
            let precip = if i % 4 == 3 { 6.0 } else { 0.0 };
            ForecastDay::new(&format!("2025-06-{:02}", i + 1), 30.0 + (i % 3) as f64, 17.0, precip)
        })
        .collect()
}

pub fn set_planner(cfg: PlannerConfig) -> Arc<IrrigationPlanner> {
    Arc::new(IrrigationPlanner::new(cfg).expect("test config must be valid"))
}

pub fn set_service(
    cfg: PlannerConfig, moisture: Arc<dyn MoistureSource>, forecasts: Arc<dyn ForecastSource>, sink: Arc<dyn PlanSink>,
    start_time: i64,
) -> PlanService {
    let time_provider = Arc::new(MockTimeProvider::new(start_time));
    PlanService::new(set_planner(cfg), moisture, forecasts, sink, time_provider, 15)
}
