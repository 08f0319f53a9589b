use crate::error::AppError;
use crate::planner::ForecastDay;
use crate::service::{ForecastSource, IrrigationPlan, MoistureSource, PlanSink};
use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use tracing::trace;

mock! {
    pub MoistureSource {}

    #[async_trait]
    impl MoistureSource for MoistureSource {
        async fn latest_soil_raw(&self, device_id: &str) -> Result<Option<i32>, AppError>;
    }
}

mock! {
    pub ForecastSource {}

    #[async_trait]
    impl ForecastSource for ForecastSource {
        async fn forecast_days(&self, days: usize) -> Result<Vec<ForecastDay>, AppError>;
    }
}

mock! {
    pub PlanSink {}

    #[async_trait]
    impl PlanSink for PlanSink {
        async fn replace_plans(&self, device_id: &str, plans: &[IrrigationPlan]) -> Result<(), AppError>;
    }
}

/// Any device reports `reading`.
pub fn set_moisture_source(reading: Option<i32>) -> Arc<MockMoistureSource> {
    let mut source = MockMoistureSource::new();
    source.expect_latest_soil_raw().times(0..).returning(move |device_id| {
        trace!("Mocked soil reading for {}: {:?}", device_id, reading);
        Ok(reading)
    });
    Arc::new(source)
}

/// Serves at most the requested number of days from `days`.
pub fn set_forecast_source(days: Vec<ForecastDay>) -> Arc<MockForecastSource> {
    let mut source = MockForecastSource::new();
    source.expect_forecast_days().times(0..).returning(move |n| Ok(days.iter().take(n).cloned().collect()));
    Arc::new(source)
}

/// Sink that must never be written to.
pub fn set_untouched_sink() -> Arc<MockPlanSink> {
    let mut sink = MockPlanSink::new();
    sink.expect_replace_plans().times(0);
    Arc::new(sink)
}
