use super::{ForecastSource, IrrigationPlan, MoistureSource, PlanSink};
use crate::{error::AppError, planner::ForecastDay};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Planning input handed to the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningInput {
    #[serde(default)]
    pub device_id: Option<String>,
    pub initial_moisture: i32,
    pub forecasts: Vec<ForecastDay>,
}

/// Serves one [`PlanningInput`] as both moisture and forecast source.
#[derive(Debug, Clone)]
pub struct JsonInput {
    input: PlanningInput,
}

impl JsonInput {
    pub fn new(input: PlanningInput) -> Self {
        Self { input }
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, AppError> {
        Ok(Self::new(serde_json::from_reader(reader)?))
    }

    pub fn device_id(&self) -> Option<&str> {
        self.input.device_id.as_deref()
    }
}

#[async_trait]
impl MoistureSource for JsonInput {
    async fn latest_soil_raw(&self, device_id: &str) -> Result<Option<i32>, AppError> {
        match self.device_id() {
            Some(id) if id != device_id => Ok(None),
            _ => Ok(Some(self.input.initial_moisture)),
        }
    }
}

#[async_trait]
impl ForecastSource for JsonInput {
    async fn forecast_days(&self, days: usize) -> Result<Vec<ForecastDay>, AppError> {
        Ok(self.input.forecasts.iter().take(days).cloned().collect())
    }
}

/// Prints plans as pretty JSON on stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

#[async_trait]
impl PlanSink for StdoutSink {
    async fn replace_plans(&self, _device_id: &str, plans: &[IrrigationPlan]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(plans)?;
        writeln!(std::io::stdout().lock(), "{}", json)?;
        Ok(())
    }
}
