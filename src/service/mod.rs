pub mod json_io;

use crate::{
    error::AppError,
    planner::{ForecastDay, IrrigationPlanner, SoilStatus},
    time::TimeProvider,
    utils::display_from_ts,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Stored form of one planned day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationPlan {
    pub device_id: String,
    pub date: String,
    pub planned_volume_l: f64,
    /// Unix UTC timestamp
    pub created_at: i64,
}

#[async_trait]
pub trait MoistureSource: Send + Sync {
    /// Most recent raw soil reading of the device, `None` when it never reported one.
    async fn latest_soil_raw(&self, device_id: &str) -> Result<Option<i32>, AppError>;
}

#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Up to `days` forecast days in chronological order.
    async fn forecast_days(&self, days: usize) -> Result<Vec<ForecastDay>, AppError>;
}

#[async_trait]
pub trait PlanSink: Send + Sync {
    /// Replaces the device's future plans with `plans`.
    async fn replace_plans(&self, device_id: &str, plans: &[IrrigationPlan]) -> Result<(), AppError>;
}

pub struct PlanService {
    planner: Arc<IrrigationPlanner>,
    moisture: Arc<dyn MoistureSource>,
    forecasts: Arc<dyn ForecastSource>,
    sink: Arc<dyn PlanSink>,
    time_provider: Arc<dyn TimeProvider>,
    forecast_days: usize,
}

impl PlanService {
    pub fn new(
        planner: Arc<IrrigationPlanner>, moisture: Arc<dyn MoistureSource>, forecasts: Arc<dyn ForecastSource>,
        sink: Arc<dyn PlanSink>, time_provider: Arc<dyn TimeProvider>, forecast_days: usize,
    ) -> Self {
        Self { planner, moisture, forecasts, sink, time_provider, forecast_days }
    }

    async fn latest_reading(&self, device_id: &str) -> Result<i32, AppError> {
        self.moisture.latest_soil_raw(device_id).await?.ok_or_else(|| AppError::NoSoilData(device_id.to_owned()))
    }

    /// Plans from the latest reading and the forecast, stores the result and returns it.
    pub async fn recompute_plan(&self, device_id: &str) -> Result<Vec<IrrigationPlan>, AppError> {
        let soil_raw = self.latest_reading(device_id).await?;
        let forecasts = self.forecasts.forecast_days(self.forecast_days).await?;
        if forecasts.is_empty() {
            return Err(AppError::NoForecast);
        }
        debug!("Device {}: planning {} days from soil reading {}", device_id, forecasts.len(), soil_raw);

        let report = self.planner.plan(soil_raw, &forecasts);
        let created_at = self.time_provider.now();
        let plans: Vec<IrrigationPlan> = report
            .entries
            .into_iter()
            .map(|entry| IrrigationPlan {
                device_id: device_id.to_owned(),
                date: entry.date,
                planned_volume_l: entry.planned_volume_l,
                created_at,
            })
            .collect();

        self.sink.replace_plans(device_id, &plans).await?;
        info!(
            "Device {}: plan recomputed at {}, {} days, {:.1} L total",
            device_id,
            display_from_ts(created_at),
            plans.len(),
            plans.iter().map(|p| p.planned_volume_l).sum::<f64>()
        );
        Ok(plans)
    }

    pub async fn soil_status(&self, device_id: &str) -> Result<SoilStatus, AppError> {
        let soil_raw = self.latest_reading(device_id).await?;
        Ok(SoilStatus::classify(soil_raw, self.planner.config()))
    }
}
