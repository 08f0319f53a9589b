use crate::error::AppError;
use crate::service::{IrrigationPlan, PlanSink};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory plan storage keyed by device.
#[derive(Clone, Debug, Default)]
pub struct MemoryPlanStore {
    pub data: Arc<Mutex<HashMap<String, Vec<IrrigationPlan>>>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plans(&self, device_id: &str) -> Vec<IrrigationPlan> {
        self.data.lock().map(|data| data.get(device_id).cloned().unwrap_or_default()).unwrap_or_default()
    }
}

#[async_trait]
impl PlanSink for MemoryPlanStore {
    async fn replace_plans(&self, device_id: &str, plans: &[IrrigationPlan]) -> Result<(), AppError> {
        let mut data = self.data.lock().map_err(|e| AppError::Source(e.to_string()))?;
        data.insert(device_id.to_owned(), plans.to_vec());
        Ok(())
    }
}
