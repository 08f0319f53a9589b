use super::ds::PlannerConfig;
use serde::Serialize;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilStatus {
    Dry,
    Optimal,
    Wet,
}

impl SoilStatus {
    /// Position of a raw reading relative to the configured optimal band (bounds inclusive).
    pub fn classify(raw: i32, cfg: &PlannerConfig) -> Self {
        if raw < cfg.soil_optimal_min {
            SoilStatus::Dry
        } else if raw > cfg.soil_optimal_max {
            SoilStatus::Wet
        } else {
            SoilStatus::Optimal
        }
    }
}

impl Display for SoilStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SoilStatus::Dry => "dry",
            SoilStatus::Optimal => "optimal",
            SoilStatus::Wet => "wet",
        };
        f.write_str(status)
    }
}
