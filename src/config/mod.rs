pub mod run_options;

use crate::{error::AppError, planner::PlannerConfig};
use run_options::Args;
use serde::Deserialize;
use std::fs;

pub const CONFIG_FILE: &str = "irriplan.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Service {
    /// days requested from the forecast source
    pub forecast_days: usize,
    pub device_id: String,
}

impl Default for Service {
    fn default() -> Self {
        Self { forecast_days: 15, device_id: "device-1".to_owned() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self { level: "info".to_owned() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub planner: PlannerConfig,
    #[serde(default)]
    pub service: Service,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, AppError> {
        if let Some(cfg_str) = &args.cfg_str {
            return Self::load_from_str(cfg_str);
        }
        let config_content = fs::read_to_string(&args.cfg_file)?;
        Self::load_from_str(&config_content)
    }

    pub fn load_from_str(config_str: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }
}
