use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("soil_optimal_min ({min}) is greater than soil_optimal_max ({max})")]
    InvertedOptimalBand { min: i32, max: i32 },
    #[error("max_irrigation_per_day must be > 0, got {0}")]
    NonPositiveMaxIrrigation(f64),
    #[error("adc_to_moisture must be > 0, got {0}")]
    NonPositiveAdcToMoisture(f64),
    #[error("cost weight {name} must be >= 0, got {value}")]
    NegativeCostWeight { name: &'static str, value: f64 },
    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },
    #[error("max_irrigation_per_day {max_irrigation} gives more than {limit} irrigation options")]
    TooManyIrrigationOptions { max_irrigation: f64, limit: usize },
    #[error("worst case daily cost overflows ({0}), lower the cost weights")]
    UnboundedStepCost(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("planning cancelled before day {day}")]
    Cancelled { day: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Planner error: {0}")]
    Planner(#[from] PlannerError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config file '{}' does not exist", .0.display())]
    MissingConfigFile(std::path::PathBuf),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No soil moisture data available for device {0}")]
    NoSoilData(String),
    #[error("No forecast data available")]
    NoForecast,
    #[error("Source error: {0}")]
    Source(String),
}
