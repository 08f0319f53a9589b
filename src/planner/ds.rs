use super::{IRRIGATION_QUANTUM, MAX_IRRIGATION_OPTIONS, MAX_MOISTURE};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// One day of the weather forecast. `date` is an opaque label, the horizon order is the slice order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    /// °C
    pub temp_max: f64,
    /// °C
    pub temp_min: f64,
    /// mm
    pub precip_mm: f64,
}

impl ForecastDay {
    pub fn new(date: &str, temp_max: f64, temp_min: f64, precip_mm: f64) -> Self {
        Self { date: date.to_owned(), temp_max, temp_min, precip_mm }
    }

    pub fn avg_temp(&self) -> f64 {
        (self.temp_max + self.temp_min) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: String,
    /// liters
    pub planned_volume_l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// raw ADC scale
    pub soil_optimal_min: i32,
    /// raw ADC scale
    pub soil_optimal_max: i32,
    /// liters
    pub max_irrigation_per_day: f64,
    /// liters/day
    pub base_et: f64,
    pub temp_factor: f64,
    pub rain_conversion: f64,
    pub adc_to_moisture: f64,
    /// moisture deviation weight
    pub cost_w1: f64,
    /// water usage weight
    pub cost_w2: f64,
    /// day to day change weight
    pub cost_w3: f64,
}

impl PlannerConfig {
    /// Checks the invariants the solver relies on. Called once when the planner is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("max_irrigation_per_day", self.max_irrigation_per_day),
            ("base_et", self.base_et),
            ("temp_factor", self.temp_factor),
            ("rain_conversion", self.rain_conversion),
            ("adc_to_moisture", self.adc_to_moisture),
            ("cost_w1", self.cost_w1),
            ("cost_w2", self.cost_w2),
            ("cost_w3", self.cost_w3),
        ];
        if let Some(&(name, _)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { name });
        }
        if self.soil_optimal_min > self.soil_optimal_max {
            return Err(ConfigError::InvertedOptimalBand { min: self.soil_optimal_min, max: self.soil_optimal_max });
        }
        if self.max_irrigation_per_day <= 0. {
            return Err(ConfigError::NonPositiveMaxIrrigation(self.max_irrigation_per_day));
        }
        if self.adc_to_moisture <= 0. {
            return Err(ConfigError::NonPositiveAdcToMoisture(self.adc_to_moisture));
        }
        for (name, value) in [("cost_w1", self.cost_w1), ("cost_w2", self.cost_w2), ("cost_w3", self.cost_w3)] {
            if value < 0. {
                return Err(ConfigError::NegativeCostWeight { name, value });
            }
        }
        let option_count = (self.max_irrigation_per_day / IRRIGATION_QUANTUM).floor() + 1.;
        if option_count > MAX_IRRIGATION_OPTIONS as f64 {
            return Err(ConfigError::TooManyIrrigationOptions {
                max_irrigation: self.max_irrigation_per_day,
                limit: MAX_IRRIGATION_OPTIONS,
            });
        }
        let worst = self.worst_step_cost();
        if !worst.is_finite() {
            return Err(ConfigError::UnboundedStepCost(worst));
        }
        Ok(())
    }

    /// Largest cost a single day can add: farthest grid edge from the center, max volume, full swing.
    fn worst_step_cost(&self) -> f64 {
        let center = self.optimal_center();
        let deviation = center.abs().max((MAX_MOISTURE as f64 - center).abs());
        self.cost_w1 * deviation * deviation
            + self.cost_w2 * self.max_irrigation_per_day
            + self.cost_w3 * self.max_irrigation_per_day
    }

    /// Midpoint of the optimal band, the target of the deviation cost.
    pub fn optimal_center(&self) -> f64 {
        (self.soil_optimal_min as f64 + self.soil_optimal_max as f64) / 2.0
    }
}

/// Full result of one planning call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub entries: Vec<DailyPlan>,
    pub initial_bin: usize,
    /// reading was outside `[0, MAX_MOISTURE]` and got clamped
    pub initial_clamped: bool,
    pub terminal_bin: usize,
    pub total_cost: f64,
}

impl PlanReport {
    pub fn empty(initial_bin: usize, initial_clamped: bool) -> Self {
        Self { entries: Vec::new(), initial_bin, initial_clamped, terminal_bin: initial_bin, total_cost: 0. }
    }
}
