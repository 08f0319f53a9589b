use super::{grid::MoistureGrid, ds::{ForecastDay, PlannerConfig}, REFERENCE_TEMP_C};

/// Calculate daily evapotranspiration in liters
pub fn calc_evapotranspiration(cfg: &PlannerConfig, day: &ForecastDay) -> f64 {
    cfg.base_et + cfg.temp_factor * (day.avg_temp() - REFERENCE_TEMP_C)
}

/// Calculate rain replenishment on the raw moisture scale
pub fn calc_rain_replenishment(cfg: &PlannerConfig, day: &ForecastDay) -> f64 {
    day.precip_mm * cfg.rain_conversion * cfg.adc_to_moisture
}

/// Weather terms of one forecast day, computed once and reused for every (bin, option) pair.
#[derive(Debug, Clone, Copy)]
pub struct DayModel {
    pub evapotranspiration: f64,
    pub rain_replenishment: f64,
    adc_to_moisture: f64,
}

impl DayModel {
    pub fn new(cfg: &PlannerConfig, day: &ForecastDay) -> Self {
        Self {
            evapotranspiration: calc_evapotranspiration(cfg, day),
            rain_replenishment: calc_rain_replenishment(cfg, day),
            adc_to_moisture: cfg.adc_to_moisture,
        }
    }

    /// Moisture after one day, clamped into the grid range.
    pub fn next_moisture(&self, grid: &MoistureGrid, current: f64, volume: f64) -> f64 {
        let next = current - self.evapotranspiration * self.adc_to_moisture + volume * self.adc_to_moisture
            + self.rain_replenishment;
        grid.clamp_moisture(next)
    }
}

/// Incremental cost of landing on `next_moisture` after irrigating `volume`.
/// `prev_volume` is the volume stored on the incoming cell, not the previous calendar day.
pub fn step_cost(cfg: &PlannerConfig, optimal_center: f64, next_moisture: f64, volume: f64, prev_volume: f64) -> f64 {
    let deviation = (next_moisture - optimal_center).abs();
    let change = (volume - prev_volume).abs();
    cfg.cost_w1 * deviation * deviation + cfg.cost_w2 * volume + cfg.cost_w3 * change
}
