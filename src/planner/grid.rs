use super::{IRRIGATION_QUANTUM, MAX_MOISTURE, MOISTURE_STEP};
use num_traits::ToPrimitive;

/// Irrigation volumes `0, δ, 2δ, ..` up to the largest multiple of δ not above `max_per_day`.
/// Anything that is not a positive number degenerates to `[0.0]`.
pub fn irrigation_options(max_per_day: f64) -> Vec<f64> {
    let steps = (max_per_day / IRRIGATION_QUANTUM).floor().to_usize().unwrap_or(0);
    (0..=steps).map(|i| i as f64 * IRRIGATION_QUANTUM).collect()
}

/// Discretization of the raw moisture scale `[0, max]` into fixed width bins.
/// Bin `i` covers `[i*step, i*step + step)`, the closing bin ends at `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistureGrid {
    step: i32,
    max: i32,
}

const DEFAULT_GRID: MoistureGrid = MoistureGrid::new(MOISTURE_STEP, MAX_MOISTURE);

impl Default for MoistureGrid {
    fn default() -> Self {
        DEFAULT_GRID
    }
}

impl MoistureGrid {
    const fn new(step: i32, max: i32) -> Self {
        assert!(step > 0 && max >= 0);
        Self { step, max }
    }

    pub fn max_moisture(&self) -> f64 {
        self.max as f64
    }

    pub fn num_bins(&self) -> usize {
        (self.max / self.step) as usize + 1
    }

    fn last_bin(&self) -> usize {
        self.num_bins() - 1
    }

    /// Representative moisture of a bin (its lower edge).
    pub fn value_of(&self, bin: usize) -> f64 {
        (bin * self.step as usize) as f64
    }

    /// Index of the bin holding `moisture`. Out of range values land in the first or last bin.
    pub fn bin_of(&self, moisture: f64) -> usize {
        (moisture / self.step as f64).floor().to_usize().map_or(0, |bin| bin.min(self.last_bin()))
    }

    pub fn clamp_moisture(&self, moisture: f64) -> f64 {
        moisture.clamp(0., self.max_moisture())
    }

    /// Clamps a raw sensor reading into the grid. The flag tells whether clamping happened.
    pub fn clamp_reading(&self, raw: i32) -> (i32, bool) {
        let clamped = raw.clamp(0, self.max);
        (clamped, clamped != raw)
    }
}
