use super::{
    ds::{DailyPlan, ForecastDay, PlanReport, PlannerConfig},
    grid::{irrigation_options, MoistureGrid},
    model::{step_cost, DayModel},
};
use crate::error::{ConfigError, PlannerError};
use std::convert::Infallible;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: f64,
    prev_bin: usize,
    /// volume chosen on the transition into this cell
    volume: f64,
}

impl Default for Cell {
    fn default() -> Self {
        Self { cost: f64::INFINITY, prev_bin: 0, volume: 0. }
    }
}

/// Dense `(days + 1) x bins` table in one buffer, row per day.
struct DpTable {
    bins: usize,
    cells: Vec<Cell>,
}

impl DpTable {
    fn new(days: usize, bins: usize) -> Self {
        Self { bins, cells: vec![Cell::default(); (days + 1) * bins] }
    }

    fn row(&self, day: usize) -> &[Cell] {
        &self.cells[day * self.bins..(day + 1) * self.bins]
    }

    fn cell_mut(&mut self, day: usize, bin: usize) -> &mut Cell {
        &mut self.cells[day * self.bins + bin]
    }

    /// Row `day` for reading and row `day + 1` for writing.
    fn rows_mut(&mut self, day: usize) -> (&[Cell], &mut [Cell]) {
        let (cur, next) = self.cells[day * self.bins..(day + 2) * self.bins].split_at_mut(self.bins);
        (&*cur, next)
    }
}

/// Finite horizon DP optimizer over (day, moisture bin).
///
/// The configuration is validated once in [`IrrigationPlanner::new`] and never changes afterwards,
/// so one instance can serve concurrent planning calls behind an `Arc`.
#[derive(Debug, Clone)]
pub struct IrrigationPlanner {
    cfg: PlannerConfig,
    grid: MoistureGrid,
}

impl IrrigationPlanner {
    pub fn new(cfg: PlannerConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let grid = MoistureGrid::default();
        debug!(
            "Planner ready: optimal band [{}, {}], max {} L/day, {} moisture bins",
            cfg.soil_optimal_min,
            cfg.soil_optimal_max,
            cfg.max_irrigation_per_day,
            grid.num_bins()
        );
        Ok(Self { cfg, grid })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.cfg
    }

    /// Daily irrigation volumes, aligned 1:1 with `forecasts`.
    pub fn compute_plan(&self, initial_moisture: i32, forecasts: &[ForecastDay]) -> Vec<DailyPlan> {
        self.plan(initial_moisture, forecasts).entries
    }

    pub fn plan(&self, initial_moisture: i32, forecasts: &[ForecastDay]) -> PlanReport {
        match self.solve(initial_moisture, forecasts, |_| Ok::<(), Infallible>(())) {
            Ok(report) => report,
            Err(never) => match never {},
        }
    }

    /// Same as [`Self::plan`] but gives up between days once `cancel` reads `true`.
    pub fn plan_until(
        &self, initial_moisture: i32, forecasts: &[ForecastDay], cancel: &watch::Receiver<bool>,
    ) -> Result<PlanReport, PlannerError> {
        self.solve(initial_moisture, forecasts, |day| {
            if *cancel.borrow() {
                Err(PlannerError::Cancelled { day })
            } else {
                Ok(())
            }
        })
    }

    fn solve<E>(
        &self, initial_moisture: i32, forecasts: &[ForecastDay], mut check: impl FnMut(usize) -> Result<(), E>,
    ) -> Result<PlanReport, E> {
        let (start_moisture, clamped) = self.grid.clamp_reading(initial_moisture);
        if clamped {
            warn!("Initial soil moisture {} out of range, clamped to {}", initial_moisture, start_moisture);
        }
        let start_moisture = start_moisture as f64;
        let start_bin = self.grid.bin_of(start_moisture);

        if forecasts.is_empty() {
            return Ok(PlanReport::empty(start_bin, clamped));
        }

        let days = forecasts.len();
        let bins = self.grid.num_bins();
        let options = irrigation_options(self.cfg.max_irrigation_per_day);
        let optimal_center = self.cfg.optimal_center();
        debug!("Planning {} days over {} moisture bins x {} irrigation options", days, bins, options.len());

        let mut table = DpTable::new(days, bins);
        table.cell_mut(0, start_bin).cost = 0.;

        for (day, forecast) in forecasts.iter().enumerate() {
            check(day)?;
            let model = DayModel::new(&self.cfg, forecast);
            trace!(
                "Day {} ({}): et {:.3} L, rain {:.3}",
                day,
                forecast.date,
                model.evapotranspiration,
                model.rain_replenishment
            );

            let (cur, next) = table.rows_mut(day);
            for (bin, cell) in cur.iter().enumerate() {
                if cell.cost.is_infinite() {
                    continue;
                }
                // the starting cell carries the exact reading, later cells the bin value
                let current = if day == 0 { start_moisture } else { self.grid.value_of(bin) };

                for &volume in &options {
                    let moisture = model.next_moisture(&self.grid, current, volume);
                    let total = cell.cost + step_cost(&self.cfg, optimal_center, moisture, volume, cell.volume);
                    let target = &mut next[self.grid.bin_of(moisture)];
                    if total < target.cost {
                        *target = Cell { cost: total, prev_bin: bin, volume };
                    }
                }
            }
        }

        let (mut terminal_bin, mut total_cost) = (0, f64::INFINITY);
        for (bin, cell) in table.row(days).iter().enumerate() {
            if cell.cost < total_cost {
                terminal_bin = bin;
                total_cost = cell.cost;
            }
        }
        if total_cost.is_infinite() {
            warn!("No reachable terminal moisture state, backtracing from bin 0");
        }
        debug!("Terminal bin {} with cost {:.4}", terminal_bin, total_cost);

        let mut volumes = vec![0.; days];
        let mut bin = terminal_bin;
        for day in (1..=days).rev() {
            let cell = table.row(day)[bin];
            volumes[day - 1] = cell.volume;
            bin = cell.prev_bin;
        }

        let entries = forecasts
            .iter()
            .zip(volumes)
            .map(|(forecast, planned_volume_l)| DailyPlan { date: forecast.date.clone(), planned_volume_l })
            .collect();

        Ok(PlanReport { entries, initial_bin: start_bin, initial_clamped: clamped, terminal_bin, total_cost })
    }
}
