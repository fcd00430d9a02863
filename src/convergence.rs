//! Multi-resolution convergence driver.
//!
//! Runs the integrator at four geometrically refined step sizes for one
//! parameter set and collects the per-resolution trajectories and summary
//! rows in coarsest-first order.

use nalgebra::Vector2;

use crate::constants::{MIN_TIME_STEP_S, STEP_DIVISORS};
use crate::error::SimulationError;
use crate::euler::simulate_flight;
use crate::parameters::SimulationParameters;

/// Summary statistics for one executed step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub step_size_s: f64,
    pub range_m: f64,
    pub max_height_m: f64,
    pub final_speed_mps: f64,
}

/// One executed resolution: the full trajectory plus its summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceRun {
    pub trajectory: Vec<Vector2<f64>>,
    pub summary: RunSummary,
}

/// Ordered results of one convergence study, coarsest step first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvergenceStudy {
    pub runs: Vec<ConvergenceRun>,
}

impl ConvergenceStudy {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Summary rows in result order.
    pub fn summaries(&self) -> impl Iterator<Item = &RunSummary> {
        self.runs.iter().map(|run| &run.summary)
    }
}

/// Run the integrator at `h, h/10, h/100, h/1000` and collect the results.
///
/// Candidates below [`MIN_TIME_STEP_S`] are skipped without error; skipping
/// every candidate yields an empty study. No step size is retried. Any run
/// that produces a non-finite statistic (validated input cannot, but a caller
/// constructing parameters by hand can, e.g. with a zero mass) abandons the
/// study with [`SimulationError::Computation`] — the resolutions form one
/// convergence picture, so no subset is ever returned.
pub fn run_convergence_study(
    params: &SimulationParameters,
) -> Result<ConvergenceStudy, SimulationError> {
    let mut runs = Vec::with_capacity(STEP_DIVISORS.len());

    for divisor in STEP_DIVISORS {
        let dt = params.base_step / divisor;
        if dt < MIN_TIME_STEP_S {
            log::debug!("skipping step size {dt:e} s: below the {MIN_TIME_STEP_S:e} s floor");
            continue;
        }

        let flight = simulate_flight(params, dt);
        if !flight.range_m.is_finite()
            || !flight.max_height_m.is_finite()
            || !flight.final_speed_mps.is_finite()
        {
            return Err(SimulationError::Computation {
                params: params.clone(),
                step_size_s: dt,
            });
        }

        log::debug!(
            "dt = {dt:e} s: range {:.3} m, apex {:.3} m, final speed {:.3} m/s over {} samples",
            flight.range_m,
            flight.max_height_m,
            flight.final_speed_mps,
            flight.trajectory.len(),
        );

        runs.push(ConvergenceRun {
            summary: RunSummary {
                step_size_s: dt,
                range_m: flight.range_m,
                max_height_m: flight.max_height_m,
                final_speed_mps: flight.final_speed_mps,
            },
            trajectory: flight.trajectory,
        });
    }

    Ok(ConvergenceStudy { runs })
}
