//! Error taxonomy for the simulation core.

use thiserror::Error;

use crate::parameters::SimulationParameters;

/// Failures surfaced by parameter validation and the convergence driver.
#[derive(Debug, Clone, Error)]
pub enum SimulationError {
    /// A raw input failed to parse as a finite number, or violated a
    /// semantic constraint. Detected at the boundary, before the driver or
    /// the integrator ever see the value.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A run produced a non-finite statistic. The study is abandoned as a
    /// whole; a subset of resolutions would be as misleading as none.
    #[error("non-finite result at step size {step_size_s} s for {params:?}")]
    Computation {
        params: SimulationParameters,
        step_size_s: f64,
    },
}
