//! # Projectile Lab
//!
//! Two-dimensional projectile flight under gravity and linear drag, integrated
//! with the forward Euler method at several step sizes so that the convergence
//! of range, apex, and final-speed estimates can be observed directly.

// Re-export the main types and functions
pub use convergence::{run_convergence_study, ConvergenceRun, ConvergenceStudy, RunSummary};
pub use error::SimulationError;
pub use euler::{simulate_flight, FlightRecord};
pub use parameters::SimulationParameters;

// Module declarations
pub mod constants;
mod convergence;
mod error;
mod euler;
mod parameters;
