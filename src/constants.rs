/// Physical constants and termination guards for the flight simulation

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.81;

/// Hard horizontal cutoff in meters.
///
/// A flight that passes this distance is truncated immediately, whatever its
/// altitude. Certain drag/gravity imbalances never bring the body back to
/// ground level, so this guard bounds every run rather than relying on
/// incidental floating-point behavior.
pub const RANGE_CUTOFF_M: f64 = 30_000.0;

/// Smallest time step the convergence driver will execute, in seconds.
///
/// Candidates below this floor are skipped, not run: a pathologically small
/// base step would otherwise produce an effectively infinite loop. A base
/// step small enough that all four candidates fall under the floor yields an
/// empty study.
pub const MIN_TIME_STEP_S: f64 = 1e-7;

/// Refinement divisors applied to the base step, coarsest first.
///
/// The resulting candidate list `[h, h/10, h/100, h/1000]` is fixed; its
/// ordering carries through to the study results and drives row and legend
/// ordering downstream.
pub const STEP_DIVISORS: [f64; 4] = [1.0, 10.0, 100.0, 1000.0];
