//! Forward-Euler flight integrator.
//!
//! One fixed-step scheme, deliberately the simplest one: position advances
//! with the pre-update velocity, then velocity advances with the acceleration
//! evaluated before the move. That ordering changes the computed trajectory,
//! not just the style, and is part of the contract the convergence study
//! measures.

use nalgebra::Vector2;

use crate::constants::{G_ACCEL_MPS2, RANGE_CUTOFF_M};
use crate::parameters::SimulationParameters;

/// Outcome of a single fixed-step flight.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    /// (x, y) samples in time order, starting at the origin. Points whose
    /// updated y dropped below ground are not recorded.
    pub trajectory: Vec<Vector2<f64>>,
    /// Final integrated x at loop exit. This is the x of the exit state, so
    /// it can lie slightly past the last recorded trajectory point.
    pub range_m: f64,
    /// Running maximum of y over all visited states.
    pub max_height_m: f64,
    /// Velocity magnitude at loop exit.
    pub final_speed_mps: f64,
}

/// Simulate one flight from launch to ground impact at a fixed step `dt`.
///
/// Pure computation with no failure channel. Preconditions (`dt > 0`,
/// `mass > 0`, `initial_speed >= 0`, `drag_coefficient >= 0`) are the
/// caller's responsibility and are not re-checked here; a zero mass, for
/// example, yields non-finite statistics that the driver surfaces as an
/// error.
///
/// Termination is guaranteed: a drag-free ballistic flight always returns to
/// ground level in finite time, and [`RANGE_CUTOFF_M`] bounds the degenerate
/// cases that never would.
pub fn simulate_flight(params: &SimulationParameters, dt: f64) -> FlightRecord {
    let launch = params.launch_angle_deg.to_radians();
    let mut velocity = Vector2::new(
        params.initial_speed * launch.cos(),
        params.initial_speed * launch.sin(),
    );
    let mut position = Vector2::new(0.0, 0.0);
    let drag_per_mass = params.drag_coefficient / params.mass;

    let mut max_height = 0.0_f64;
    let mut trajectory = vec![position];

    while position.y >= 0.0 {
        // Gravity plus viscous drag, evaluated at the pre-move velocity
        let accel = Vector2::new(
            -drag_per_mass * velocity.x,
            -G_ACCEL_MPS2 - drag_per_mass * velocity.y,
        );

        // Position first, with the old velocity; then the velocity kick
        position += velocity * dt;
        velocity += accel * dt;

        if position.y > max_height {
            max_height = position.y;
        }
        // The sub-ground exit state still counts for the range, not the plot
        if position.y >= 0.0 {
            trajectory.push(position);
        }
        if position.x > RANGE_CUTOFF_M {
            break;
        }
    }

    FlightRecord {
        range_m: position.x,
        max_height_m: max_height,
        final_speed_mps: velocity.norm(),
        trajectory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_shot(speed: f64) -> SimulationParameters {
        SimulationParameters::new(speed, 0.0, 1.0, 0.0, 0.1).unwrap()
    }

    #[test]
    fn test_trajectory_starts_at_origin() {
        let params = SimulationParameters::default();
        let flight = simulate_flight(&params, 0.01);
        assert_eq!(flight.trajectory[0], Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_position_updates_before_velocity() {
        // Flat drag-free shot at 10 m/s with dt = 0.1. The first step moves
        // the body a full meter because vy is still zero when the position is
        // advanced; the second step dips below ground and ends the flight at
        // x = 2 m. A velocity-first scheme would stop at 1 m.
        let flight = simulate_flight(&flat_shot(10.0), 0.1);
        assert!((flight.range_m - 2.0).abs() < 1e-12);
        assert_eq!(flight.trajectory.len(), 2);
        assert!((flight.trajectory[1].x - 1.0).abs() < 1e-12);
        assert_eq!(flight.max_height_m, 0.0);
    }

    #[test]
    fn test_final_speed_includes_the_exit_state() {
        // After two velocity kicks of -g·dt each
        let flight = simulate_flight(&flat_shot(10.0), 0.1);
        let vy = 2.0 * G_ACCEL_MPS2 * 0.1;
        let expected = (10.0_f64 * 10.0 + vy * vy).sqrt();
        assert!((flight.final_speed_mps - expected).abs() < 1e-9);
    }

    #[test]
    fn test_max_height_tracks_the_apex() {
        let params = SimulationParameters::new(50.0, 45.0, 1.0, 0.0, 0.1).unwrap();
        let flight = simulate_flight(&params, 0.001);
        // Drag-free apex is v0y²/2g; Euler at dt = 0.001 lands within centimeters
        let v0y = 50.0 * 45.0_f64.to_radians().sin();
        let apex = v0y * v0y / (2.0 * G_ACCEL_MPS2);
        assert!((flight.max_height_m - apex).abs() < 0.05);
        assert!(flight.max_height_m >= apex);
    }

    #[test]
    fn test_range_cutoff_bounds_degenerate_flights() {
        let params = SimulationParameters::new(2000.0, 45.0, 1.0, 0.0, 0.05).unwrap();
        let flight = simulate_flight(&params, 0.05);
        assert!(flight.range_m > RANGE_CUTOFF_M);
        assert!(flight.range_m < RANGE_CUTOFF_M + 2000.0 * 0.05 + 1.0);
        // The cutoff fired while the body was still well above ground
        let last = flight.trajectory.last().unwrap();
        assert!(last.y > 0.0);
    }
}
