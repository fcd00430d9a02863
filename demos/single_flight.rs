//! Single Flight Example
//!
//! Simulates one fixed-step flight and walks the sampled trajectory.

use projectile_lab::{simulate_flight, SimulationParameters};

fn main() {
    println!("=== Single Flight ===\n");

    let params = SimulationParameters::new(30.0, 60.0, 0.5, 0.05, 0.01)
        .expect("parameters are valid");
    let dt = params.base_step;

    let flight = simulate_flight(&params, dt);

    println!("Range: {:.3} m", flight.range_m);
    println!("Max height: {:.3} m", flight.max_height_m);
    println!("Final speed: {:.3} m/s", flight.final_speed_mps);
    println!("Samples: {}", flight.trajectory.len());
    println!();

    println!("  X (m)   |  Y (m)");
    println!("  --------|--------");
    let stride = (flight.trajectory.len() / 12).max(1);
    for (i, point) in flight.trajectory.iter().enumerate() {
        if i % stride == 0 || i == flight.trajectory.len() - 1 {
            println!("  {:>7.2} | {:>6.2}", point.x, point.y);
        }
    }
}
