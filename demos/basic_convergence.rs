//! Basic Convergence Study Example
//!
//! Runs the forward-Euler integrator at four step sizes for one launch
//! configuration and prints the per-resolution summary rows, showing how the
//! range and apex estimates settle as the step shrinks.

use projectile_lab::{run_convergence_study, SimulationParameters};

fn main() {
    println!("=== Basic Convergence Study ===\n");

    let params = SimulationParameters::new(50.0, 45.0, 1.0, 0.1, 0.1)
        .expect("parameters are valid");

    println!("Launch Parameters:");
    println!("  Speed: {} m/s", params.initial_speed);
    println!("  Angle: {}°", params.launch_angle_deg);
    println!("  Mass: {} kg", params.mass);
    println!("  Drag coefficient: {}", params.drag_coefficient);
    println!("  Base step: {} s", params.base_step);
    println!();

    let study = run_convergence_study(&params).expect("validated input cannot fail");

    println!("  Step (s) | Range (m) | Apex (m) | Final speed (m/s)");
    println!("  ---------|-----------|----------|------------------");
    for summary in study.summaries() {
        println!(
            "  {:>8} | {:>9.3} | {:>8.3} | {:>8.3}",
            summary.step_size_s, summary.range_m, summary.max_height_m, summary.final_speed_mps
        );
    }

    if let (Some(coarsest), Some(finest)) = (study.runs.first(), study.runs.last()) {
        println!();
        println!(
            "Range moved {:.3} m between dt = {} s and dt = {} s.",
            coarsest.summary.range_m - finest.summary.range_m,
            coarsest.summary.step_size_s,
            finest.summary.step_size_s
        );
    }
}
