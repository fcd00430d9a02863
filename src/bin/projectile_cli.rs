use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;

use projectile_lab::constants::MIN_TIME_STEP_S;
use projectile_lab::{
    run_convergence_study, simulate_flight, ConvergenceStudy, FlightRecord, SimulationError,
    SimulationParameters,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "Forward-Euler projectile flight and step-size convergence studies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the four-resolution convergence study
    Study {
        /// Initial speed (m/s)
        #[arg(short = 'v', long, default_value = "50.0")]
        speed: f64,

        /// Launch angle (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Projectile mass (kg)
        #[arg(short = 'm', long, default_value = "1.0")]
        mass: f64,

        /// Linear drag coefficient (kg/s)
        #[arg(short = 'k', long, default_value = "0.1")]
        drag: f64,

        /// Base time step (s); refined by 10x, 100x and 1000x
        #[arg(short = 's', long, default_value = "0.1")]
        base_step: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Include the full trajectories in JSON output
        #[arg(long)]
        trajectories: bool,
    },

    /// Simulate a single flight at one fixed step size
    Flight {
        /// Initial speed (m/s)
        #[arg(short = 'v', long, default_value = "50.0")]
        speed: f64,

        /// Launch angle (degrees)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Projectile mass (kg)
        #[arg(short = 'm', long, default_value = "1.0")]
        mass: f64,

        /// Linear drag coefficient (kg/s)
        #[arg(short = 'k', long, default_value = "0.1")]
        drag: f64,

        /// Time step (s)
        #[arg(short = 's', long, default_value = "0.001")]
        step: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every trajectory point
        #[arg(long)]
        full: bool,
    },

    /// Display tool information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

// Serialization mirrors for JSON output; the core types stay format-agnostic
#[derive(Debug, Serialize)]
struct RunReport {
    step_size: f64,
    range: f64,
    max_height: f64,
    final_speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<Vec<[f64; 2]>>,
}

#[derive(Debug, Serialize)]
struct StudyReport {
    initial_speed: f64,
    launch_angle_deg: f64,
    mass: f64,
    drag_coefficient: f64,
    base_step: f64,
    runs: Vec<RunReport>,
}

#[derive(Debug, Serialize)]
struct FlightReport {
    step_size: f64,
    range: f64,
    max_height: f64,
    final_speed: f64,
    samples: usize,
    trajectory: Vec<[f64; 2]>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Study {
            speed,
            angle,
            mass,
            drag,
            base_step,
            output,
            trajectories,
        } => {
            let params = SimulationParameters::new(speed, angle, mass, drag, base_step)?;
            let study = run_convergence_study(&params)?;
            display_study(&params, &study, output, trajectories)?;
        }

        Commands::Flight {
            speed,
            angle,
            mass,
            drag,
            step,
            output,
            full,
        } => {
            let params = SimulationParameters::new(speed, angle, mass, drag, step)?;
            if step < MIN_TIME_STEP_S {
                return Err(SimulationError::InvalidParameter {
                    name: "step",
                    reason: format!("must be at least {MIN_TIME_STEP_S:e} s (got {step:e})"),
                }
                .into());
            }
            let flight = simulate_flight(&params, step);
            display_flight(&flight, step, output, full)?;
        }

        Commands::Info => {
            println!("╔══════════════════════════════════════════╗");
            println!("║          PROJECTILE LAB v0.1.0           ║");
            println!("╠══════════════════════════════════════════╣");
            println!("║ 2D projectile flight under gravity and   ║");
            println!("║ linear drag, integrated with forward     ║");
            println!("║ Euler at four step sizes to show the     ║");
            println!("║ convergence of the estimates.            ║");
            println!("╠══════════════════════════════════════════╣");
            println!("║ Subcommands:                             ║");
            println!("║ • study  — four-resolution comparison    ║");
            println!("║ • flight — single fixed-step run         ║");
            println!("╚══════════════════════════════════════════╝");
        }
    }

    Ok(())
}

/// Step-size label rounded to 7 decimals, as shown in the legend and tables.
fn step_label(step_size: f64) -> String {
    format!("{}", (step_size * 1e7).round() / 1e7)
}

fn display_study(
    params: &SimulationParameters,
    study: &ConvergenceStudy,
    format: OutputFormat,
    trajectories: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let report = StudyReport {
                initial_speed: params.initial_speed,
                launch_angle_deg: params.launch_angle_deg,
                mass: params.mass,
                drag_coefficient: params.drag_coefficient,
                base_step: params.base_step,
                runs: study
                    .runs
                    .iter()
                    .map(|run| RunReport {
                        step_size: run.summary.step_size_s,
                        range: run.summary.range_m,
                        max_height: run.summary.max_height_m,
                        final_speed: run.summary.final_speed_mps,
                        trajectory: trajectories
                            .then(|| run.trajectory.iter().map(|p| [p.x, p.y]).collect()),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("step_size,range,max_height,final_speed");
            for summary in study.summaries() {
                println!(
                    "{},{:.3},{:.3},{:.3}",
                    step_label(summary.step_size_s),
                    summary.range_m,
                    summary.max_height_m,
                    summary.final_speed_mps
                );
            }
        }

        OutputFormat::Table => {
            println!("EULER CONVERGENCE STUDY");
            println!(
                "v0 = {} m/s, angle = {}°, m = {} kg, k = {}, base dt = {} s",
                params.initial_speed,
                params.launch_angle_deg,
                params.mass,
                params.drag_coefficient,
                params.base_step
            );
            println!();
            println!(
                "{:<12} | {:<15} | {:<12} | {}",
                "Step dt (s)", "Range (m)", "Height (m)", "V final (m/s)"
            );
            println!("{}", "=".repeat(62));
            for summary in study.summaries() {
                println!(
                    "{:<12} | {:<15.3} | {:<12.3} | {:.3}",
                    step_label(summary.step_size_s),
                    summary.range_m,
                    summary.max_height_m,
                    summary.final_speed_mps
                );
            }
            if study.is_empty() {
                println!("(no resolutions executed: every candidate step fell below the floor)");
            }
        }
    }

    Ok(())
}

fn display_flight(
    flight: &FlightRecord,
    step_size: f64,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let report = FlightReport {
                step_size,
                range: flight.range_m,
                max_height: flight.max_height_m,
                final_speed: flight.final_speed_mps,
                samples: flight.trajectory.len(),
                trajectory: flight.trajectory.iter().map(|p| [p.x, p.y]).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("x,y");
            for point in &flight.trajectory {
                println!("{:.4},{:.4}", point.x, point.y);
            }
        }

        OutputFormat::Table => {
            println!("╔══════════════════════════════════════════╗");
            println!("║              FLIGHT RESULTS              ║");
            println!("╠══════════════════════════════════════════╣");
            println!("║ Step size:       {:>12} s           ║", step_label(step_size));
            println!("║ Range:           {:>12.3} m           ║", flight.range_m);
            println!("║ Max height:      {:>12.3} m           ║", flight.max_height_m);
            println!("║ Final speed:     {:>12.3} m/s         ║", flight.final_speed_mps);
            println!("║ Samples:         {:>12}             ║", flight.trajectory.len());
            println!("╚══════════════════════════════════════════╝");

            println!();
            println!("{:>10} | {:>10}", "X (m)", "Y (m)");
            println!("-----------+-----------");
            let stride = if full {
                1
            } else {
                (flight.trajectory.len() / 10).max(1)
            };
            for (i, point) in flight.trajectory.iter().enumerate() {
                if i % stride == 0 || i == flight.trajectory.len() - 1 {
                    println!("{:>10.3} | {:>10.3}", point.x, point.y);
                }
            }
        }
    }

    Ok(())
}
