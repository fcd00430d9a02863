//! Informational front door for the projectile lab

fn main() {
    println!("Projectile Lab v0.1.0");
    println!();
    println!("Forward-Euler projectile flight simulation with step-size");
    println!("convergence studies under gravity and linear drag.");
    println!();
    println!("For the command-line interface, run:");
    println!("  projectile-cli study --help");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: projectile-lab = \"0.1\"");
}
