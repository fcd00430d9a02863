use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("projectile-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("projectile-cli");
    }

    path
}

#[test]
fn test_cli_study_table() {
    let output = Command::new(get_cli_binary())
        .args([
            "study",
            "--speed", "50",
            "--angle", "45",
            "--mass", "1.0",
            "--drag", "0.1",
            "--base-step", "0.1",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("CONVERGENCE") && stdout.contains("Range"),
        "Should contain the study table"
    );
    // One row per resolution
    assert!(stdout.contains("0.1") && stdout.contains("0.0001"));
}

#[test]
fn test_cli_study_json_has_four_runs() {
    let output = Command::new(get_cli_binary())
        .args(["study", "--base-step", "0.1", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    let runs = report["runs"].as_array().expect("runs array");
    assert_eq!(runs.len(), 4);
    assert!(runs[0]["range"].is_number());
    // Trajectories only appear when asked for
    assert!(runs[0].get("trajectory").is_none());
}

#[test]
fn test_cli_study_csv_header() {
    let output = Command::new(get_cli_binary())
        .args(["study", "--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("step_size,range,max_height,final_speed"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn test_cli_rejects_invalid_mass() {
    let output = Command::new(get_cli_binary())
        .args(["study", "--mass=-1.0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mass"), "stderr should name the bad parameter");
}

#[test]
fn test_cli_flight_command() {
    let output = Command::new(get_cli_binary())
        .args(["flight", "--speed", "30", "--step", "0.01"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FLIGHT") && stdout.contains("Range"));
}

#[test]
fn test_cli_info() {
    let output = Command::new(get_cli_binary())
        .args(["info"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PROJECTILE LAB"));
}
