//! End-to-end tests for the flowplate binary and its library entry
//! points.

use std::{fs, path::Path, process::Command};

use tempfile::tempdir;

#[test]
fn e2e_binary_writes_public_flowchart_png() {
    let binary = Path::new(env!("CARGO_BIN_EXE_flowplate"));

    // The binary writes to <exe_dir>/../public, which it never creates
    // itself; provision it the way the consuming app's repo does.
    let public_dir = binary
        .parent()
        .expect("binary has a parent directory")
        .join("..")
        .join("public");
    fs::create_dir_all(&public_dir).expect("Failed to create public dir");

    let output = Command::new(binary)
        .output()
        .expect("Failed to run flowplate binary");

    assert!(
        output.status.success(),
        "binary exited nonzero: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("flowchart.png"),
        "confirmation line missing from stdout: {stdout:?}"
    );

    let output_path = public_dir.join("flowchart.png");
    let image = image::open(&output_path).expect("Output is not a decodable image");
    assert_eq!((image.width(), image.height()), (1200, 600));

    // Leave the build tree clean for the next run
    fs::remove_file(&output_path).expect("Failed to remove generated file");
    let _ = fs::remove_dir(&public_dir);
}

#[test]
fn generate_to_writes_a_png() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("flowchart.png");

    flowplate_cli::generate_to(&output_path).expect("Generation failed");

    let data = fs::read(&output_path).expect("Failed to read output");
    assert_eq!(&data[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn generate_to_missing_directory_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("missing").join("flowchart.png");

    let result = flowplate_cli::generate_to(&output_path);
    assert!(result.is_err(), "missing output directory must be fatal");
}
