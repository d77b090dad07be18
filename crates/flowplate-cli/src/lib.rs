//! CLI logic for the flowplate placeholder generator.
//!
//! The binary has one job: compose the fixed placeholder diagram and
//! write it to `../public/flowchart.png` next to the executable's own
//! directory, overwriting whatever is there.

mod args;

pub use args::Args;

use std::{
    env,
    path::{Path, PathBuf},
};

use log::info;

use flowplate::{Composer, Diagram, FlowplateError};

/// Run the flowplate CLI application.
///
/// Resolves the fixed output location relative to the running executable
/// and generates the placeholder PNG there.
///
/// # Errors
///
/// Returns `FlowplateError` for:
/// - An unresolvable executable location
/// - A missing or unwritable output directory
/// - PNG encoding failures
pub fn run(_args: &Args) -> Result<(), FlowplateError> {
    let output_path = default_output_path()?;
    generate_to(&output_path)
}

/// Compose the placeholder diagram and write it to `path` as a PNG.
///
/// The output directory must already exist; it is never created here.
/// On success a confirmation line with the resolved path is printed to
/// stdout.
///
/// # Errors
///
/// Returns `FlowplateError` if the file cannot be written.
pub fn generate_to(path: &Path) -> Result<(), FlowplateError> {
    info!(output_path:? = path; "Generating placeholder flowchart");

    let composer = Composer::new();
    let image = composer.compose(&Diagram::fintech_placeholder());
    composer.write_png(&image, path)?;

    // The file exists now, so canonicalization only fails on exotic
    // filesystems; fall back to the unresolved path in that case.
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    println!("Flowchart created at: {}", resolved.display());

    Ok(())
}

/// The fixed output location: `<exe_dir>/../public/flowchart.png`.
///
/// # Errors
///
/// Returns `FlowplateError` if the executable's location cannot be
/// determined.
pub fn default_output_path() -> Result<PathBuf, FlowplateError> {
    let exe = env::current_exe()?;
    let exe_dir = exe.parent().ok_or_else(|| {
        FlowplateError::OutputPath("executable has no parent directory".to_string())
    })?;

    Ok(exe_dir.join("..").join("public").join("flowchart.png"))
}
