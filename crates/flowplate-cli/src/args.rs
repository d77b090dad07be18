//! Command-line argument definitions for the flowplate CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. The generator takes no positional arguments —
//! the diagram content and output location are fixed — so the only
//! control is logging verbosity.

use clap::Parser;

/// Command-line arguments for the flowplate placeholder generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
