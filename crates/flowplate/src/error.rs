//! Error types for flowplate operations.
//!
//! This module provides the main error type [`FlowplateError`] which wraps
//! the failure conditions that can occur while composing and writing the
//! placeholder image.
//!
//! Font-loading failure is deliberately absent: a missing preferred font is
//! recovered locally by falling back to the embedded default and is never
//! surfaced to callers.

use std::io;

use thiserror::Error;

/// The main error type for flowplate operations.
#[derive(Debug, Error)]
pub enum FlowplateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Output path error: {0}")]
    OutputPath(String),
}
