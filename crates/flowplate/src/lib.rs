//! Flowplate - a one-shot placeholder flowchart image generator.
//!
//! Composes a fixed, titled box diagram onto an in-memory canvas and
//! writes it out as a PNG. The diagram content is plain data
//! ([`Diagram`]), the font policy is resolve-once-with-fallback
//! ([`FontSet`]), and the drawing itself is a single straight-line pass
//! ([`render::compose`]).

pub mod color;
pub mod diagram;
pub mod font;
pub mod geometry;
pub mod render;

mod error;

pub use diagram::{BoxSpec, Diagram};
pub use error::FlowplateError;
pub use font::FontSet;

use std::path::Path;

use image::RgbImage;
use log::info;

/// Composer for rendering diagram descriptions to PNG files.
///
/// Holds the resolved font set so fonts are loaded once and reused
/// across compose calls.
///
/// # Examples
///
/// ```rust,no_run
/// use flowplate::{Composer, Diagram};
///
/// let composer = Composer::new();
/// let image = composer.compose(&Diagram::fintech_placeholder());
/// composer
///     .write_png(&image, "public/flowchart.png".as_ref())
///     .expect("Failed to write PNG");
/// ```
pub struct Composer {
    fonts: FontSet,
}

impl Composer {
    /// Create a composer, resolving fonts via the standard fallback
    /// policy.
    ///
    /// This never fails: if the preferred font is unavailable the
    /// embedded default face is used for all sizes.
    pub fn new() -> Self {
        Self {
            fonts: FontSet::load(),
        }
    }

    /// Create a composer over an already-resolved font set.
    pub fn with_fonts(fonts: FontSet) -> Self {
        Self { fonts }
    }

    /// Render the diagram description to a pixel buffer.
    pub fn compose(&self, diagram: &Diagram) -> RgbImage {
        info!(title = diagram.title(), boxes = diagram.boxes().len(); "Composing diagram");
        render::compose(diagram, &self.fonts)
    }

    /// Write the pixel buffer to `path` as a PNG, overwriting any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns [`FlowplateError`] if the target directory is missing or
    /// unwritable, or if encoding fails.
    pub fn write_png(&self, image: &RgbImage, path: &Path) -> Result<(), FlowplateError> {
        render::save_png(image, path)?;
        info!(path:? = path; "PNG written");
        Ok(())
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}
