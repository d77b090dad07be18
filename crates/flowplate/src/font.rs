//! Font resolution for the composer.
//!
//! The composer wants the preferred system font (Arial) at three point
//! sizes. Resolution happens once at startup: each well-known location is
//! tried in order, and on any failure — file missing, unreadable, or not a
//! parsable font — the embedded default face is substituted for all three
//! sizes. The fallback is unconditional and the run always continues;
//! callers never see a font error.

use std::{fs, path::Path};

use log::warn;
use rusttype::{Font, Scale};
use thiserror::Error;

/// Point size of the title font
pub const TITLE_SIZE: f32 = 48.0;

/// Point size of the box label font
pub const LABEL_SIZE: f32 = 24.0;

/// Point size of the caption font
pub const CAPTION_SIZE: f32 = 18.0;

/// Embedded default face, guaranteed available
const DEFAULT_FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Well-known locations of the preferred face across platforms
const PREFERRED_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/arial.ttf",
    "/usr/local/share/fonts/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Why the preferred font could not be used.
///
/// Never escapes this module; every variant is answered by the embedded
/// default.
#[derive(Debug, Error)]
enum FontError {
    #[error("no candidate font file exists")]
    NotFound,

    #[error("font file unreadable: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("font file is not a valid font")]
    Malformed,
}

/// A font face paired with the scale it is drawn at
#[derive(Debug, Clone)]
pub struct SizedFont {
    font: Font<'static>,
    scale: Scale,
}

impl SizedFont {
    fn new(font: Font<'static>, size: f32) -> Self {
        Self {
            font,
            scale: Scale::uniform(size),
        }
    }

    /// Returns the underlying font face
    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    /// Returns the drawing scale
    pub fn scale(&self) -> Scale {
        self.scale
    }
}

/// The three sized font handles used by the composer
#[derive(Debug, Clone)]
pub struct FontSet {
    title: SizedFont,
    label: SizedFont,
    caption: SizedFont,
}

impl FontSet {
    /// Resolves the preferred font, falling back to the embedded default.
    ///
    /// This never fails: any problem locating or parsing the preferred
    /// face selects the default for all three sizes.
    pub fn load() -> Self {
        Self::load_from(PREFERRED_FONT_PATHS)
    }

    /// Like [`FontSet::load`] but with an explicit candidate list.
    ///
    /// Exposed so the fallback policy can be exercised directly with an
    /// unresolvable candidate set.
    pub fn load_from(candidates: &[&str]) -> Self {
        let font = match preferred_font(candidates) {
            Ok(font) => font,
            Err(err) => {
                warn!(err:%; "Preferred font unavailable, using embedded default");
                embedded_default()
            }
        };

        Self::from_face(font)
    }

    fn from_face(font: Font<'static>) -> Self {
        Self {
            title: SizedFont::new(font.clone(), TITLE_SIZE),
            label: SizedFont::new(font.clone(), LABEL_SIZE),
            caption: SizedFont::new(font, CAPTION_SIZE),
        }
    }

    /// Returns the title font handle
    pub fn title(&self) -> &SizedFont {
        &self.title
    }

    /// Returns the box label font handle
    pub fn label(&self) -> &SizedFont {
        &self.label
    }

    /// Returns the caption font handle
    pub fn caption(&self) -> &SizedFont {
        &self.caption
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::load()
    }
}

fn preferred_font(candidates: &[&str]) -> Result<Font<'static>, FontError> {
    let path = candidates
        .iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .ok_or(FontError::NotFound)?;

    let data = fs::read(path)?;
    Font::try_from_vec(data).ok_or(FontError::Malformed)
}

fn embedded_default() -> Font<'static> {
    Font::try_from_bytes(DEFAULT_FONT_BYTES).expect("embedded default font is a valid TTF")
}
