//! Color handling for the composer.
//!
//! Colors are specified as `#RRGGBB` hex strings in the diagram
//! description and resolved to [`image::Rgb`] pixels for drawing.

use std::fmt;

use image::Rgb;

/// An opaque RGB color parsed from a `#RRGGBB` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Parses a CSS-style `#RRGGBB` hex string
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a `#` followed by
    /// exactly six hex digits.
    pub fn new(color_str: &str) -> Result<Self, String> {
        let hex = color_str
            .strip_prefix('#')
            .ok_or_else(|| format!("Invalid color '{color_str}': missing '#' prefix"))?;

        // Byte-range slicing below requires ASCII input
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!(
                "Invalid color '{color_str}': expected 6 hex digits"
            ));
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|err| format!("Invalid color '{color_str}': {err}"))
        };

        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Creates a color directly from channel values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the pixel value for this color
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Returns the channels as floats in `0.0..=255.0`, used for blending
    pub(crate) fn channels_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(Color::new("#EF4444").unwrap(), Color::from_rgb(0xEF, 0x44, 0x44));
        assert_eq!(Color::new("#000000").unwrap(), Color::from_rgb(0, 0, 0));
        assert_eq!(Color::new("#FFFFFF").unwrap(), Color::from_rgb(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(Color::new("EF4444").is_err());
        assert!(Color::new("#EF44").is_err());
        assert!(Color::new("#GG0000").is_err());
        assert!(Color::new("").is_err());
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        // Six bytes but not six hex digits; must be an Err, not a
        // char-boundary panic
        assert!(Color::new("#a\u{e9}a\u{e9}").is_err());
        assert!(Color::new("#ééé").is_err());
    }

    #[test]
    fn displays_as_hex() {
        let color = Color::new("#8b5cf6").unwrap();
        assert_eq!(color.to_string(), "#8B5CF6");
    }

    #[test]
    fn converts_to_pixel() {
        let color = Color::new("#8B5CF6").unwrap();
        assert_eq!(color.to_pixel(), image::Rgb([0x8B, 0x5C, 0xF6]));
    }
}
