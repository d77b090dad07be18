//! Static diagram description.
//!
//! The diagram content is plain data: a title, an ordered list of box
//! descriptors, and a palette. Nothing here knows how to draw — the
//! description is handed to [`render::compose`](crate::render::compose),
//! so the content can be swapped without touching drawing code. No edges
//! or connections are modeled; boxes are positioned to suggest a flow.

use crate::{
    color::Color,
    geometry::{Point, Rect},
};

/// One flowchart node: rectangle bounds plus a label.
///
/// Labels may contain embedded `\n` line breaks, which the renderer
/// preserves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxSpec {
    bounds: Rect,
    label: String,
}

impl BoxSpec {
    /// Creates a box descriptor from bounds and a label
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
        }
    }

    /// Returns the rectangle bounds of the box
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the label text
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A complete diagram description: canvas, title, palette and boxes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    width: u32,
    height: u32,
    background: Color,
    title: String,
    title_anchor: Point,
    title_color: Color,
    outline_color: Color,
    stroke_width: u32,
    label_color: Color,
    boxes: Vec<BoxSpec>,
}

impl Diagram {
    /// The fixed placeholder content shipped with the application.
    ///
    /// A 1200×600 dark canvas titled "FINTECH FLOW CHART" with five
    /// manually positioned stage boxes.
    pub fn fintech_placeholder() -> Self {
        Self {
            width: 1200,
            height: 600,
            background: Color::from_rgb(0x00, 0x00, 0x00),
            title: "FINTECH FLOW CHART".to_string(),
            title_anchor: Point::new(600, 50),
            title_color: Color::from_rgb(0xEF, 0x44, 0x44),
            outline_color: Color::from_rgb(0x8B, 0x5C, 0xF6),
            stroke_width: 3,
            label_color: Color::from_rgb(0xFF, 0xFF, 0xFF),
            boxes: vec![
                BoxSpec::new(Rect::new(150, 150, 350, 270), "1. Smart Application\nIntake"),
                BoxSpec::new(Rect::new(150, 330, 350, 480), "2. KYC + Fraud Check\nAgent"),
                BoxSpec::new(Rect::new(650, 150, 850, 270), "3. Document\nExtraction"),
                BoxSpec::new(Rect::new(650, 330, 850, 480), "4. Risk Scoring\nEngine"),
                BoxSpec::new(Rect::new(400, 520, 600, 580), "5. Automated Decision"),
            ],
        }
    }

    /// Returns the canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the background color
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the title text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the point the title is centered on
    pub fn title_anchor(&self) -> Point {
        self.title_anchor
    }

    /// Returns the title color
    pub fn title_color(&self) -> Color {
        self.title_color
    }

    /// Returns the box outline color
    pub fn outline_color(&self) -> Color {
        self.outline_color
    }

    /// Returns the outline stroke width in pixels
    pub fn stroke_width(&self) -> u32 {
        self.stroke_width
    }

    /// Returns the box label color
    pub fn label_color(&self) -> Color {
        self.label_color
    }

    /// Returns the ordered box descriptors
    pub fn boxes(&self) -> &[BoxSpec] {
        &self.boxes
    }
}
