//! Pixel-space geometric types used by the composer.

/// A point in canvas pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }
}

/// An axis-aligned rectangle given by its edge coordinates
///
/// All four edges lie on the rectangle: an outline drawn for this rect
/// covers the `left`/`right` columns and `top`/`bottom` rows themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Creates a rectangle from its edge coordinates
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn left(self) -> i32 {
        self.left
    }

    pub fn top(self) -> i32 {
        self.top
    }

    pub fn right(self) -> i32 {
        self.right
    }

    pub fn bottom(self) -> i32 {
        self.bottom
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    /// Returns the center of the rectangle, rounded toward the origin
    pub fn center(self) -> Point {
        Point::new(
            (self.left + self.right) / 2,
            (self.top + self.bottom) / 2,
        )
    }

    /// Returns this rectangle shrunk by `amount` pixels on every side
    pub fn inset(self, amount: i32) -> Self {
        Self {
            left: self.left + amount,
            top: self.top + amount,
            right: self.right - amount,
            bottom: self.bottom - amount,
        }
    }
}
