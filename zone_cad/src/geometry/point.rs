//! Horizontal 2D point used by every predicate and hull routine.

/// Representation of a 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates exactly equal `other`.
    pub fn coincides(&self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}
