//! 3D sample point. Only `x` and `y` take part in geometry; `z` is carried along.

use super::Point;

/// Representation of a 3D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Horizontal projection of this point.
    pub fn xy(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Lifts a 2D point to 3D at elevation `z`.
    pub fn from_xy(p: Point, z: f64) -> Self {
        Self::new(p.x, p.y, z)
    }
}
