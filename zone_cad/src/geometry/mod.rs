//! Basic geometry primitives for zone boundaries.
//!
//! All containment and hull logic works on the horizontal projection. The
//! third coordinate of [`Point3`] is never read here.

mod point;
mod point3;
mod predicates;

pub use point::Point;
pub use point3::Point3;
pub use predicates::{
    circle_fully_inside_polygon, circle_fully_inside_polygon_sampled, orientation,
    point_in_polygon, Orientation,
};

/// Anything that can be projected onto the horizontal plane.
pub trait Planar {
    fn xy(&self) -> Point;
}

impl Planar for Point {
    fn xy(&self) -> Point {
        *self
    }
}

impl Planar for Point3 {
    fn xy(&self) -> Point {
        Point3::xy(self)
    }
}

/// Calculates the Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    sq_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
pub fn sq_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Squared distance from `p` to the closed segment `a`-`b`.
pub fn sq_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let mut x = a.x;
    let mut y = a.y;
    let dx = b.x - x;
    let dy = b.y - y;
    if dx != 0.0 || dy != 0.0 {
        let t = ((p.x - x) * dx + (p.y - y) * dy) / (dx * dx + dy * dy);
        if t > 1.0 {
            x = b.x;
            y = b.y;
        } else if t > 0.0 {
            x += dx * t;
            y += dy * t;
        }
    }
    sq_distance(p, Point::new(x, y))
}

/// Returns `true` if segment `p1`-`q1` properly crosses segment `p2`-`q2`.
///
/// Callers are expected to skip segment pairs that share an endpoint.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let cw = |a, b, c| orientation(a, b, c) == Orientation::Clockwise;
    cw(p1, q1, p2) != cw(p1, q1, q2) && cw(p2, q2, p1) != cw(p2, q2, q1)
}

/// Calculates the area of a simple polygon using the shoelace formula.
pub fn polygon_area<P: Planar>(vertices: &[P]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i].xy();
        let b = vertices[(i + 1) % vertices.len()].xy();
        sum += a.x * b.y - b.x * a.y;
    }
    sum.abs() * 0.5
}

/// Generates `count` points evenly spaced on a horizontal circle around
/// `center`, starting at angle zero. Every point keeps the center's `z`.
pub fn circle_points(center: Point3, radius: f64, count: usize) -> Vec<Point3> {
    (0..count)
        .map(|i| {
            let angle = i as f64 * 2.0 * std::f64::consts::PI / count as f64;
            Point3::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
                center.z,
            )
        })
        .collect()
}
