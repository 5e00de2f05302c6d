//! Turn test and containment predicates.
//!
//! Degenerate polygons (fewer than three vertices) never contain anything.
//! A point lying exactly on an edge may report either side.

use super::{Planar, Point};
use crate::config::PERIMETER_SAMPLES;

/// Horizontal-edge cutoff for the crossing test.
const HORIZONTAL_EPSILON: f64 = 1e-6;

/// Direction of the turn `p -> q -> r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Sign of the cross product `(q - p) x (r - q)`. Positive is a left
/// (counter-clockwise) turn with the y axis pointing up.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.x - p.x) * (r.y - q.y) - (q.y - p.y) * (r.x - q.x);
    if val == 0.0 {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Returns `true` if `point` is inside `polygon` using the ray casting
/// algorithm. Edges whose endpoints share the same `y` are skipped.
pub fn point_in_polygon<P: Planar>(point: Point, polygon: &[P]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let n = polygon.len();
    let mut crossings = 0usize;
    for i in 0..n {
        let p1 = polygon[i].xy();
        let p2 = polygon[(i + 1) % n].xy();
        if (p2.y - p1.y).abs() <= HORIZONTAL_EPSILON {
            continue;
        }
        if (p1.y > point.y) != (p2.y > point.y)
            && point.x < (p2.x - p1.x) * (point.y - p1.y) / (p2.y - p1.y) + p1.x
        {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// Approximate test that a horizontal circle lies inside `polygon`.
///
/// The center and [`PERIMETER_SAMPLES`] points on the perimeter must all be
/// inside. Concavities narrower than the sampling can slip through.
pub fn circle_fully_inside_polygon<P: Planar>(center: Point, radius: f64, polygon: &[P]) -> bool {
    circle_fully_inside_polygon_sampled(center, radius, polygon, PERIMETER_SAMPLES)
}

/// Like [`circle_fully_inside_polygon`] with an explicit perimeter sample count.
pub fn circle_fully_inside_polygon_sampled<P: Planar>(
    center: Point,
    radius: f64,
    polygon: &[P],
    samples: usize,
) -> bool {
    if polygon.len() < 3 || !point_in_polygon(center, polygon) {
        return false;
    }
    (0..samples).all(|i| {
        let angle = i as f64 * 2.0 * std::f64::consts::PI / samples as f64;
        let p = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        point_in_polygon(p, polygon)
    })
}
