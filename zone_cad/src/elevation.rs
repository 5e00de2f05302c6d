//! Recovering elevations for refined 2D boundary points.

use crate::geometry::{sq_distance, Point, Point3};

/// Lifts each 2D point back to 3D using the elevation of a source sample.
///
/// The first source whose `x` and `y` are both within `tolerance` wins. When
/// none matches, the nearest source by horizontal distance is used (first one
/// on ties). With no sources at all, `z` is zero.
pub fn project(points: &[Point], originals: &[Point3], tolerance: f64) -> Vec<Point3> {
    points
        .iter()
        .map(|&p| Point3::from_xy(p, elevation_at(p, originals, tolerance)))
        .collect()
}

fn elevation_at(p: Point, originals: &[Point3], tolerance: f64) -> f64 {
    if let Some(hit) = originals
        .iter()
        .find(|o| (o.x - p.x).abs() < tolerance && (o.y - p.y).abs() < tolerance)
    {
        return hit.z;
    }
    let mut best: Option<(f64, f64)> = None;
    for o in originals {
        let d = sq_distance(o.xy(), p);
        if best.map_or(true, |(min, _)| d < min) {
            best = Some((d, o.z));
        }
    }
    best.map_or(0.0, |(_, z)| z)
}
