//! Gift-wrapping (Jarvis march) convex hull.

use crate::geometry::{orientation, Orientation, Planar, Point};

/// Returns the indices of the convex hull of `points`.
///
/// The walk starts at the lowest point (leftmost on ties) and proceeds
/// counter-clockwise. Inputs with fewer than three points are returned as-is.
/// Collinear candidates never replace the current one, and the walk stops if a
/// vertex would repeat, so duplicate and collinear inputs always terminate.
pub fn convex_hull_indices<P: Planar>(points: &[P]) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }
    let pts: Vec<Point> = points.iter().map(Planar::xy).collect();

    let mut start = 0;
    for i in 1..n {
        if pts[i].y < pts[start].y || (pts[i].y == pts[start].y && pts[i].x < pts[start].x) {
            start = i;
        }
    }

    let mut hull = Vec::new();
    let mut visited = vec![false; n];
    let mut p = start;
    loop {
        hull.push(p);
        visited[p] = true;
        let Some(mut q) = (1..n)
            .map(|k| (p + k) % n)
            .find(|&i| !pts[i].coincides(pts[p]))
        else {
            break;
        };
        for i in 0..n {
            if orientation(pts[p], pts[q], pts[i]) == Orientation::Clockwise {
                q = i;
            }
        }
        if q == start || visited[q] {
            break;
        }
        p = q;
    }
    hull
}
