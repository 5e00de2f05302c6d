//! Convex and concave hull construction over horizontal point clouds.

mod concave;
mod convex;

pub use concave::{refine, refine_indices, REACH_SCALE};
pub use convex::convex_hull_indices;

use crate::config::ConcavityParams;
use crate::geometry::{Planar, Point};

/// Builds the convex hull of `points` and refines it with `params`.
pub fn concave_hull<P: Planar>(points: &[P], params: ConcavityParams) -> Vec<Point> {
    let hull = convex_hull_indices(points);
    refine(points, &hull, params)
}
