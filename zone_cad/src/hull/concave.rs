//! Concave refinement of a convex hull by edge relaxation.
//!
//! Each boundary edge looks for the unused point closest to it that is nearer
//! to this edge than to either neighbouring edge and can be spliced in without
//! crossing anything already on the boundary. The point's reach is its
//! distance to the nearer endpoint relative to the edge length.
//!
//! Insertions happen one at a time, always taking the edge whose candidate
//! needs the least reach, and stop once that reach exceeds
//! `concavity / REACH_SCALE`. The sequence does not depend on the concavity,
//! only where it stops, so a larger concavity always extends the boundary a
//! smaller one produces.
//!
//! Convex hull vertices are never removed or reordered.

use crate::config::ConcavityParams;
use crate::geometry::{segments_intersect, sq_distance, sq_segment_distance, Planar, Point};

/// Divides the concavity to get the reach-to-edge-length ratio. The default
/// concavity of 2 allows points within half an edge length of an endpoint.
pub const REACH_SCALE: f64 = 4.0;

#[derive(Debug, Clone, Copy)]
struct Node {
    point: usize,
    prev: usize,
    next: usize,
}

/// Circular doubly linked boundary stored in a flat arena.
struct Boundary {
    nodes: Vec<Node>,
}

impl Boundary {
    fn new(hull: &[usize]) -> Self {
        let n = hull.len();
        let nodes = hull
            .iter()
            .enumerate()
            .map(|(k, &point)| Node {
                point,
                prev: (k + n - 1) % n,
                next: (k + 1) % n,
            })
            .collect();
        Self { nodes }
    }

    fn point(&self, node: usize) -> usize {
        self.nodes[node].point
    }

    fn next(&self, node: usize) -> usize {
        self.nodes[node].next
    }

    fn prev(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    /// Splices `point` in after `node` and returns the new node.
    fn insert_after(&mut self, node: usize, point: usize) -> usize {
        let next = self.nodes[node].next;
        let id = self.nodes.len();
        self.nodes.push(Node {
            point,
            prev: node,
            next,
        });
        self.nodes[node].next = id;
        self.nodes[next].prev = id;
        id
    }

    /// Point indices in boundary order, starting from the first hull vertex.
    fn walk(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut cur = 0;
        loop {
            out.push(self.nodes[cur].point);
            cur = self.nodes[cur].next;
            if cur == 0 {
                break;
            }
        }
        out
    }

    /// Returns `true` if segment `from`-`to` properly crosses no boundary edge
    /// other than those incident to point `from`.
    fn is_clear(&self, pts: &[Point], from: usize, to: Point) -> bool {
        self.nodes.iter().all(|node| {
            let end = self.nodes[node.next].point;
            node.point == from
                || end == from
                || !segments_intersect(pts[node.point], pts[end], pts[from], to)
        })
    }

    /// Returns `true` if `p` can be joined to both ends of the edge leaving
    /// `node` without crossings.
    fn can_splice(&self, pts: &[Point], node: usize, p: Point) -> bool {
        self.is_clear(pts, self.point(node), p)
            && self.is_clear(pts, self.point(self.next(node)), p)
    }
}

/// Best point for one edge and the squared reach it needs.
#[derive(Debug, Clone, Copy)]
struct Insertion {
    point: usize,
    sq_reach: f64,
}

/// Refines `hull` into a tighter boundary over `points`, returning indices.
///
/// With fewer than four points, fewer than three hull vertices, or zero
/// concavity the hull is returned unchanged.
pub fn refine_indices<P: Planar>(
    points: &[P],
    hull: &[usize],
    params: ConcavityParams,
) -> Vec<usize> {
    if points.len() < 4 || hull.len() < 3 || params.concavity <= 0.0 {
        return hull.to_vec();
    }
    let pts: Vec<Point> = points.iter().map(Planar::xy).collect();

    let mut used = vec![false; pts.len()];
    for &i in hull {
        used[i] = true;
    }

    let reach = params.concavity / REACH_SCALE;
    let sq_reach = reach * reach;
    let sq_min_len = params.min_edge_length * params.min_edge_length;

    let mut boundary = Boundary::new(hull);
    let mut best: Vec<Option<Insertion>> = (0..hull.len())
        .map(|node| find_insertion(&pts, &boundary, node, &used, sq_min_len))
        .collect();

    loop {
        // First minimum wins, so ties go to the oldest edge.
        let Some((node, insertion)) = best
            .iter()
            .enumerate()
            .filter_map(|(node, b)| b.map(|ins| (node, ins)))
            .min_by(|x, y| x.1.sq_reach.total_cmp(&y.1.sq_reach))
        else {
            break;
        };
        if insertion.sq_reach > sq_reach {
            break;
        }

        used[insertion.point] = true;
        let inserted = boundary.insert_after(node, insertion.point);
        best.push(None);

        let touched = [node, inserted, boundary.prev(node), boundary.next(inserted)];
        for other in 0..best.len() {
            let stale = touched.contains(&other)
                || best[other].is_some_and(|ins| {
                    ins.point == insertion.point
                        || !boundary.can_splice(&pts, other, pts[ins.point])
                });
            if stale {
                best[other] = find_insertion(&pts, &boundary, other, &used, sq_min_len);
            }
        }
    }
    boundary.walk()
}

/// Refines `hull` and returns the boundary as horizontal points.
pub fn refine<P: Planar>(points: &[P], hull: &[usize], params: ConcavityParams) -> Vec<Point> {
    refine_indices(points, hull, params)
        .into_iter()
        .map(|i| points[i].xy())
        .collect()
}

/// Finds the unused point closest to the edge leaving `node` that is nearer
/// to it than to the neighbouring edges and can be spliced in without
/// crossings.
fn find_insertion(
    pts: &[Point],
    boundary: &Boundary,
    node: usize,
    used: &[bool],
    sq_min_len: f64,
) -> Option<Insertion> {
    let next = boundary.next(node);
    let (b, c) = (pts[boundary.point(node)], pts[boundary.point(next)]);
    let sq_len = sq_distance(b, c);
    if sq_len == 0.0 || sq_len < sq_min_len {
        return None;
    }
    let before = pts[boundary.point(boundary.prev(node))];
    let after = pts[boundary.point(boundary.next(next))];

    let mut ranked: Vec<(f64, usize)> = (0..pts.len())
        .filter(|&i| !used[i])
        .map(|i| (sq_segment_distance(pts[i], b, c), i))
        .collect();
    ranked.sort_by(|x, y| x.0.total_cmp(&y.0));

    ranked
        .into_iter()
        .find(|&(d, i)| {
            let p = pts[i];
            d < sq_segment_distance(p, before, b)
                && d < sq_segment_distance(p, c, after)
                && boundary.can_splice(pts, node, p)
        })
        .map(|(_, i)| {
            let p = pts[i];
            Insertion {
                point: i,
                sq_reach: sq_distance(p, b).min(sq_distance(p, c)) / sq_len,
            }
        })
}
