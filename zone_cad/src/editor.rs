//! Incrementally edited zone boundary.
//!
//! [`ZoneEditor`] owns the working sample set and the published boundary.
//! Areas are added and carved out as circles; [`ZoneEditor::recompute`]
//! rebuilds the boundary and then replaces the samples with it, so later
//! edits only see boundary points.
//!
//! The editor is not internally synchronized. Hosts sharing one across
//! threads must hold a single lock for the whole of every call.

use log::{debug, trace};

use crate::config::ZoneConfig;
use crate::elevation::project;
use crate::geometry::{
    circle_fully_inside_polygon_sampled, circle_points, point_in_polygon, polygon_area,
    sq_distance, Point3,
};
use crate::hull::{convex_hull_indices, refine};

/// Minimum samples before a boundary is built.
pub const MIN_HULL_SAMPLES: usize = 4;
/// Minimum samples before a removal is considered.
pub const MIN_REMOVE_SAMPLES: usize = 3;

/// Coarse editor state derived from the sample set and boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Fewer than three samples.
    Empty,
    /// Enough samples to edit, but no boundary built from them yet.
    Unrefined,
    /// At least four samples and a published boundary.
    Bounded,
}

/// What a host needs to draw the current boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderHints<'a> {
    /// Bumped on every recompute that publishes a boundary.
    pub revision: u64,
    /// The last vertex connects back to the first.
    pub closed: bool,
    pub points: &'a [Point3],
}

/// Receives boundary updates, e.g. a curve renderer or a file writer.
pub trait BoundarySink {
    fn boundary_changed(&mut self, hints: &RenderHints<'_>);
}

/// Editable zone boundary over a set of 3D samples.
#[derive(Debug, Clone, Default)]
pub struct ZoneEditor {
    config: ZoneConfig,
    samples: Vec<Point3>,
    boundary: Vec<Point3>,
    revision: u64,
    published: Option<u64>,
}

impl ZoneEditor {
    /// Creates an empty editor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty editor with the given settings.
    pub fn with_config(config: ZoneConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ZoneConfig {
        &self.config
    }

    /// Replaces the settings. Takes effect on the next edit or recompute.
    pub fn set_config(&mut self, config: ZoneConfig) {
        self.config = config;
    }

    /// Working sample set.
    pub fn samples(&self) -> &[Point3] {
        &self.samples
    }

    /// Boundary published by the most recent recompute.
    pub fn boundary(&self) -> &[Point3] {
        &self.boundary
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn state(&self) -> EditorState {
        if self.samples.len() < MIN_REMOVE_SAMPLES {
            EditorState::Empty
        } else if self.samples.len() < MIN_HULL_SAMPLES || self.boundary.is_empty() {
            EditorState::Unrefined
        } else {
            EditorState::Bounded
        }
    }

    /// Footprint area of the boundary.
    pub fn area(&self) -> f64 {
        polygon_area(&self.boundary)
    }

    /// Appends raw samples without any containment filtering.
    pub fn insert_samples<I: IntoIterator<Item = Point3>>(&mut self, samples: I) {
        let before = self.samples.len();
        self.samples.extend(samples);
        trace!("inserted {} raw samples", self.samples.len() - before);
    }

    /// Adds ring samples around `center` that the boundary does not already
    /// cover.
    pub fn add_area(&mut self, center: Point3, radius: f64, auto_recompute: bool) {
        let before = self.samples.len();
        for p in circle_points(center, radius, self.config.circle_samples) {
            if !point_in_polygon(p.xy(), &self.boundary) {
                self.samples.push(p);
            }
        }
        trace!(
            "add_area at ({}, {}) r={}: {} new samples",
            center.x,
            center.y,
            radius,
            self.samples.len() - before
        );
        if auto_recompute {
            self.recompute();
        }
    }

    /// [`ZoneEditor::add_area`] with the configured default radius.
    pub fn add_area_default(&mut self, center: Point3, auto_recompute: bool) {
        self.add_area(center, self.config.default_radius, auto_recompute);
    }

    /// Carves the circle around `center` out of the zone.
    ///
    /// Does nothing with fewer than three samples or when the circle lies
    /// inside the boundary. Otherwise samples within `radius` are dropped and
    /// ring points that were inside the old boundary are added so the new
    /// edge follows the circle.
    pub fn remove_area(&mut self, center: Point3, radius: f64, auto_recompute: bool) {
        if self.samples.len() < MIN_REMOVE_SAMPLES {
            debug!(
                "remove_area ignored: {} samples, need {}",
                self.samples.len(),
                MIN_REMOVE_SAMPLES
            );
            return;
        }
        if circle_fully_inside_polygon_sampled(
            center.xy(),
            radius,
            &self.boundary,
            self.config.perimeter_samples,
        ) {
            debug!("remove_area ignored: circle is interior to the zone");
            return;
        }

        let original_hull = &self.boundary;
        let sq_radius = radius * radius;
        let before = self.samples.len();
        self.samples.retain(|p| sq_distance(p.xy(), center.xy()) > sq_radius);
        let removed = before - self.samples.len();

        let reseed: Vec<Point3> = circle_points(center, radius, self.config.circle_samples)
            .into_iter()
            .filter(|p| point_in_polygon(p.xy(), original_hull))
            .collect();
        trace!(
            "remove_area at ({}, {}) r={}: removed {}, reseeded {}",
            center.x,
            center.y,
            radius,
            removed,
            reseed.len()
        );
        self.samples.extend(reseed);

        if auto_recompute {
            self.recompute();
        }
    }

    /// [`ZoneEditor::remove_area`] with the configured default radius.
    pub fn remove_area_default(&mut self, center: Point3, auto_recompute: bool) {
        self.remove_area(center, self.config.default_radius, auto_recompute);
    }

    /// Rebuilds the boundary from the samples and collapses the samples into
    /// it.
    ///
    /// With fewer than four samples nothing happens and any earlier boundary
    /// stays published.
    pub fn recompute(&mut self) {
        if self.samples.len() < MIN_HULL_SAMPLES {
            debug!(
                "recompute skipped: {} samples, need {}",
                self.samples.len(),
                MIN_HULL_SAMPLES
            );
            return;
        }
        let hull = convex_hull_indices(&self.samples);
        let refined = refine(&self.samples, &hull, self.config.concavity_params());
        let boundary = project(&refined, &self.samples, self.config.elevation_tolerance);
        debug!(
            "recompute: {} samples, convex hull {}, boundary {}",
            self.samples.len(),
            hull.len(),
            boundary.len()
        );
        self.samples = boundary.clone();
        self.boundary = boundary;
        self.revision += 1;
    }

    /// Returns `true` if `point` lies inside the published boundary.
    pub fn contains(&self, point: Point3) -> bool {
        point_in_polygon(point.xy(), &self.boundary)
    }

    pub fn render_hints(&self) -> RenderHints<'_> {
        RenderHints {
            revision: self.revision,
            closed: true,
            points: &self.boundary,
        }
    }

    /// Sends the boundary to `sink` if it changed since the last call.
    /// Returns `true` when the sink was notified.
    pub fn publish_to<S: BoundarySink + ?Sized>(&mut self, sink: &mut S) -> bool {
        if self.published == Some(self.revision) {
            return false;
        }
        sink.boundary_changed(&self.render_hints());
        self.published = Some(self.revision);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(u64, usize)>,
    }

    impl BoundarySink for Recorder {
        fn boundary_changed(&mut self, hints: &RenderHints<'_>) {
            assert!(hints.closed);
            self.calls.push((hints.revision, hints.points.len()));
        }
    }

    fn square_samples() -> Vec<Point3> {
        vec![
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(10.0, 0.0, 2.0),
            Point3::new(10.0, 10.0, 3.0),
            Point3::new(0.0, 10.0, 4.0),
            Point3::new(5.0, 5.0, 5.0),
        ]
    }

    #[test]
    fn new_editor_is_empty() {
        let editor = ZoneEditor::new();
        assert_eq!(editor.state(), EditorState::Empty);
        assert!(editor.boundary().is_empty());
        assert!(!editor.contains(Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(editor.area(), 0.0);
    }

    #[test]
    fn recompute_collapses_samples_into_boundary() {
        let mut editor = ZoneEditor::new();
        editor.insert_samples(square_samples());
        assert_eq!(editor.state(), EditorState::Unrefined);
        editor.recompute();
        assert_eq!(editor.state(), EditorState::Bounded);
        assert_eq!(
            editor.boundary(),
            &[
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(10.0, 0.0, 2.0),
                Point3::new(10.0, 10.0, 3.0),
                Point3::new(0.0, 10.0, 4.0),
            ]
        );
        assert_eq!(editor.samples(), editor.boundary());
        assert!((editor.area() - 100.0).abs() < 1e-9);
        assert_eq!(editor.revision(), 1);
    }

    #[test]
    fn recompute_needs_four_samples() {
        let mut editor = ZoneEditor::new();
        editor.insert_samples(square_samples().into_iter().take(3));
        editor.recompute();
        assert!(editor.boundary().is_empty());
        assert_eq!(editor.revision(), 0);
        assert_eq!(editor.state(), EditorState::Unrefined);
    }

    #[test]
    fn add_area_without_recompute_only_grows_samples() {
        let mut editor = ZoneEditor::new();
        editor.add_area(Point3::new(0.0, 0.0, 0.0), 10.0, false);
        assert_eq!(editor.samples().len(), 32);
        assert!(editor.boundary().is_empty());
        editor.add_area(Point3::new(0.0, 0.0, 0.0), 5.0, false);
        // nothing is inside an empty boundary
        assert_eq!(editor.samples().len(), 64);
    }

    #[test]
    fn add_inside_boundary_adds_nothing() {
        let mut editor = ZoneEditor::new();
        editor.add_area(Point3::new(0.0, 0.0, 0.0), 100.0, true);
        let before = editor.samples().len();
        editor.add_area(Point3::new(10.0, 0.0, 0.0), 20.0, false);
        assert_eq!(editor.samples().len(), before);
    }

    #[test]
    fn remove_with_too_few_samples_is_noop() {
        let mut editor = ZoneEditor::new();
        editor.insert_samples(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]);
        editor.remove_area(Point3::new(0.0, 0.0, 0.0), 100.0, true);
        assert_eq!(editor.samples().len(), 2);
    }

    #[test]
    fn remove_interior_circle_is_noop() {
        let mut editor = ZoneEditor::new();
        editor.add_area(Point3::new(0.0, 0.0, 0.0), 100.0, true);
        let samples = editor.samples().to_vec();
        let boundary = editor.boundary().to_vec();
        editor.remove_area(Point3::new(0.0, 0.0, 0.0), 20.0, true);
        assert_eq!(editor.samples(), samples.as_slice());
        assert_eq!(editor.boundary(), boundary.as_slice());
        assert_eq!(editor.revision(), 1);
    }

    #[test]
    fn remove_ignores_elevation_when_measuring() {
        let mut editor = ZoneEditor::new();
        editor.insert_samples(vec![
            Point3::new(0.0, 0.0, 500.0),
            Point3::new(50.0, 0.0, 0.0),
            Point3::new(50.0, 50.0, 0.0),
            Point3::new(0.0, 50.0, 0.0),
        ]);
        editor.remove_area(Point3::new(0.0, 0.0, 0.0), 5.0, false);
        assert!(editor.samples().iter().all(|p| p.z != 500.0));
    }

    #[test]
    fn default_radius_comes_from_config() {
        let config = ZoneConfig {
            default_radius: 7.0,
            circle_samples: 8,
            ..ZoneConfig::default()
        };
        let mut editor = ZoneEditor::with_config(config);
        editor.add_area_default(Point3::new(1.0, 1.0, 0.0), false);
        assert_eq!(editor.samples().len(), 8);
        assert!((editor.samples()[0].x - 8.0).abs() < 1e-9);
    }

    #[test]
    fn sink_only_sees_new_revisions() {
        let mut editor = ZoneEditor::new();
        let mut sink = Recorder::default();
        editor.add_area(Point3::new(0.0, 0.0, 0.0), 50.0, true);
        assert!(editor.publish_to(&mut sink));
        assert!(!editor.publish_to(&mut sink));
        editor.add_area(Point3::new(80.0, 0.0, 0.0), 50.0, true);
        assert!(editor.publish_to(&mut sink));
        assert_eq!(sink.calls.len(), 2);
        assert_eq!(sink.calls[0], (1, 32));
        assert_eq!(sink.calls[1].0, 2);
    }
}
