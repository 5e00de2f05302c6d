use zone_cad::{
    geometry::{distance, segments_intersect, Point, Point3},
    EditorState, ZoneEditor,
};

fn is_simple(boundary: &[Point3]) -> bool {
    let poly: Vec<Point> = boundary.iter().map(|p| p.xy()).collect();
    let n = poly.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(poly[i], poly[(i + 1) % n], poly[j], poly[(j + 1) % n]) {
                return false;
            }
        }
    }
    true
}

fn on_circle(p: Point3, center: Point, radius: f64) -> bool {
    (distance(p.xy(), center) - radius).abs() < 1e-6
}

#[test]
fn single_area_round_trip() {
    let mut editor = ZoneEditor::new();
    editor.add_area(Point3::new(0.0, 0.0, 5.0), 50.0, false);
    editor.recompute();
    assert_eq!(editor.state(), EditorState::Bounded);
    assert_eq!(editor.boundary().len(), 32);
    assert!(editor.contains(Point3::new(0.0, 0.0, 5.0)));
    assert!(!editor.contains(Point3::new(60.0, 0.0, 5.0)));
    assert!(editor.boundary().iter().all(|p| p.z == 5.0));
    assert!(editor
        .boundary()
        .iter()
        .all(|&p| on_circle(p, Point::new(0.0, 0.0), 50.0)));
}

#[test]
fn disjoint_areas_form_one_boundary() {
    let mut editor = ZoneEditor::new();
    editor.add_area(Point3::new(0.0, 0.0, 0.0), 100.0, true);
    editor.add_area(Point3::new(300.0, 0.0, 0.0), 100.0, false);
    assert_eq!(editor.samples().len(), 64);
    editor.recompute();

    let boundary = editor.boundary();
    // Every sample of both rings ends up on the boundary.
    assert_eq!(boundary.len(), 64);
    assert!(boundary.iter().all(|&p| on_circle(p, Point::new(0.0, 0.0), 100.0)
        || on_circle(p, Point::new(300.0, 0.0), 100.0)));
    assert!(is_simple(boundary));
    assert!(editor.contains(Point3::new(-50.0, 0.0, 0.0)));
    assert!(editor.contains(Point3::new(350.0, 0.0, 0.0)));
    assert!(!editor.contains(Point3::new(150.0, 150.0, 0.0)));
}

#[test]
fn removing_a_covering_range_leaves_stale_boundary() {
    let mut editor = ZoneEditor::new();
    editor.add_area(Point3::new(0.0, 0.0, 0.0), 100.0, true);
    let before = editor.boundary().to_vec();
    assert_eq!(before.len(), 32);

    editor.remove_area(Point3::new(0.0, 0.0, 0.0), 200.0, false);
    // Every sample was within range and no ring point at 200 was inside.
    assert!(editor.samples().len() <= 32);
    assert!(editor
        .samples()
        .iter()
        .all(|&p| on_circle(p, Point::new(0.0, 0.0), 200.0)));
    assert!(editor.samples().is_empty());

    editor.recompute();
    assert_eq!(editor.boundary(), before.as_slice());
    assert_eq!(editor.state(), EditorState::Empty);
    assert_eq!(editor.revision(), 1);
}

#[test]
fn partial_removal_bites_into_zone() {
    let mut editor = ZoneEditor::new();
    editor.add_area(Point3::new(0.0, 0.0, 0.0), 100.0, true);
    assert!(editor.contains(Point3::new(95.0, 0.0, 0.0)));

    editor.remove_area(Point3::new(90.0, 0.0, 0.0), 30.0, false);
    // Three ring samples fall within range; the half of the cut circle that
    // lies inside the old boundary is added back.
    assert_eq!(editor.samples().len(), 29 + 17);

    editor.recompute();
    assert_eq!(editor.revision(), 2);
    assert!(!editor.contains(Point3::new(95.0, 0.0, 0.0)));
    assert!(editor.contains(Point3::new(0.0, 0.0, 0.0)));
    assert!(editor.contains(Point3::new(-50.0, 0.0, 0.0)));
    assert!(is_simple(editor.boundary()));
    assert!(editor.boundary().iter().all(|&p| on_circle(p, Point::new(0.0, 0.0), 100.0)
        || on_circle(p, Point::new(90.0, 0.0), 30.0)));
}

#[test]
fn zero_radius_add_collapses_to_one_location() {
    let mut editor = ZoneEditor::new();
    editor.add_area(Point3::new(4.0, 4.0, 1.0), 0.0, true);
    // 32 coincident samples build a single-vertex hull.
    assert!(editor.boundary().len() < 3);
    assert!(!editor.contains(Point3::new(4.0, 4.0, 1.0)));
}

#[test]
fn elevation_follows_each_area() {
    let mut editor = ZoneEditor::new();
    editor.add_area(Point3::new(0.0, 0.0, 10.0), 50.0, false);
    editor.add_area(Point3::new(200.0, 0.0, 20.0), 50.0, true);
    for p in editor.boundary() {
        if p.x < 100.0 {
            assert_eq!(p.z, 10.0);
        } else {
            assert_eq!(p.z, 20.0);
        }
    }
}
