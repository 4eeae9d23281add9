// Host-side tests for the closed Bézier path and its hit test.

use blob_core::curve::BlobPath;
use blob_core::shape::ShapeModel;
use glam::Vec2;

fn circle_path(origin: Vec2) -> (ShapeModel, BlobPath) {
    let shape = ShapeModel::new(12, 0.1, 800.0, 600.0);
    let path = BlobPath::build(shape.points(), origin);
    (shape, path)
}

#[test]
fn path_has_one_segment_per_point_and_closes() {
    let origin = Vec2::new(400.0, 300.0);
    let (shape, path) = circle_path(origin);
    assert_eq!(path.segments().len(), shape.points().len());
    let first = shape.points()[0].position + origin;
    assert!((path.start() - first).length() < 1e-4);
    let last = path.segments().last().map(|s| s.end).unwrap();
    assert!((last - first).length() < 1e-4);
}

#[test]
fn control_offsets_follow_neighbour_chords() {
    let origin = Vec2::ZERO;
    let (shape, path) = circle_path(origin);
    let pts = shape.points();
    let n = pts.len();
    let seg = path.segments()[0];
    let expected_c1 = pts[0].position + (pts[1].position - pts[n - 1].position) * 0.2;
    let expected_c2 = pts[1].position - (pts[2].position - pts[0].position) * 0.2;
    assert!((seg.ctrl1 - expected_c1).length() < 1e-4);
    assert!((seg.ctrl2 - expected_c2).length() < 1e-4);
}

#[test]
fn centre_is_inside_and_far_points_are_outside() {
    let origin = Vec2::new(400.0, 300.0);
    let (_, path) = circle_path(origin);
    assert!(path.contains_point(400.0, 300.0));
    assert!(!path.contains_point(1.0e6, 1.0e6));
    assert!(!path.contains_point(-1.0e6, 300.0));
    assert!(!path.contains_point(0.0, 0.0));
}

#[test]
fn hit_test_tracks_boundary_in_canvas_space() {
    // Radius is 60; test just inside and just outside along each axis
    let origin = Vec2::new(400.0, 300.0);
    let (_, path) = circle_path(origin);
    for dir in [Vec2::X, Vec2::Y, -Vec2::X, -Vec2::Y] {
        let inside = origin + dir * 55.0;
        let outside = origin + dir * 65.0;
        assert!(path.contains_point(inside.x, inside.y), "{dir:?} inside");
        assert!(!path.contains_point(outside.x, outside.y), "{dir:?} outside");
    }
}

#[test]
fn path_follows_control_point_changes() {
    let origin = Vec2::new(400.0, 300.0);
    let mut shape = ShapeModel::new(12, 0.1, 800.0, 600.0);
    for p in shape.points_mut() {
        p.target_radius = 150.0;
    }
    shape.step(1.0);
    let path = BlobPath::build(shape.points(), origin);
    assert!(path.contains_point(400.0 + 120.0, 300.0));
    assert!(!path.contains_point(400.0 + 170.0, 300.0));
}

#[test]
fn empty_point_set_contains_nothing() {
    let path = BlobPath::build(&[], Vec2::new(10.0, 10.0));
    assert!(path.segments().is_empty());
    assert!(!path.contains_point(10.0, 10.0));
}
