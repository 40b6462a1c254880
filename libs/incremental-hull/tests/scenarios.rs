//! End-to-end hull construction on small hand-built inputs.

mod common;

use approx::assert_relative_eq;
use common::*;
use incremental_hull::geometry::PointKey;
use incremental_hull::{
    convex_hull, convex_hull_of_mesh, convex_hull_with_config, HullConfig, HullError, Point,
};

fn seeded(seed: u64) -> HullConfig {
    HullConfig::default().with_seed(seed)
}

#[test]
fn tetrahedron_input_is_its_own_hull() {
    let points = [Point::ZERO, Point::X, Point::Y, Point::Z];
    for seed in 0..8 {
        let hull = convex_hull_with_config(&points, &seeded(seed)).unwrap();
        assert_eq!(hull.vertex_count(), 4);
        assert_eq!(hull.face_count(), 4);
        assert_eq!(hull.half_edge_count(), 12);
        assert_eq!(hull.edge_count(), 6);
        assert_closed_manifold(&hull);
        assert_contains_all(&hull, &points);
    }
}

#[test]
fn cube_with_interior_point() {
    let mut points = cube(2.0);
    points.push(Point::splat(1.0));
    for seed in 0..16 {
        let hull = convex_hull_with_config(&points, &seeded(seed)).unwrap();
        assert_eq!(hull.vertex_count(), 8);
        assert_eq!(hull.face_count(), 12);
        assert_closed_manifold(&hull);
        assert_contains_all(&hull, &points);
        assert_eq!(vertex_keys(&hull), point_keys(&cube(2.0)));
    }
}

#[test]
fn duplicate_points_collapse_to_one_vertex() {
    let mut points = cube(1.0);
    points.extend(cube(1.0));
    points.push(Point::X);
    points.push(Point::splat(0.5));
    points.push(Point::splat(0.5));
    for seed in 0..16 {
        let hull = convex_hull_with_config(&points, &seeded(seed)).unwrap();
        assert_eq!(hull.vertex_count(), 8);
        assert_eq!(vertex_keys(&hull).len(), 8);
        assert_closed_manifold(&hull);
    }
}

#[test]
fn coplanar_subset_does_not_block_seeding() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(0.0, 4.0, 0.0),
        Point::new(4.0, 4.0, 0.0),
        Point::new(2.0, 2.0, 0.0),
        Point::new(2.0, 2.0, 3.0),
        Point::new(2.0, 2.0, -3.0),
    ];
    for seed in 0..32 {
        let hull = convex_hull_with_config(&points, &seeded(seed)).unwrap();
        assert_eq!(hull.vertex_count(), 6);
        assert_eq!(hull.face_count(), 8);
        assert_closed_manifold(&hull);
        assert_contains_all(&hull, &points);
        assert!(!vertex_keys(&hull).contains(&PointKey::new(Point::new(2.0, 2.0, 0.0))));
    }
}

#[test]
fn cyclic_polytope_keeps_every_point() {
    let mut points = moment_curve(-5..=5);
    // centroids of a few tetrahedra spanned by hull points are interior
    for window in points.clone().windows(4).step_by(2) {
        points.push(window.iter().sum::<Point>() / 4.0);
    }
    let hull = convex_hull_with_config(&points, &seeded(3)).unwrap();
    assert_eq!(hull.vertex_count(), 11);
    assert_eq!(hull.face_count(), 18);
    assert_closed_manifold(&hull);
    assert_contains_all(&hull, &points);
    assert_vertices_from_input(&hull, &points);
}

#[test]
fn vertex_set_is_independent_of_seed() {
    let mut points = moment_curve(-4..=4);
    let hull_points = points.clone();
    for quad in hull_points.windows(4) {
        points.push(quad.iter().sum::<Point>() / 4.0);
    }
    let expected = point_keys(&hull_points);
    for seed in 0..24 {
        let hull = convex_hull_with_config(&points, &seeded(seed)).unwrap();
        assert_eq!(vertex_keys(&hull), expected, "seed {seed}");
    }
}

#[test]
fn unseeded_run_matches_extreme_points() {
    let mut points = cube(3.0);
    points.push(Point::new(1.0, 2.0, 1.5));
    let hull = convex_hull(&points).unwrap();
    assert_eq!(vertex_keys(&hull), point_keys(&cube(3.0)));
}

#[test]
fn hull_of_existing_mesh() {
    let mut points = cube(2.0);
    points.push(Point::new(-1.0, 1.0, 1.0));
    let first = convex_hull_with_config(&points, &seeded(5)).unwrap();
    assert_eq!(first.vertex_count(), 9);

    let second = convex_hull_of_mesh(&first).unwrap();
    assert_eq!(vertex_keys(&second), vertex_keys(&first));
    assert_eq!(second.face_count(), first.face_count());
    assert_closed_manifold(&second);
}

#[test]
fn normals_and_bounding_box_are_populated() {
    let mut points = cube(2.0);
    points.push(Point::splat(1.0));
    let hull = convex_hull_with_config(&points, &seeded(1)).unwrap();

    let bbox = hull.bounding_box();
    assert_eq!(bbox.min, Point::ZERO);
    assert_eq!(bbox.max, Point::splat(2.0));

    let center = Point::splat(1.0);
    for (id, face) in hull.faces() {
        assert_relative_eq!(face.normal.length(), 1.0, epsilon = 1e-12);
        let [a, _, _] = hull.face_positions(id).unwrap();
        assert!(face.normal.dot(a - center) > 0.0);
    }
    for (_, vertex) in hull.vertices() {
        assert_relative_eq!(vertex.normal.length(), 1.0, epsilon = 1e-12);
        assert!(vertex.normal.dot(vertex.position - center) > 0.0);
    }
}

#[test]
fn output_is_densely_indexed() {
    let points = moment_curve(0..=7);
    let hull = convex_hull_with_config(&points, &seeded(2)).unwrap();
    let ids: Vec<u32> = hull.face_ids().map(|id| id.0).collect();
    assert_eq!(ids, (0..hull.face_count() as u32).collect::<Vec<_>>());

    let (positions, triangles) = hull.to_indexed_triangles().unwrap();
    assert_eq!(positions.len(), 8);
    assert_eq!(triangles.len(), 12);
}

#[test]
fn too_few_points_is_degenerate() {
    let err = convex_hull(&[Point::ZERO, Point::X, Point::Y]).unwrap_err();
    assert!(matches!(err, HullError::DegenerateInput { .. }));
}

#[test]
fn coplanar_input_is_degenerate() {
    let points: Vec<Point> = (0..10)
        .map(|i| Point::new(f64::from(i), f64::from(i * 3 % 7), 0.0))
        .collect();
    let config = HullConfig::new(f64::EPSILON, 64).unwrap().with_seed(0);
    let err = convex_hull_with_config(&points, &config).unwrap_err();
    assert!(matches!(err, HullError::DegenerateInput { .. }));
}

#[test]
fn non_finite_input_is_rejected() {
    let mut points = cube(1.0);
    points[5] = Point::new(f64::INFINITY, 0.0, 0.0);
    assert!(matches!(
        convex_hull(&points),
        Err(HullError::NonFiniteInput { index: 5 })
    ));
}
