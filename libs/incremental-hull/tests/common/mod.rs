//! Shared fixtures and hull checks for the integration tests.

#![allow(dead_code)]

use incremental_hull::geometry::{orientation, PointKey};
use incremental_hull::{DcelMesh, Point};
use std::collections::BTreeSet;

/// Corners of the axis-aligned cube `[0, size]^3`.
pub fn cube(size: f64) -> Vec<Point> {
    let mut points = Vec::with_capacity(8);
    for x in [0.0, size] {
        for y in [0.0, size] {
            for z in [0.0, size] {
                points.push(Point::new(x, y, z));
            }
        }
    }
    points
}

/// Points `(t, t^2, t^3)`; no four of them are coplanar and all are extreme.
pub fn moment_curve(range: std::ops::RangeInclusive<i32>) -> Vec<Point> {
    range
        .map(|t| {
            let t = f64::from(t);
            Point::new(t, t * t, t * t * t)
        })
        .collect()
}

/// Distinct vertex coordinates of a mesh.
pub fn vertex_keys(mesh: &DcelMesh) -> BTreeSet<PointKey> {
    mesh.positions().map(PointKey::new).collect()
}

/// Distinct coordinates of an input set.
pub fn point_keys(points: &[Point]) -> BTreeSet<PointKey> {
    points.iter().copied().map(PointKey::new).collect()
}

/// Closed, valid, genus-0 triangle mesh.
pub fn assert_closed_manifold(mesh: &DcelMesh) {
    mesh.validate_topology().unwrap();
    assert!(mesh.is_closed());
    assert_eq!(mesh.euler_characteristic(), 2);
    assert_eq!(mesh.half_edge_count(), 3 * mesh.face_count());
    assert_eq!(mesh.face_count(), 2 * mesh.vertex_count() - 4);
}

/// No input point lies strictly outside any face.
pub fn assert_contains_all(mesh: &DcelMesh, points: &[Point]) {
    for id in mesh.face_ids() {
        let [a, b, c] = mesh.face_positions(id).unwrap();
        for &p in points {
            assert!(
                orientation(a, b, c, p) >= 0.0,
                "{p:?} lies outside face {id:?}"
            );
        }
    }
}

/// Every hull vertex is an input coordinate.
pub fn assert_vertices_from_input(mesh: &DcelMesh, points: &[Point]) {
    assert!(vertex_keys(mesh).is_subset(&point_keys(points)));
}
