//! Tests for the DCEL mesh primitives.

use super::*;
use crate::geometry::orientation;
use approx::assert_relative_eq;

/// Unit corner tetrahedron wound outward.
fn unit_tet() -> (DcelMesh, [FaceId; 4]) {
    let mut mesh = DcelMesh::new();
    let faces = mesh
        .insert_tet(Point::ZERO, Point::Y, Point::X, Point::Z)
        .unwrap();
    (mesh, faces)
}

#[test]
fn test_vertex_creation() {
    let pos = Point::new(1.0, 2.0, 3.0);
    let vertex = Vertex::new(pos);

    assert_eq!(vertex.position, pos);
    assert_eq!(vertex.halfedge, None);
    assert_eq!(vertex.normal, Point::ZERO);
}

#[test]
fn test_half_edge_creation() {
    let he = HalfEdge::new(VertexId(0), VertexId(1));

    assert_eq!(he.start_vert, VertexId(0));
    assert_eq!(he.end_vert, VertexId(1));
    assert_eq!(he.twin, None);
    assert_eq!(he.next, None);
    assert_eq!(he.prev, None);
    assert_eq!(he.face, None);
}

#[test]
fn test_face_creation() {
    let face = Face::new();
    assert_eq!(face.halfedge, None);
    assert_eq!(face.color, DEFAULT_FACE_COLOR);
}

#[test]
fn test_empty_mesh() {
    let mesh = DcelMesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.half_edge_count(), 0);
    assert_eq!(mesh.face_count(), 0);
    assert!(mesh.is_closed());
    assert!(mesh.validate_topology().is_ok());
    assert!(!mesh.bounding_box().is_valid());
}

#[test]
fn test_access_invalid_ids() {
    let mesh = DcelMesh::new();

    assert!(mesh.vertex(VertexId(0)).is_err());
    assert!(mesh.half_edge(HalfEdgeId(0)).is_err());
    assert!(mesh.face(FaceId(0)).is_err());
    assert_eq!(
        mesh.vertex(VertexId(0)).unwrap_err().to_string(),
        "Invalid vertex reference: VertexId(0)"
    );
}

#[test]
fn test_missing_link_reports_name() {
    let mut mesh = DcelMesh::new();
    let a = mesh.add_vertex(Point::ZERO);
    let b = mesh.add_vertex(Point::X);
    let he = mesh.add_half_edge(a, b);

    assert_eq!(
        mesh.twin(he).unwrap_err(),
        TopologyError::MissingLink {
            half_edge: he,
            link: "twin"
        }
    );
    assert!(!mesh.is_closed());
}

#[test]
fn test_deleted_slots_are_reused() {
    let mut mesh = DcelMesh::new();
    let v0 = mesh.add_vertex(Point::ZERO);
    let v1 = mesh.add_vertex(Point::X);
    let v2 = mesh.add_vertex(Point::Y);

    let removed = mesh.delete_vertex(v1).unwrap();
    assert_eq!(removed.position, Point::X);
    assert_eq!(mesh.vertex_count(), 2);
    assert!(mesh.vertex(v1).is_err());
    // other handles stay valid
    assert_eq!(mesh.position(v2).unwrap(), Point::Y);
    assert_eq!(mesh.position(v0).unwrap(), Point::ZERO);

    let v3 = mesh.add_vertex(Point::Z);
    assert_eq!(v3, v1);
    assert_eq!(mesh.position(v3).unwrap(), Point::Z);
}

#[test]
fn test_double_delete_fails() {
    let mut mesh = DcelMesh::new();
    let f = mesh.add_face();
    assert!(mesh.delete_face(f).is_ok());
    assert_eq!(mesh.delete_face(f).unwrap_err(), TopologyError::InvalidFace(f));
}

#[test]
fn test_tetrahedron_counts() {
    let (mesh, _) = unit_tet();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.half_edge_count(), 12);
    assert_eq!(mesh.edge_count(), 6);
    assert_eq!(mesh.face_count(), 4);
    assert_eq!(mesh.euler_characteristic(), 2);
}

#[test]
fn test_tetrahedron_topology_is_valid() {
    let (mesh, _) = unit_tet();
    assert!(mesh.is_closed());
    mesh.validate_topology().unwrap();
}

#[test]
fn test_tetrahedron_faces_point_outward() {
    let (mesh, faces) = unit_tet();
    let centroid = mesh.positions().sum::<Point>() / 4.0;
    for f in faces {
        let [a, b, c] = mesh.face_positions(f).unwrap();
        assert!(orientation(a, b, c, centroid) > 0.0);
        assert!(!mesh.face_sees(f, centroid, f64::EPSILON).unwrap());
        let normal = mesh.face(f).unwrap().normal;
        assert!(normal.dot(a - centroid) > 0.0);
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_vertex_normals_point_away_from_center() {
    let (mesh, _) = unit_tet();
    let centroid = mesh.positions().sum::<Point>() / 4.0;
    for (_, v) in mesh.vertices() {
        assert!(v.normal.dot(v.position - centroid) > 0.0);
        assert_relative_eq!(v.normal.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_face_iterators() {
    let (mesh, faces) = unit_tet();
    for f in faces {
        let hes: Vec<_> = mesh.face_half_edges(f).collect();
        assert_eq!(hes.len(), 3);
        let verts: Vec<_> = mesh.face_vertices(f).collect();
        assert_eq!(verts.to_vec(), mesh.face_triangle(f).unwrap().to_vec());

        let adjacent: Vec<_> = mesh.adjacent_faces(f).collect();
        assert_eq!(adjacent.len(), 3);
        assert!(!adjacent.contains(&f));
    }
}

#[test]
fn test_vertex_fan_has_three_edges() {
    let (mesh, _) = unit_tet();
    for (id, _) in mesh.vertices() {
        let fan: Vec<_> = mesh.vertex_half_edges(id).collect();
        assert_eq!(fan.len(), 3);
        for he in &fan {
            assert_eq!(mesh.half_edge(*he).unwrap().start_vert, id);
        }
        assert_eq!(mesh.vertex_faces(id).count(), 3);
    }
}

#[test]
fn test_iterators_on_stale_handles_are_empty() {
    let (mesh, _) = unit_tet();
    assert_eq!(mesh.face_half_edges(FaceId(99)).count(), 0);
    assert_eq!(mesh.vertex_half_edges(VertexId(99)).count(), 0);
}

#[test]
fn test_validation_detects_broken_twin() {
    let (mut mesh, faces) = unit_tet();
    let he = mesh.outer_half_edge(faces[0]).unwrap();
    mesh.half_edge_mut(he).unwrap().twin = None;
    assert!(!mesh.is_closed());
    assert!(matches!(
        mesh.validate_topology(),
        Err(TopologyError::MissingLink { link: "twin", .. })
    ));
}

#[test]
fn test_validation_detects_asymmetric_twin() {
    let (mut mesh, faces) = unit_tet();
    let a = mesh.outer_half_edge(faces[0]).unwrap();
    let b = mesh.next(a).unwrap();
    mesh.half_edge_mut(a).unwrap().twin = Some(b);
    assert!(matches!(
        mesh.validate_topology(),
        Err(TopologyError::InconsistentTopology(_))
    ));
}

#[test]
fn test_compact_renumbers_densely() {
    let mut mesh = DcelMesh::new();
    let stray = mesh.add_vertex(Point::splat(9.0));
    mesh.insert_tet(Point::ZERO, Point::Y, Point::X, Point::Z)
        .unwrap();
    let stray_face = mesh.add_face();
    mesh.delete_vertex(stray).unwrap();
    mesh.delete_face(stray_face).unwrap();

    mesh.compact().unwrap();
    mesh.validate_topology().unwrap();
    let vertex_ids: Vec<_> = mesh.vertices().map(|(id, _)| id.0).collect();
    let face_ids: Vec<_> = mesh.face_ids().map(|id| id.0).collect();
    assert_eq!(vertex_ids, vec![0, 1, 2, 3]);
    assert_eq!(face_ids, vec![0, 1, 2, 3]);
}

#[test]
fn test_indexed_triangles_export() {
    let (mesh, _) = unit_tet();
    let (positions, triangles) = mesh.to_indexed_triangles().unwrap();
    assert_eq!(positions.len(), 4);
    assert_eq!(triangles.len(), 4);
    assert!(triangles.iter().flatten().all(|&i| (i as usize) < positions.len()));
    // every directed edge appears once, its reverse once
    let mut directed = std::collections::HashSet::new();
    for t in &triangles {
        for k in 0..3 {
            assert!(directed.insert((t[k], t[(k + 1) % 3])));
        }
    }
    for &(a, b) in &directed {
        assert!(directed.contains(&(b, a)));
    }
}

#[test]
fn test_bounding_box_update() {
    let (mut mesh, _) = unit_tet();
    assert!(!mesh.bounding_box().is_valid());
    mesh.update_bounding_box();
    let bbox = mesh.bounding_box();
    assert_eq!(bbox.min, Point::ZERO);
    assert_eq!(bbox.max, Point::ONE);
}
