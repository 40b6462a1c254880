//! Traversal iterators over the DCEL.
//!
//! Both circulators stop when they return to their starting half-edge, when
//! a link is missing, or after visiting as many half-edges as the mesh has
//! slots (so a corrupted cycle cannot spin forever).

use super::{DcelMesh, FaceId, HalfEdgeId, VertexId};

// =============================================================================
// ITERATORS
// =============================================================================

/// Iterator over half-edges around a face.
pub struct FaceHalfEdges<'a> {
    mesh: &'a DcelMesh,
    start: Option<HalfEdgeId>,
    current: Option<HalfEdgeId>,
    budget: usize,
}

impl<'a> Iterator for FaceHalfEdges<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.budget == 0 {
            return None;
        }
        self.budget -= 1;
        self.current = self
            .mesh
            .next(current)
            .ok()
            .filter(|next| Some(*next) != self.start);
        Some(current)
    }
}

/// Iterator over half-edges leaving a vertex.
///
/// Rotates with `twin -> next`: the twin of an outgoing half-edge ends at the
/// vertex, so its successor starts there.
pub struct VertexHalfEdges<'a> {
    mesh: &'a DcelMesh,
    start: Option<HalfEdgeId>,
    current: Option<HalfEdgeId>,
    budget: usize,
}

impl<'a> Iterator for VertexHalfEdges<'a> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if self.budget == 0 {
            return None;
        }
        self.budget -= 1;
        self.current = self
            .mesh
            .twin(current)
            .and_then(|twin| self.mesh.next(twin))
            .ok()
            .filter(|next| Some(*next) != self.start);
        Some(current)
    }
}

impl DcelMesh {
    /// Iterate over the half-edge cycle of a face, starting at its outer
    /// half-edge. Yields nothing for a stale handle.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use incremental_hull::geometry::Point;
    /// use incremental_hull::mesh::DcelMesh;
    ///
    /// let mut mesh = DcelMesh::new();
    /// let faces = mesh.insert_tet(Point::ZERO, Point::Y, Point::X, Point::Z).unwrap();
    /// assert_eq!(mesh.face_half_edges(faces[0]).count(), 3);
    /// ```
    pub fn face_half_edges(&self, face: FaceId) -> FaceHalfEdges<'_> {
        let start = self.face(face).ok().and_then(|f| f.halfedge);
        FaceHalfEdges {
            mesh: self,
            start,
            current: start,
            budget: self.half_edges.capacity(),
        }
    }

    /// Iterate over the corners of a face in winding order.
    pub fn face_vertices(&self, face: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_half_edges(face)
            .filter_map(move |he| self.half_edge(he).ok().map(|h| h.start_vert))
    }

    /// Iterate over the faces across each edge of `face`.
    pub fn adjacent_faces(&self, face: FaceId) -> impl Iterator<Item = FaceId> + '_ {
        self.face_half_edges(face).filter_map(move |he| {
            self.twin(he)
                .and_then(|twin| self.incident_face(twin))
                .ok()
        })
    }

    /// Iterate over all half-edges leaving a vertex.
    pub fn vertex_half_edges(&self, vertex: VertexId) -> VertexHalfEdges<'_> {
        let start = self.vertex(vertex).ok().and_then(|v| v.halfedge);
        VertexHalfEdges {
            mesh: self,
            start,
            current: start,
            budget: self.half_edges.capacity(),
        }
    }

    /// Iterate over the faces around a vertex.
    pub fn vertex_faces(&self, vertex: VertexId) -> impl Iterator<Item = FaceId> + '_ {
        self.vertex_half_edges(vertex)
            .filter_map(move |he| self.incident_face(he).ok())
    }
}
