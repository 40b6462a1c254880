//! # DCEL Mesh
//!
//! Index-based doubly-connected edge list used as the hull's working and
//! output representation.
//!
//! ## Overview
//!
//! - Each undirected edge is split into two half-edges with opposite directions
//! - Each half-edge stores: start/end vertex, twin, next, prev, face
//! - Every face is a triangle reachable from one outer half-edge via `next`
//!
//! ## Storage
//!
//! Vertices, half-edges and faces live in slot vectors. Deleting an entity
//! empties its slot and records the index on a free list; the next insertion
//! of the same kind reuses it. Handles held elsewhere therefore stay valid
//! across unrelated deletions. [`DcelMesh::compact`] renumbers everything
//! densely once mutation is over.

mod iter;
mod tetrahedron;
mod validate;

pub use iter::{FaceHalfEdges, VertexHalfEdges};

use crate::geometry::{sees_points, BoundingBox, Point};
use config::constants::DEFAULT_FACE_COLOR;
use thiserror::Error;

// =============================================================================
// HANDLES
// =============================================================================

/// Unique identifier for vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u32);

/// Unique identifier for half-edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub u32);

/// Unique identifier for faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

macro_rules! impl_index {
    ($($id:ident),*) => {$(
        impl $id {
            /// Slot index of this handle.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    )*};
}

impl_index!(VertexId, HalfEdgeId, FaceId);

// =============================================================================
// ENTITIES
// =============================================================================

/// Vertex data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in 3D space
    pub position: Point,
    /// Outgoing half-edge (arbitrary if multiple)
    pub halfedge: Option<HalfEdgeId>,
    /// Vertex normal, refreshed by [`DcelMesh::update_vertex_normals`]
    pub normal: Point,
}

impl Vertex {
    /// Creates a new vertex at the given position
    pub fn new(position: Point) -> Self {
        Self {
            position,
            halfedge: None,
            normal: Point::ZERO,
        }
    }
}

/// Half-edge data structure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfEdge {
    /// Origin vertex
    pub start_vert: VertexId,
    /// Destination vertex
    pub end_vert: VertexId,
    /// Opposite half-edge
    pub twin: Option<HalfEdgeId>,
    /// Next half-edge around the face (counter-clockwise)
    pub next: Option<HalfEdgeId>,
    /// Previous half-edge around the face
    pub prev: Option<HalfEdgeId>,
    /// Face this half-edge belongs to
    pub face: Option<FaceId>,
}

impl HalfEdge {
    /// Creates an unlinked half-edge from `start_vert` to `end_vert`
    pub fn new(start_vert: VertexId, end_vert: VertexId) -> Self {
        Self {
            start_vert,
            end_vert,
            twin: None,
            next: None,
            prev: None,
            face: None,
        }
    }
}

/// Face data structure
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Outer half-edge bordering this face
    pub halfedge: Option<HalfEdgeId>,
    /// Unit normal, refreshed by [`DcelMesh::update_face_normals`]
    pub normal: Point,
    /// Display color (RGBA)
    pub color: [f32; 4],
}

impl Face {
    /// Creates a new face with the default color
    pub fn new() -> Self {
        Self {
            halfedge: None,
            normal: Point::ZERO,
            color: DEFAULT_FACE_COLOR,
        }
    }
}

impl Default for Face {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Topology errors that can occur in half-edge meshes
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    #[error("Invalid vertex reference: {0:?}")]
    InvalidVertex(VertexId),

    #[error("Invalid half-edge reference: {0:?}")]
    InvalidHalfEdge(HalfEdgeId),

    #[error("Invalid face reference: {0:?}")]
    InvalidFace(FaceId),

    #[error("Half-edge {half_edge:?} has no {link} link")]
    MissingLink {
        /// Half-edge with the unset link
        half_edge: HalfEdgeId,
        /// Name of the missing link
        link: &'static str,
    },

    #[error("Face {0:?} has no outer half-edge")]
    EmptyFace(FaceId),

    #[error("Face {0:?} is not a triangle")]
    NotTriangle(FaceId),

    #[error("Non-manifold vertex detected at {0:?}")]
    NonManifoldVertex(VertexId),

    #[error("Inconsistent half-edge topology: {0}")]
    InconsistentTopology(String),

    #[error("Mesh is not closed (has boundary edges)")]
    OpenMesh,
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;

// =============================================================================
// MESH
// =============================================================================

/// Slot storage with a free list.
#[derive(Debug, Clone)]
struct Slots<T> {
    items: Vec<Option<T>>,
    free: Vec<u32>,
}

impl<T> Slots<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            free: Vec::new(),
        }
    }

    fn insert(&mut self, item: T) -> u32 {
        match self.free.pop() {
            Some(index) => {
                self.items[index as usize] = Some(item);
                index
            }
            None => {
                self.items.push(Some(item));
                (self.items.len() - 1) as u32
            }
        }
    }

    fn remove(&mut self, index: u32) -> Option<T> {
        let item = self.items.get_mut(index as usize)?.take()?;
        self.free.push(index);
        Some(item)
    }

    fn get(&self, index: u32) -> Option<&T> {
        self.items.get(index as usize)?.as_ref()
    }

    fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.items.get_mut(index as usize)?.as_mut()
    }

    fn len(&self) -> usize {
        self.items.len() - self.free.len()
    }

    fn capacity(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> impl Iterator<Item = (u32, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|item| (i as u32, item)))
    }

    /// Drops empty slots; returns the old-to-new index table.
    fn compact(&mut self) -> Vec<Option<u32>> {
        let mut remap = vec![None; self.items.len()];
        let mut items = Vec::with_capacity(self.len());
        for (old, slot) in self.items.drain(..).enumerate() {
            if let Some(item) = slot {
                remap[old] = Some(items.len() as u32);
                items.push(Some(item));
            }
        }
        self.items = items;
        self.free.clear();
        remap
    }
}

/// Half-edge mesh made of triangular faces.
///
/// ## Example
///
/// ```rust
/// use incremental_hull::geometry::Point;
/// use incremental_hull::mesh::DcelMesh;
///
/// let mut mesh = DcelMesh::new();
/// mesh.insert_tet(Point::ZERO, Point::Y, Point::X, Point::Z).unwrap();
/// assert_eq!(mesh.face_count(), 4);
/// assert!(mesh.validate_topology().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DcelMesh {
    vertices: Slots<Vertex>,
    half_edges: Slots<HalfEdge>,
    faces: Slots<Face>,
    bounding_box: BoundingBox,
}

impl DcelMesh {
    /// Creates a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Slots::new(),
            half_edges: Slots::new(),
            faces: Slots::new(),
            bounding_box: BoundingBox::empty(),
        }
    }

    // -------------------------------------------------------------------------
    // insertion / deletion
    // -------------------------------------------------------------------------

    /// Adds an isolated vertex.
    pub fn add_vertex(&mut self, position: Point) -> VertexId {
        VertexId(self.vertices.insert(Vertex::new(position)))
    }

    /// Adds an unlinked half-edge; twin/next/prev/face are wired afterwards.
    pub fn add_half_edge(&mut self, start: VertexId, end: VertexId) -> HalfEdgeId {
        HalfEdgeId(self.half_edges.insert(HalfEdge::new(start, end)))
    }

    /// Adds a face with no outer half-edge yet.
    pub fn add_face(&mut self) -> FaceId {
        FaceId(self.faces.insert(Face::new()))
    }

    /// Removes a vertex. Half-edges still pointing at it become dangling.
    pub fn delete_vertex(&mut self, id: VertexId) -> TopologyResult<Vertex> {
        self.vertices
            .remove(id.0)
            .ok_or(TopologyError::InvalidVertex(id))
    }

    /// Removes a half-edge. Its twin keeps a dangling `twin` link until rewired.
    pub fn delete_half_edge(&mut self, id: HalfEdgeId) -> TopologyResult<HalfEdge> {
        self.half_edges
            .remove(id.0)
            .ok_or(TopologyError::InvalidHalfEdge(id))
    }

    /// Removes a face without touching its half-edges.
    pub fn delete_face(&mut self, id: FaceId) -> TopologyResult<Face> {
        self.faces.remove(id.0).ok_or(TopologyError::InvalidFace(id))
    }

    // -------------------------------------------------------------------------
    // wiring helpers
    // -------------------------------------------------------------------------

    /// Makes `a` and `b` twins of each other.
    pub fn link_twins(&mut self, a: HalfEdgeId, b: HalfEdgeId) -> TopologyResult<()> {
        self.half_edge_mut(a)?.twin = Some(b);
        self.half_edge_mut(b)?.twin = Some(a);
        Ok(())
    }

    /// Closes `edges` into a next/prev cycle bounding `face`, with `edges[0]`
    /// as the face's outer half-edge.
    pub fn link_triangle(&mut self, face: FaceId, edges: [HalfEdgeId; 3]) -> TopologyResult<()> {
        for i in 0..3 {
            let he = self.half_edge_mut(edges[i])?;
            he.next = Some(edges[(i + 1) % 3]);
            he.prev = Some(edges[(i + 2) % 3]);
            he.face = Some(face);
        }
        self.face_mut(face)?.halfedge = Some(edges[0]);
        Ok(())
    }

    /// Sets the outgoing half-edge recorded on a vertex.
    pub fn set_vertex_half_edge(&mut self, vertex: VertexId, he: HalfEdgeId) -> TopologyResult<()> {
        self.vertex_mut(vertex)?.halfedge = Some(he);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // access
    // -------------------------------------------------------------------------

    /// Gets a vertex by ID
    pub fn vertex(&self, id: VertexId) -> TopologyResult<&Vertex> {
        self.vertices.get(id.0).ok_or(TopologyError::InvalidVertex(id))
    }

    /// Gets a mutable vertex by ID
    pub fn vertex_mut(&mut self, id: VertexId) -> TopologyResult<&mut Vertex> {
        self.vertices
            .get_mut(id.0)
            .ok_or(TopologyError::InvalidVertex(id))
    }

    /// Gets a half-edge by ID
    pub fn half_edge(&self, id: HalfEdgeId) -> TopologyResult<&HalfEdge> {
        self.half_edges
            .get(id.0)
            .ok_or(TopologyError::InvalidHalfEdge(id))
    }

    /// Gets a mutable half-edge by ID
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> TopologyResult<&mut HalfEdge> {
        self.half_edges
            .get_mut(id.0)
            .ok_or(TopologyError::InvalidHalfEdge(id))
    }

    /// Gets a face by ID
    pub fn face(&self, id: FaceId) -> TopologyResult<&Face> {
        self.faces.get(id.0).ok_or(TopologyError::InvalidFace(id))
    }

    /// Gets a mutable face by ID
    pub fn face_mut(&mut self, id: FaceId) -> TopologyResult<&mut Face> {
        self.faces.get_mut(id.0).ok_or(TopologyError::InvalidFace(id))
    }

    /// Position of a vertex.
    pub fn position(&self, id: VertexId) -> TopologyResult<Point> {
        Ok(self.vertex(id)?.position)
    }

    /// Twin of a half-edge.
    pub fn twin(&self, id: HalfEdgeId) -> TopologyResult<HalfEdgeId> {
        self.half_edge(id)?.twin.ok_or(TopologyError::MissingLink {
            half_edge: id,
            link: "twin",
        })
    }

    /// Successor of a half-edge around its face.
    pub fn next(&self, id: HalfEdgeId) -> TopologyResult<HalfEdgeId> {
        self.half_edge(id)?.next.ok_or(TopologyError::MissingLink {
            half_edge: id,
            link: "next",
        })
    }

    /// Predecessor of a half-edge around its face.
    pub fn prev(&self, id: HalfEdgeId) -> TopologyResult<HalfEdgeId> {
        self.half_edge(id)?.prev.ok_or(TopologyError::MissingLink {
            half_edge: id,
            link: "prev",
        })
    }

    /// Face a half-edge belongs to.
    pub fn incident_face(&self, id: HalfEdgeId) -> TopologyResult<FaceId> {
        self.half_edge(id)?.face.ok_or(TopologyError::MissingLink {
            half_edge: id,
            link: "face",
        })
    }

    /// Outer half-edge of a face.
    pub fn outer_half_edge(&self, id: FaceId) -> TopologyResult<HalfEdgeId> {
        self.face(id)?.halfedge.ok_or(TopologyError::EmptyFace(id))
    }

    /// The three corners of a triangular face in winding order.
    pub fn face_triangle(&self, id: FaceId) -> TopologyResult<[VertexId; 3]> {
        let e0 = self.outer_half_edge(id)?;
        let e1 = self.next(e0)?;
        let e2 = self.next(e1)?;
        if self.next(e2)? != e0 {
            return Err(TopologyError::NotTriangle(id));
        }
        Ok([
            self.half_edge(e0)?.start_vert,
            self.half_edge(e1)?.start_vert,
            self.half_edge(e2)?.start_vert,
        ])
    }

    /// Corner positions of a triangular face in winding order.
    pub fn face_positions(&self, id: FaceId) -> TopologyResult<[Point; 3]> {
        let [a, b, c] = self.face_triangle(id)?;
        Ok([self.position(a)?, self.position(b)?, self.position(c)?])
    }

    /// Inclusive visibility of `point` from the outside of face `id`.
    ///
    /// Evaluates the orientation determinant of the face's corners (in stored
    /// order) and the point; anything not strictly above `tolerance` sees it.
    pub fn face_sees(&self, id: FaceId, point: Point, tolerance: f64) -> TopologyResult<bool> {
        let [a, b, c] = self.face_positions(id)?;
        Ok(sees_points(a, b, c, point, tolerance))
    }

    /// Returns the number of live vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of live half-edges
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Returns the number of live faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of undirected edges (half-edge pairs)
    pub fn edge_count(&self) -> usize {
        self.half_edges.len() / 2
    }

    /// True when the mesh has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }

    /// Live vertices in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices.iter().map(|(i, v)| (VertexId(i), v))
    }

    /// Live half-edges in slot order.
    pub fn half_edges(&self) -> impl Iterator<Item = (HalfEdgeId, &HalfEdge)> + '_ {
        self.half_edges.iter().map(|(i, he)| (HalfEdgeId(i), he))
    }

    /// Live faces in slot order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
        self.faces.iter().map(|(i, f)| (FaceId(i), f))
    }

    /// Face ids in slot order.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces().map(|(id, _)| id)
    }

    /// Live vertex positions in slot order.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices().map(|(_, v)| v.position)
    }

    // -------------------------------------------------------------------------
    // derived attributes
    // -------------------------------------------------------------------------

    /// Bounding box as of the last [`update_bounding_box`](Self::update_bounding_box).
    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Recomputes the bounding box over all live vertices.
    pub fn update_bounding_box(&mut self) {
        self.bounding_box = BoundingBox::from_points(self.positions());
    }

    /// Recomputes every face normal as the unit normal of its triangle.
    pub fn update_face_normals(&mut self) -> TopologyResult<()> {
        let ids: Vec<FaceId> = self.face_ids().collect();
        for id in ids {
            let [a, b, c] = self.face_positions(id)?;
            self.face_mut(id)?.normal = (b - a).cross(c - a).normalize_or_zero();
        }
        Ok(())
    }

    /// Recomputes every vertex normal as the normalized sum of the normals of
    /// its incident faces. Face normals must be current.
    pub fn update_vertex_normals(&mut self) -> TopologyResult<()> {
        let mut sums = vec![Point::ZERO; self.vertices.capacity()];
        for (id, face) in self.faces() {
            for v in self.face_triangle(id)? {
                sums[v.index()] += face.normal;
            }
        }
        let ids: Vec<VertexId> = self.vertices().map(|(id, _)| id).collect();
        for id in ids {
            self.vertex_mut(id)?.normal = sums[id.index()].normalize_or_zero();
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // compaction / export
    // -------------------------------------------------------------------------

    /// Renumbers live entities densely, dropping every empty slot.
    ///
    /// All previously issued handles are invalidated.
    pub fn compact(&mut self) -> TopologyResult<()> {
        let vmap = self.vertices.compact();
        let hmap = self.half_edges.compact();
        let fmap = self.faces.compact();

        let map_v = |id: VertexId| {
            vmap.get(id.index())
                .copied()
                .flatten()
                .map(VertexId)
                .ok_or(TopologyError::InvalidVertex(id))
        };
        let map_h = |id: HalfEdgeId| {
            hmap.get(id.index())
                .copied()
                .flatten()
                .map(HalfEdgeId)
                .ok_or(TopologyError::InvalidHalfEdge(id))
        };
        let map_f = |id: FaceId| {
            fmap.get(id.index())
                .copied()
                .flatten()
                .map(FaceId)
                .ok_or(TopologyError::InvalidFace(id))
        };

        for vertex in self.vertices.items.iter_mut().flatten() {
            vertex.halfedge = vertex.halfedge.map(map_h).transpose()?;
        }
        for he in self.half_edges.items.iter_mut().flatten() {
            he.start_vert = map_v(he.start_vert)?;
            he.end_vert = map_v(he.end_vert)?;
            he.twin = he.twin.map(map_h).transpose()?;
            he.next = he.next.map(map_h).transpose()?;
            he.prev = he.prev.map(map_h).transpose()?;
            he.face = he.face.map(map_f).transpose()?;
        }
        for face in self.faces.items.iter_mut().flatten() {
            face.halfedge = face.halfedge.map(map_h).transpose()?;
        }
        Ok(())
    }

    /// Flattens the mesh into vertex positions plus triangle index triples.
    ///
    /// Vertex indices are dense and follow slot order.
    pub fn to_indexed_triangles(&self) -> TopologyResult<(Vec<Point>, Vec<[u32; 3]>)> {
        let mut dense = vec![u32::MAX; self.vertices.capacity()];
        let mut positions = Vec::with_capacity(self.vertex_count());
        for (id, vertex) in self.vertices() {
            dense[id.index()] = positions.len() as u32;
            positions.push(vertex.position);
        }
        let mut triangles = Vec::with_capacity(self.face_count());
        for id in self.face_ids() {
            let [a, b, c] = self.face_triangle(id)?;
            triangles.push([dense[a.index()], dense[b.index()], dense[c.index()]]);
        }
        Ok((positions, triangles))
    }
}

impl Default for DcelMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
