//! # Incremental Convex Hull
//!
//! Randomized incremental construction with a conflict graph.
//!
//! ## Algorithm
//!
//! 1. Shuffle the input and sample a non-coplanar seed tetrahedron
//! 2. Record, for every other point, the seed faces it sees
//! 3. For each pending point that still sees something: find the horizon of
//!    its visible region, drop the region, and close the hole with a fan of
//!    triangles to the point
//! 4. Points that see nothing are interior and are discarded
//!
//! New faces are only tested against points that saw one of the two faces
//! along their horizon edge, so every step touches the local neighbourhood
//! only.
//!
//! ## Example
//!
//! ```rust
//! use incremental_hull::{convex_hull, geometry::Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0, 0.0),
//!     Point::new(1.0, 0.0, 0.0),
//!     Point::new(0.0, 1.0, 0.0),
//!     Point::new(0.0, 0.0, 1.0),
//!     Point::new(0.1, 0.1, 0.1),
//! ];
//! let hull = convex_hull(&points).unwrap();
//! assert_eq!(hull.vertex_count(), 4);
//! assert_eq!(hull.face_count(), 4);
//! ```

mod horizon;
mod seed;

use crate::config::HullConfig;
use crate::conflict::BipartiteGraph;
use crate::error::{HullError, HullResult};
use crate::geometry::{sees_points, Point, PointKey};
use crate::mesh::{DcelMesh, FaceId, HalfEdgeId, VertexId};
use horizon::{compute_horizon, Horizon};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Pending points on one side, live hull faces on the other.
pub type ConflictGraph = BipartiteGraph<PointKey, FaceId>;

/// Builds the convex hull of `points` with the default configuration.
///
/// Coincident input points produce a single hull vertex.
///
/// # Errors
///
/// [`HullError::DegenerateInput`] for fewer than four points or an input
/// with no non-coplanar quadruple, [`HullError::NonFiniteInput`] for NaN or
/// infinite coordinates.
pub fn convex_hull(points: &[Point]) -> HullResult<DcelMesh> {
    convex_hull_with_config(points, &HullConfig::default())
}

/// Builds the convex hull of `points` with explicit settings.
pub fn convex_hull_with_config(points: &[Point], config: &HullConfig) -> HullResult<DcelMesh> {
    HullBuilder::new(config.clone())?.build(points)
}

/// Builds the convex hull of the vertex positions of an existing mesh.
pub fn convex_hull_of_mesh(mesh: &DcelMesh) -> HullResult<DcelMesh> {
    convex_hull_of_mesh_with_config(mesh, &HullConfig::default())
}

/// [`convex_hull_of_mesh`] with explicit settings.
pub fn convex_hull_of_mesh_with_config(
    mesh: &DcelMesh,
    config: &HullConfig,
) -> HullResult<DcelMesh> {
    let points: Vec<Point> = mesh.positions().collect();
    convex_hull_with_config(&points, config)
}

/// Single-use hull construction state.
///
/// The mesh and the conflict graph are mutated in lockstep: a face leaves
/// the graph in the same step it leaves the mesh, and a point leaves the
/// graph before any face it saw is deleted.
#[derive(Debug)]
pub struct HullBuilder {
    mesh: DcelMesh,
    graph: ConflictGraph,
    config: HullConfig,
    rng: StdRng,
    queue: Vec<PointKey>,
    discarded: usize,
}

impl HullBuilder {
    /// Creates a builder, validating `config` and seeding the RNG.
    pub fn new(config: HullConfig) -> HullResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            mesh: DcelMesh::new(),
            graph: ConflictGraph::new(),
            config,
            rng,
            queue: Vec::new(),
            discarded: 0,
        })
    }

    /// Runs the construction to completion and returns the hull.
    ///
    /// The returned mesh is compacted, with face normals, vertex normals and
    /// the bounding box up to date.
    pub fn build(mut self, points: &[Point]) -> HullResult<DcelMesh> {
        check_input(points)?;

        let mut working = points.to_vec();
        working.shuffle(&mut self.rng);

        let seed = seed::select_seed(
            &working,
            &mut self.rng,
            self.config.max_seed_attempts,
            self.config.tolerance,
        )?;
        let [a, b, c, d] = seed.oriented_points(&working);
        let faces = self.mesh.insert_tet(a, b, c, d)?;
        debug!(
            attempts = seed.attempts,
            positive = seed.determinant > 0.0,
            "seed tetrahedron inserted"
        );

        self.populate(&working, seed.indices, faces)?;
        self.run()?;
        self.finish()
    }

    /// Registers the seed faces and every remaining distinct point, with an
    /// arc to each seed face the point sees.
    fn populate(&mut self, points: &[Point], seed: [usize; 4], faces: [FaceId; 4]) -> HullResult<()> {
        for face in faces {
            self.graph.add_v_node(face);
        }

        let mut seen: BTreeSet<PointKey> = seed.iter().map(|&i| PointKey::new(points[i])).collect();
        for (index, &point) in points.iter().enumerate() {
            if seed.contains(&index) {
                continue;
            }
            let key = PointKey::new(point);
            if !seen.insert(key) {
                continue;
            }
            self.graph.add_u_node(key);
            self.queue.push(key);
            for face in faces {
                if self.mesh.face_sees(face, point, self.config.tolerance)? {
                    self.graph.add_arc(key, face);
                }
            }
        }

        debug!(
            points = self.graph.u_count(),
            arcs = self.graph.arc_count(),
            duplicates = points.len() - 4 - self.queue.len(),
            "conflict graph populated"
        );
        Ok(())
    }

    /// Processes pending points in shuffled order until none remain.
    fn run(&mut self) -> HullResult<()> {
        while self.graph.u_count() > 0 {
            let pass: Vec<PointKey> = self
                .queue
                .iter()
                .copied()
                .filter(|key| self.graph.contains_u(key))
                .collect();
            if pass.is_empty() {
                return Err(HullError::invariant(
                    "conflict graph holds points that were never queued",
                ));
            }
            for key in pass {
                if !self.graph.contains_u(&key) {
                    continue;
                }
                if self.graph.u_degree(&key) == 0 {
                    self.graph.delete_u_node(&key);
                    self.discarded += 1;
                    continue;
                }
                self.insert_point(key)?;
            }
        }
        Ok(())
    }

    /// Replaces the faces visible from `key` by a fan around it.
    fn insert_point(&mut self, key: PointKey) -> HullResult<()> {
        let visible: BTreeSet<FaceId> = self.graph.adjacent_v_nodes(&key).collect();
        let horizon = compute_horizon(&self.mesh, &visible).inspect_err(|err| {
            warn!(%err, visible = visible.len(), "horizon search failed");
        })?;
        trace!(
            visible = visible.len(),
            horizon = horizon.edges.len(),
            "inserting point"
        );

        let candidates = self.horizon_candidates(&horizon, key)?;

        self.graph.delete_u_node(&key);
        self.remove_visible(&visible, &horizon)?;

        let apex = self.mesh.add_vertex(key.point());
        self.insert_fan(apex, &horizon, &candidates)
    }

    /// Points that see either face along each horizon edge, in horizon
    /// order, without the point being inserted.
    fn horizon_candidates(
        &self,
        horizon: &Horizon,
        key: PointKey,
    ) -> HullResult<Vec<Vec<PointKey>>> {
        horizon
            .edges
            .iter()
            .map(|&he| -> HullResult<Vec<PointKey>> {
                let hidden = self.mesh.incident_face(he)?;
                let replaced = self.mesh.incident_face(self.mesh.twin(he)?)?;
                let set: BTreeSet<PointKey> = self
                    .graph
                    .adjacent_u_nodes(&hidden)
                    .chain(self.graph.adjacent_u_nodes(&replaced))
                    .filter(|&p| p != key)
                    .collect();
                Ok(set.into_iter().collect())
            })
            .collect()
    }

    /// Deletes the visible faces with their half-edges and the vertices
    /// that are not on the horizon.
    fn remove_visible(&mut self, visible: &BTreeSet<FaceId>, horizon: &Horizon) -> HullResult<()> {
        let mut half_edges: Vec<HalfEdgeId> = Vec::with_capacity(visible.len() * 3);
        let mut inner: BTreeSet<VertexId> = BTreeSet::new();
        for &face in visible {
            half_edges.extend(self.mesh.face_half_edges(face));
            inner.extend(
                self.mesh
                    .face_vertices(face)
                    .filter(|v| !horizon.vertices.contains(v)),
            );
        }
        if half_edges.len() != visible.len() * 3 {
            return Err(HullError::invariant("visible face is not a triangle"));
        }

        for he in half_edges {
            self.mesh.delete_half_edge(he)?;
        }
        for &face in visible {
            self.mesh.delete_face(face)?;
            self.graph.delete_v_node(&face);
        }
        for vertex in inner {
            self.mesh.delete_vertex(vertex)?;
        }
        Ok(())
    }

    /// Closes the hole left by the visible region with one triangle per
    /// horizon edge, all meeting at `apex`.
    fn insert_fan(
        &mut self,
        apex: VertexId,
        horizon: &Horizon,
        candidates: &[Vec<PointKey>],
    ) -> HullResult<()> {
        // (apex -> b, a -> apex) of every new face, in horizon order
        let mut spokes: Vec<(HalfEdgeId, HalfEdgeId)> = Vec::with_capacity(horizon.edges.len());

        for (&he, points) in horizon.edges.iter().zip(candidates) {
            let (a, b) = {
                let edge = self.mesh.half_edge(he)?;
                (edge.start_vert, edge.end_vert)
            };
            let base = self.mesh.add_half_edge(b, a);
            let up = self.mesh.add_half_edge(a, apex);
            let down = self.mesh.add_half_edge(apex, b);
            let face = self.mesh.add_face();
            self.mesh.link_triangle(face, [base, up, down])?;
            self.mesh.link_twins(base, he)?;
            self.mesh.set_vertex_half_edge(b, base)?;
            self.mesh.set_vertex_half_edge(a, up)?;

            if let Some(&(_, previous_up)) = spokes.last() {
                self.mesh.link_twins(down, previous_up)?;
            }
            spokes.push((down, up));

            self.graph.add_v_node(face);
            for point in self.visible_from(face, points)? {
                self.graph.add_arc(point, face);
            }
        }

        let (Some(&(first_down, _)), Some(&(_, last_up))) = (spokes.first(), spokes.last()) else {
            return Err(HullError::invariant("empty horizon"));
        };
        self.mesh.link_twins(first_down, last_up)?;
        self.mesh.set_vertex_half_edge(apex, first_down)?;
        Ok(())
    }

    /// Candidates that see `face`, tested in parallel for large sets.
    fn visible_from(&self, face: FaceId, points: &[PointKey]) -> HullResult<Vec<PointKey>> {
        let [a, b, c] = self.mesh.face_positions(face)?;
        let tolerance = self.config.tolerance;
        let sees = |key: &&PointKey| sees_points(a, b, c, key.point(), tolerance);
        Ok(if points.len() >= self.config.parallel_threshold {
            points.par_iter().filter(sees).copied().collect()
        } else {
            points.iter().filter(sees).copied().collect()
        })
    }

    fn finish(mut self) -> HullResult<DcelMesh> {
        self.mesh.compact()?;
        self.mesh.update_face_normals()?;
        self.mesh.update_vertex_normals()?;
        self.mesh.update_bounding_box();
        debug!(
            vertices = self.mesh.vertex_count(),
            faces = self.mesh.face_count(),
            discarded = self.discarded,
            "convex hull complete"
        );
        Ok(self.mesh)
    }
}

fn check_input(points: &[Point]) -> HullResult<()> {
    if points.len() < 4 {
        warn!(points = points.len(), "too few points for a hull");
        return Err(HullError::degenerate(format!(
            "a hull needs at least 4 points, got {}",
            points.len()
        )));
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        warn!(index, "non-finite input point");
        return Err(HullError::NonFiniteInput { index });
    }
    Ok(())
}
