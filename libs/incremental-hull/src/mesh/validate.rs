//! Topology validation for closed triangle meshes.

use super::{DcelMesh, TopologyError, TopologyResult};

impl DcelMesh {
    /// Checks that the mesh is a closed, combinatorially valid triangulated
    /// 2-manifold.
    ///
    /// Verified per half-edge: endpoints exist, `twin.twin == he`,
    /// `twin.start == end`, `next.prev == he`, `next.start == end`, and the
    /// incident face exists. Per face: a 3-cycle whose half-edges all point
    /// back at the face. Per vertex: its recorded half-edge leaves it, and the
    /// `twin -> next` fan visits every outgoing half-edge exactly once.
    pub fn validate_topology(&self) -> TopologyResult<()> {
        let mut outgoing = vec![0usize; self.vertices.capacity()];

        for (id, he) in self.half_edges() {
            self.vertex(he.start_vert)?;
            self.vertex(he.end_vert)?;
            if he.start_vert == he.end_vert {
                return Err(TopologyError::InconsistentTopology(format!(
                    "{id:?} starts and ends at {:?}",
                    he.start_vert
                )));
            }
            outgoing[he.start_vert.index()] += 1;

            let twin = self.twin(id)?;
            let twin_he = self.half_edge(twin)?;
            if twin_he.twin != Some(id) {
                return Err(TopologyError::InconsistentTopology(format!(
                    "twin of {twin:?} is not {id:?}"
                )));
            }
            if twin_he.start_vert != he.end_vert || twin_he.end_vert != he.start_vert {
                return Err(TopologyError::InconsistentTopology(format!(
                    "{id:?} and its twin {twin:?} do not share endpoints"
                )));
            }

            let next = self.next(id)?;
            let next_he = self.half_edge(next)?;
            if next_he.prev != Some(id) {
                return Err(TopologyError::InconsistentTopology(format!(
                    "prev of {next:?} is not {id:?}"
                )));
            }
            if next_he.start_vert != he.end_vert {
                return Err(TopologyError::InconsistentTopology(format!(
                    "{next:?} does not continue where {id:?} ends"
                )));
            }
            self.prev(id)?;
            self.face(self.incident_face(id)?)?;
        }

        for (id, _) in self.faces() {
            let cycle: Vec<_> = self.face_half_edges(id).collect();
            if cycle.len() != 3 || self.next(cycle[2])? != cycle[0] {
                return Err(TopologyError::NotTriangle(id));
            }
            for he in cycle {
                if self.incident_face(he)? != id {
                    return Err(TopologyError::InconsistentTopology(format!(
                        "{he:?} on the cycle of {id:?} belongs to another face"
                    )));
                }
            }
        }

        for (id, vertex) in self.vertices() {
            let start = vertex
                .halfedge
                .ok_or(TopologyError::NonManifoldVertex(id))?;
            if self.half_edge(start)?.start_vert != id {
                return Err(TopologyError::InconsistentTopology(format!(
                    "recorded half-edge {start:?} does not leave {id:?}"
                )));
            }
            if self.vertex_half_edges(id).count() != outgoing[id.index()] {
                return Err(TopologyError::NonManifoldVertex(id));
            }
        }

        Ok(())
    }

    /// Checks if the mesh is closed (every half-edge has a live twin)
    pub fn is_closed(&self) -> bool {
        self.half_edges()
            .all(|(_, he)| he.twin.is_some_and(|twin| self.half_edge(twin).is_ok()))
    }

    /// `V - E + F`; 2 for a closed genus-0 surface such as a convex hull.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }
}
