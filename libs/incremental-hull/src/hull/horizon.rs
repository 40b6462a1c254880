//! Horizon discovery around a set of visible faces.

use crate::error::{HullError, HullResult};
use crate::mesh::{DcelMesh, FaceId, HalfEdgeId, VertexId};
use std::collections::BTreeSet;

/// Boundary cycle of a visible region.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Horizon {
    /// Half-edges on the non-visible side, in walking order. The end of each
    /// edge is the start of the one before it.
    pub edges: Vec<HalfEdgeId>,
    /// Vertices on the cycle; they survive the removal of the visible faces.
    pub vertices: BTreeSet<VertexId>,
}

/// Walks the boundary of `visible`.
///
/// Starting from a visible-side half-edge whose twin lies on a hidden face,
/// the walk either records the twin and advances along `next` (boundary
/// edge), or crosses to the twin's `next` and keeps pivoting around the same
/// vertex (interior edge), until it is back at the start.
///
/// Visibility is membership in `visible`, the arc set of the conflict graph,
/// so the walk and the later face deletion agree on the same region.
pub(crate) fn compute_horizon(mesh: &DcelMesh, visible: &BTreeSet<FaceId>) -> HullResult<Horizon> {
    let first = find_boundary_edge(mesh, visible)?
        .ok_or_else(|| HullError::invariant("visible faces have no boundary edge"))?;

    let mut edges = vec![mesh.twin(first)?];
    let mut vertices = BTreeSet::from([mesh.half_edge(first)?.start_vert]);

    let budget = mesh.half_edge_count();
    let mut steps = 0usize;
    let mut e0 = mesh.next(first)?;
    while e0 != first {
        steps += 1;
        if steps > budget {
            return Err(HullError::invariant("horizon walk did not close"));
        }
        let e1 = mesh.twin(e0)?;
        if visible.contains(&mesh.incident_face(e1)?) {
            e0 = mesh.next(e1)?;
        } else {
            edges.push(e1);
            vertices.insert(mesh.half_edge(e0)?.start_vert);
            e0 = mesh.next(e0)?;
        }
    }

    if vertices.len() != edges.len() {
        return Err(HullError::invariant(format!(
            "horizon is not a simple cycle ({} edges through {} vertices)",
            edges.len(),
            vertices.len()
        )));
    }
    Ok(Horizon { edges, vertices })
}

fn find_boundary_edge(
    mesh: &DcelMesh,
    visible: &BTreeSet<FaceId>,
) -> HullResult<Option<HalfEdgeId>> {
    for &face in visible {
        for he in mesh.face_half_edges(face) {
            let neighbour = mesh.incident_face(mesh.twin(he)?)?;
            if !visible.contains(&neighbour) {
                return Ok(Some(he));
            }
        }
    }
    Ok(None)
}
