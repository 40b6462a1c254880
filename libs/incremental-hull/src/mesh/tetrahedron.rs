//! Seed tetrahedron construction.

use super::{DcelMesh, FaceId, TopologyResult};
use crate::geometry::Point;

impl DcelMesh {
    /// Builds a closed tetrahedron from four points and returns its faces.
    ///
    /// The faces are `(p0, p1, p2)`, `(p1, p0, p3)`, `(p2, p3, p0)` and
    /// `(p2, p1, p3)`. They face outward when
    /// `orientation(p0, p1, p2, p3) > 0`; callers swap `p0` and `p1` when
    /// the determinant is negative.
    ///
    /// Face and vertex normals are refreshed before returning.
    pub fn insert_tet(
        &mut self,
        p0: Point,
        p1: Point,
        p2: Point,
        p3: Point,
    ) -> TopologyResult<[FaceId; 4]> {
        let v0 = self.add_vertex(p0);
        let v1 = self.add_vertex(p1);
        let v2 = self.add_vertex(p2);
        let v3 = self.add_vertex(p3);

        let e01 = self.add_half_edge(v0, v1);
        let e12 = self.add_half_edge(v1, v2);
        let e20 = self.add_half_edge(v2, v0);

        let e10 = self.add_half_edge(v1, v0);
        let e03 = self.add_half_edge(v0, v3);
        let e31 = self.add_half_edge(v3, v1);

        let e23 = self.add_half_edge(v2, v3);
        let e30 = self.add_half_edge(v3, v0);
        let e02 = self.add_half_edge(v0, v2);

        let e21 = self.add_half_edge(v2, v1);
        let e13 = self.add_half_edge(v1, v3);
        let e32 = self.add_half_edge(v3, v2);

        let f0 = self.add_face();
        let f1 = self.add_face();
        let f2 = self.add_face();
        let f3 = self.add_face();

        self.link_triangle(f0, [e01, e12, e20])?;
        self.link_triangle(f1, [e10, e03, e31])?;
        self.link_triangle(f2, [e23, e30, e02])?;
        self.link_triangle(f3, [e21, e13, e32])?;

        self.link_twins(e01, e10)?;
        self.link_twins(e12, e21)?;
        self.link_twins(e20, e02)?;
        self.link_twins(e03, e30)?;
        self.link_twins(e31, e13)?;
        self.link_twins(e23, e32)?;

        self.set_vertex_half_edge(v0, e01)?;
        self.set_vertex_half_edge(v1, e10)?;
        self.set_vertex_half_edge(v2, e23)?;
        self.set_vertex_half_edge(v3, e32)?;

        self.update_face_normals()?;
        self.update_vertex_normals()?;
        Ok([f0, f1, f2, f3])
    }
}
