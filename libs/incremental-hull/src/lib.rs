//! Randomized incremental 3D convex hull on a half-edge mesh.
//!
//! The crate is split along the pipeline:
//!
//! - [`geometry`]: points, bounding boxes and the orientation predicate
//! - [`mesh`]: the DCEL container with traversal and validation
//! - [`conflict`]: the bipartite point/face conflict graph
//! - [`hull`]: seed selection, horizon search and face replacement
//!
//! ```rust
//! use incremental_hull::{convex_hull, Point};
//!
//! let mut points = vec![Point::splat(0.5)];
//! for x in [0.0, 1.0] {
//!     for y in [0.0, 1.0] {
//!         for z in [0.0, 1.0] {
//!             points.push(Point::new(x, y, z));
//!         }
//!     }
//! }
//! let hull = convex_hull(&points).unwrap();
//! assert_eq!(hull.vertex_count(), 8);
//! assert_eq!(hull.face_count(), 12);
//! hull.validate_topology().unwrap();
//! ```

pub mod config;
pub mod conflict;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod mesh;

pub use self::config::HullConfig;
pub use error::{HullError, HullResult};
pub use geometry::{BoundingBox, Point};
pub use hull::{
    convex_hull, convex_hull_of_mesh, convex_hull_of_mesh_with_config, convex_hull_with_config,
    HullBuilder,
};
pub use mesh::{DcelMesh, FaceId, HalfEdgeId, TopologyError, VertexId};
