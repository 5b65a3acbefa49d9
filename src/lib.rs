//! Convex hull, Delaunay triangulation and Voronoi edges for a dynamic set of
//! points in the plane.
//!
//! All three share the predicates in [`point::Planar`]. The triangulation is
//! incremental (Bowyer-Watson), so a [`DiagramSession`] can take points one at
//! a time without rebuilding.

pub mod delaunay;
pub mod edge;
pub mod error;
pub mod hull;
pub mod point;
pub mod session;
pub mod triangle;
pub mod voronoi;

pub use delaunay::{
    super_triangle, triangulate, triangulate_insert, triangulate_with, Bounds, Triangulation,
    TriangulationConfig,
};
pub use edge::{Edge, EdgeKey};
pub use error::{DiagramError, DiagramResult};
pub use hull::{compute_hull, ConvexHull};
pub use point::{Planar, Point};
pub use session::DiagramSession;
pub use triangle::{Aabb, Triangle};
pub use voronoi::{unique_voronoi_edges, voronoi_edges};
