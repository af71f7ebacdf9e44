//! geovec: a geographic vector-shape kernel.
//!
//! Represents geographic vector features (points, polylines, polygons with
//! holes, triangle meshes) and provides the spatial algorithms needed to
//! prepare them for rendering and querying: bounding boxes, loop metrics,
//! point containment, adaptive edge subdivision against a curved surface,
//! and ray/mesh intersection.
//!
//! The kernel is computationally pure. Shapes own their geometry; attribute
//! dictionaries are opaque handles owned by the caller; bounding boxes are
//! cached and recomputed only on an explicit `init_geo_mbr` call. There is
//! no internal locking: share [`ShapeRef`]s freely for read-only work, take
//! exclusive access to mutate.

pub mod adapter;
pub mod check;
pub mod contain;
pub mod coord;
pub mod intersect;
pub mod metric;
pub mod precision;
pub mod shape;
pub mod subdivide;

// Re-exports for convenience
pub use adapter::{DisplayAdapter, PlaneAdapter, UnitSphereAdapter};
pub use check::check_shape;
pub use contain::point_in_polygon;
pub use coord::{
    GeoCoord, GeoMbr, Point2d, Point2f, Point3d, Point3f, VectorRing, VectorRing3d,
};
pub use intersect::{triangle_ray_intersect, triangles_ray_intersect, RayHit};
pub use metric::{calc_center_of_mass, calc_loop_area, calc_loop_centroid};
pub use shape::{
    AttrDict, ShapeId, ShapeRef, ShapeSet, Triangle, VectorAreal, VectorLinear, VectorLinear3d,
    VectorPoints, VectorShape, VectorTriangles,
};
pub use subdivide::{
    subdivide_edges, subdivide_edges_to_surface, subdivide_edges_to_surface3d,
    subdivide_edges_to_surface_gc,
};

/// Result type for geovec operations
pub type Result<T> = std::result::Result<T, GeovecError>;

/// Errors reported by the boundary-facing operations.
///
/// The pure geometry algorithms never fail; degenerate input yields
/// degenerate-but-defined results (zero area, empty box, no hit). Only the
/// producer-facing validation in [`check`] reports errors.
#[derive(Debug, thiserror::Error)]
pub enum GeovecError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Triangle {triangle} references vertex {vertex}, but the mesh has {len} points")]
    TriangleIndexOutOfRange {
        triangle: usize,
        vertex: usize,
        len: usize,
    },
}
