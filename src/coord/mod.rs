//! Coordinate primitives.
//!
//! 2D points are geographic (longitude, latitude) in radians; 3D points are
//! positions in the display coordinate frame. Single and double precision
//! variants are nalgebra point types, so all of its vector algebra applies.

mod mbr;

pub use mbr::GeoMbr;

use nalgebra::{Point2, Point3};

/// 2D point, single precision.
pub type Point2f = Point2<f32>;
/// 2D point, double precision.
pub type Point2d = Point2<f64>;
/// 3D point, single precision.
pub type Point3f = Point3<f32>;
/// 3D point, double precision.
pub type Point3d = Point3<f64>;

/// Geographic coordinate (longitude, latitude) in radians.
pub type GeoCoord = Point2f;

/// A ring is an ordered run of 2D points forming one open or closed path.
/// Order defines the edges and, for closed rings, the winding. Consecutive
/// duplicate points are legal input.
pub type VectorRing = Vec<Point2f>;

/// Ring of 3D double precision points.
pub type VectorRing3d = Vec<Point3d>;
