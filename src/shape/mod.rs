//! The vector shape model.
//!
//! Five concrete feature variants share a common surface: a process-unique
//! identity, an opaque attribute handle owned by the caller, and a cached
//! geographic bounding box. [`VectorShape`] closes over the variants for
//! uniform dispatch; [`ShapeRef`] shares a shape between collections.
//!
//! Shapes are built through their `new()` creation functions, populated
//! through their public geometry fields, and then have `init_geo_mbr`
//! called before being handed to algorithms. Recomputing the box after a
//! later geometry edit is the caller's job; nothing does it implicitly.

mod areal;
mod linear;
mod linear3d;
mod points;
mod set;
mod triangles;

pub use areal::VectorAreal;
pub use linear::VectorLinear;
pub use linear3d::VectorLinear3d;
pub use points::VectorPoints;
pub use set::{ShapeRef, ShapeSet};
pub use triangles::{Triangle, VectorTriangles};

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::coord::GeoMbr;

/// Process-unique, stable shape identity.
///
/// Used for deduplication and back-reference lookup, never for ownership.
/// Ids are never reused within a process; a deserialized shape gets a
/// fresh one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(1);

impl ShapeId {
    pub(crate) fn fresh() -> Self {
        ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque attribute dictionary handle.
///
/// The store behind it is owned by the collaborator that produced the
/// shape; the kernel holds the reference and never looks inside. Cloning
/// shares the same underlying store.
#[derive(Clone)]
pub struct AttrDict(Arc<dyn Any + Send + Sync>);

impl AttrDict {
    /// Wraps a caller-owned attribute store.
    pub fn new<T: Any + Send + Sync>(store: T) -> Self {
        AttrDict(Arc::new(store))
    }

    /// Wraps an already-shared store.
    pub fn from_arc(store: Arc<dyn Any + Send + Sync>) -> Self {
        AttrDict(store)
    }

    /// Hands the store back to a collaborator that knows its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// True if both handles refer to the same underlying store.
    pub fn ptr_eq(&self, other: &AttrDict) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AttrDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AttrDict(..)")
    }
}

/// A vector feature of any variant.
///
/// The closed set of variants keeps dispatch exhaustive; the `as_*`
/// accessors are the capability checks consumers use to get at a concrete
/// variant.
#[derive(Debug, Serialize, Deserialize)]
pub enum VectorShape {
    Points(VectorPoints),
    Linear(VectorLinear),
    Linear3d(VectorLinear3d),
    Areal(VectorAreal),
    Triangles(VectorTriangles),
}

impl VectorShape {
    /// The shape's identity.
    pub fn id(&self) -> ShapeId {
        match self {
            VectorShape::Points(s) => s.id(),
            VectorShape::Linear(s) => s.id(),
            VectorShape::Linear3d(s) => s.id(),
            VectorShape::Areal(s) => s.id(),
            VectorShape::Triangles(s) => s.id(),
        }
    }

    /// The attribute dictionary, if one was attached.
    pub fn attr_dict(&self) -> Option<&AttrDict> {
        match self {
            VectorShape::Points(s) => s.attr_dict(),
            VectorShape::Linear(s) => s.attr_dict(),
            VectorShape::Linear3d(s) => s.attr_dict(),
            VectorShape::Areal(s) => s.attr_dict(),
            VectorShape::Triangles(s) => s.attr_dict(),
        }
    }

    /// Attaches (or replaces) the attribute dictionary.
    pub fn set_attr_dict(&mut self, dict: AttrDict) {
        match self {
            VectorShape::Points(s) => s.set_attr_dict(dict),
            VectorShape::Linear(s) => s.set_attr_dict(dict),
            VectorShape::Linear3d(s) => s.set_attr_dict(dict),
            VectorShape::Areal(s) => s.set_attr_dict(dict),
            VectorShape::Triangles(s) => s.set_attr_dict(dict),
        }
    }

    /// The cached bounding box. Empty until `init_geo_mbr` has run.
    pub fn geo_mbr(&self) -> GeoMbr {
        match self {
            VectorShape::Points(s) => s.geo_mbr,
            VectorShape::Linear(s) => s.geo_mbr,
            VectorShape::Linear3d(s) => s.geo_mbr,
            VectorShape::Areal(s) => s.geo_mbr,
            VectorShape::Triangles(s) => s.geo_mbr,
        }
    }

    /// Computes the bounding box from the current geometry.
    pub fn calc_geo_mbr(&self) -> GeoMbr {
        match self {
            VectorShape::Points(s) => s.calc_geo_mbr(),
            VectorShape::Linear(s) => s.calc_geo_mbr(),
            VectorShape::Linear3d(s) => s.calc_geo_mbr(),
            VectorShape::Areal(s) => s.calc_geo_mbr(),
            VectorShape::Triangles(s) => s.calc_geo_mbr(),
        }
    }

    /// Computes and caches the bounding box.
    pub fn init_geo_mbr(&mut self) {
        match self {
            VectorShape::Points(s) => s.init_geo_mbr(),
            VectorShape::Linear(s) => s.init_geo_mbr(),
            VectorShape::Linear3d(s) => s.init_geo_mbr(),
            VectorShape::Areal(s) => s.init_geo_mbr(),
            VectorShape::Triangles(s) => s.init_geo_mbr(),
        }
    }

    pub fn as_points(&self) -> Option<&VectorPoints> {
        match self {
            VectorShape::Points(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_linear(&self) -> Option<&VectorLinear> {
        match self {
            VectorShape::Linear(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_linear3d(&self) -> Option<&VectorLinear3d> {
        match self {
            VectorShape::Linear3d(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_areal(&self) -> Option<&VectorAreal> {
        match self {
            VectorShape::Areal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_triangles(&self) -> Option<&VectorTriangles> {
        match self {
            VectorShape::Triangles(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_points_mut(&mut self) -> Option<&mut VectorPoints> {
        match self {
            VectorShape::Points(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_linear_mut(&mut self) -> Option<&mut VectorLinear> {
        match self {
            VectorShape::Linear(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_linear3d_mut(&mut self) -> Option<&mut VectorLinear3d> {
        match self {
            VectorShape::Linear3d(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_areal_mut(&mut self) -> Option<&mut VectorAreal> {
        match self {
            VectorShape::Areal(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_triangles_mut(&mut self) -> Option<&mut VectorTriangles> {
        match self {
            VectorShape::Triangles(s) => Some(s),
            _ => None,
        }
    }
}

impl From<VectorPoints> for VectorShape {
    fn from(s: VectorPoints) -> Self {
        VectorShape::Points(s)
    }
}

impl From<VectorLinear> for VectorShape {
    fn from(s: VectorLinear) -> Self {
        VectorShape::Linear(s)
    }
}

impl From<VectorLinear3d> for VectorShape {
    fn from(s: VectorLinear3d) -> Self {
        VectorShape::Linear3d(s)
    }
}

impl From<VectorAreal> for VectorShape {
    fn from(s: VectorAreal) -> Self {
        VectorShape::Areal(s)
    }
}

impl From<VectorTriangles> for VectorShape {
    fn from(s: VectorTriangles) -> Self {
        VectorShape::Triangles(s)
    }
}
