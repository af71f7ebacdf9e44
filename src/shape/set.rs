//! Shared shape handles and the shape set.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use super::VectorShape;

/// Reference counted handle to a shape.
///
/// Equality and hashing go by shape identity, not geometry: two handles to
/// the same shape object compare equal, two distinct shapes with identical
/// coordinates do not. Cloning is cheap and shares the shape.
#[derive(Debug, Clone)]
pub struct ShapeRef {
    inner: Arc<VectorShape>,
}

impl ShapeRef {
    /// Wraps a shape for sharing.
    pub fn new(shape: impl Into<VectorShape>) -> Self {
        ShapeRef {
            inner: Arc::new(shape.into()),
        }
    }

    /// Wraps an already-shared shape.
    pub fn from_arc(shape: Arc<VectorShape>) -> Self {
        ShapeRef { inner: shape }
    }

    /// The underlying shared allocation.
    pub fn as_arc(&self) -> &Arc<VectorShape> {
        &self.inner
    }

    /// Exclusive access to the shape, available only while this is the
    /// sole handle. Mutation after sharing requires draining the other
    /// handles first; the kernel takes no locks on the caller's behalf.
    pub fn get_mut(&mut self) -> Option<&mut VectorShape> {
        Arc::get_mut(&mut self.inner)
    }
}

impl Deref for ShapeRef {
    type Target = VectorShape;

    fn deref(&self) -> &VectorShape {
        &self.inner
    }
}

impl PartialEq for ShapeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ShapeRef {}

impl Hash for ShapeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl From<VectorShape> for ShapeRef {
    fn from(shape: VectorShape) -> Self {
        ShapeRef::new(shape)
    }
}

/// An unordered group of shapes, deduplicated by identity.
///
/// This is how heterogeneous batches of shapes move between producers and
/// consumers; iteration order is unspecified. Not internally synchronized:
/// concurrent insertion needs an external mutex or a single writer.
pub type ShapeSet = HashSet<ShapeRef>;
