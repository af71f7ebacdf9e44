//! Shape validity screening.
//!
//! Producers feed the kernel geometry parsed from noisy external data. The
//! pure algorithms tolerate anything, but a producer that wants to reject
//! malformed features early can run them through here.

use crate::coord::VectorRing;
use crate::shape::VectorShape;
use crate::{GeovecError, Result};

/// Screens a shape for geometry the producer probably did not intend:
/// non-finite coordinates, triangle indices past the vertex array, an
/// areal without a usable outer loop.
pub fn check_shape(shape: &VectorShape) -> Result<()> {
    match shape {
        VectorShape::Points(s) => check_ring(&s.pts),
        VectorShape::Linear(s) => check_ring(&s.pts),
        VectorShape::Linear3d(s) => {
            for p in &s.pts {
                if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                    return Err(GeovecError::InvalidGeometry(
                        "non-finite coordinate in 3d path".into(),
                    ));
                }
            }
            Ok(())
        }
        VectorShape::Areal(s) => {
            let outer = s.loops.first().ok_or_else(|| {
                GeovecError::InvalidGeometry("areal has no outer loop".into())
            })?;
            if outer.len() < 3 {
                return Err(GeovecError::InvalidGeometry(format!(
                    "outer loop has {} points, need at least 3",
                    outer.len()
                )));
            }
            for l in &s.loops {
                check_ring(l)?;
            }
            Ok(())
        }
        VectorShape::Triangles(s) => {
            for p in &s.pts {
                if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
                    return Err(GeovecError::InvalidGeometry(
                        "non-finite coordinate in mesh".into(),
                    ));
                }
            }
            for (which, tri) in s.tris.iter().enumerate() {
                for &vi in &tri.pts {
                    if vi >= s.pts.len() {
                        return Err(GeovecError::TriangleIndexOutOfRange {
                            triangle: which,
                            vertex: vi,
                            len: s.pts.len(),
                        });
                    }
                }
            }
            Ok(())
        }
    }
}

fn check_ring(ring: &VectorRing) -> Result<()> {
    for p in ring {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(GeovecError::InvalidGeometry(
                "non-finite coordinate in ring".into(),
            ));
        }
    }
    Ok(())
}
