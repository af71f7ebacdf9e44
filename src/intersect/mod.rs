//! Ray/triangle-mesh intersection.

use nalgebra::Vector3;

use crate::coord::Point3d;
use crate::precision;
use crate::shape::VectorTriangles;

/// A ray hit: parametric distance along the ray and the hit point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub t: f64,
    pub point: Point3d,
}

/// Intersects a ray with a single triangle via the barycentric (Cramer)
/// solve.
///
/// Rays parallel to the triangle's plane, hits outside the triangle and
/// hits behind the origin (t < 0) all yield `None`.
pub fn triangle_ray_intersect(
    org: &Point3d,
    dir: &Vector3<f64>,
    tri: &[Point3d; 3],
) -> Option<RayHit> {
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let pvec = dir.cross(&e2);
    let det = e1.dot(&pvec);
    if det.abs() < precision::RAY_PARALLEL {
        return None;
    }
    let inv_det = 1.0 / det;
    let tvec = org - tri[0];
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let qvec = tvec.cross(&e1);
    let v = dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(&qvec) * inv_det;
    if t < 0.0 {
        return None;
    }
    Some(RayHit {
        t,
        point: org + dir * t,
    })
}

/// Finds the nearest ray intersection across a whole mesh.
///
/// Triangles with out-of-range vertex indices are skipped rather than
/// faulted on; an empty mesh simply never intersects.
pub fn triangles_ray_intersect(
    org: &Point3d,
    dir: &Vector3<f64>,
    mesh: &VectorTriangles,
) -> Option<RayHit> {
    let mut nearest: Option<RayHit> = None;
    for tri in &mesh.tris {
        let (Some(a), Some(b), Some(c)) = (
            mesh.pts.get(tri.pts[0]),
            mesh.pts.get(tri.pts[1]),
            mesh.pts.get(tri.pts[2]),
        ) else {
            continue;
        };
        let corners = [a.cast::<f64>(), b.cast::<f64>(), c.cast::<f64>()];
        if let Some(hit) = triangle_ray_intersect(org, dir, &corners) {
            if nearest.map_or(true, |best| hit.t < best.t) {
                nearest = Some(hit);
            }
        }
    }
    nearest
}
