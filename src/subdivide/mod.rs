//! Adaptive edge subdivision.
//!
//! Three related operations: flat subdivision against a maximum edge
//! length, surface-deviation subdivision against a [`DisplayAdapter`]
//! oracle, and a great-circle variant that emits display-space points
//! lying on the curved surface. All of them preserve ring endpoints and
//! closure, are idempotent on already-fine-enough input, and pass
//! degenerate rings through unchanged.
//!
//! Recursive bisection is bounded by geometric convergence and, as a
//! backstop against non-convergent oracles, by
//! [`precision::SUBDIVISION_DEPTH_LIMIT`]; hitting the cap accepts the
//! segment rather than failing.

use nalgebra::{Point, RealField};

use crate::adapter::DisplayAdapter;
use crate::coord::{Point2f, Point3d, VectorRing, VectorRing3d};
use crate::precision;

/// Breaks any edge longer than `max_len`, inserting evenly spaced interior
/// points so every resulting edge is at most `max_len` long.
///
/// Operates purely in the ring's own coordinate space. `closed` controls
/// whether the final-to-first edge is subdivided too. Returns true if
/// anything was inserted.
///
/// `max_len` must be positive; non-positive tolerances are a caller bug.
pub fn subdivide_edges<T, const D: usize>(
    in_pts: &[Point<T, D>],
    out_pts: &mut Vec<Point<T, D>>,
    closed: bool,
    max_len: T,
) -> bool
where
    T: RealField + Copy,
{
    debug_assert!(max_len > T::zero(), "subdivide_edges: max_len must be positive");
    out_pts.clear();
    if in_pts.len() < 2 {
        out_pts.extend_from_slice(in_pts);
        return false;
    }
    let mut broke = false;
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        let dist = nalgebra::distance(&p0, &p1);
        if dist > max_len {
            let dir = (p1 - p0) / dist;
            let mut pos = max_len;
            while pos < dist {
                out_pts.push(p0 + dir * pos);
                broke = true;
                pos += max_len;
            }
        }
    }
    if !closed {
        if let Some(last) = in_pts.last() {
            out_pts.push(*last);
        }
    }
    broke
}

/// Breaks any edge whose chord deviates from the oracle's surface by more
/// than `eps`, bisecting recursively until the deviation is within
/// tolerance. Output stays in geographic coordinates.
///
/// Returns true if anything was inserted. `eps` must be positive.
pub fn subdivide_edges_to_surface(
    in_pts: &[Point2f],
    out_pts: &mut VectorRing,
    closed: bool,
    adapter: &dyn DisplayAdapter,
    eps: f32,
) -> bool {
    debug_assert!(eps > 0.0, "subdivide_edges_to_surface: eps must be positive");
    out_pts.clear();
    if in_pts.len() < 2 {
        out_pts.extend_from_slice(in_pts);
        return false;
    }
    let eps2 = f64::from(eps) * f64::from(eps);
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        surface_recurse(p0, p1, out_pts, adapter, eps2, 0);
    }
    if !closed {
        if let Some(last) = in_pts.last() {
            out_pts.push(*last);
        }
    }
    out_pts.len() != in_pts.len()
}

fn surface_recurse(
    p0: Point2f,
    p1: Point2f,
    out_pts: &mut VectorRing,
    adapter: &dyn DisplayAdapter,
    eps2: f64,
    depth: usize,
) {
    if depth >= precision::SUBDIVISION_DEPTH_LIMIT {
        return;
    }
    let dp0 = adapter.display_point(&p0.cast::<f64>());
    let dp1 = adapter.display_point(&p1.cast::<f64>());
    let mid = nalgebra::center(&p0, &p1);
    let mid_on_surface = adapter.display_point(&mid.cast::<f64>());
    let chord_mid = nalgebra::center(&dp0, &dp1);
    if (mid_on_surface - chord_mid).norm_squared() > eps2 {
        surface_recurse(p0, mid, out_pts, adapter, eps2, depth + 1);
        out_pts.push(mid);
        surface_recurse(mid, p1, out_pts, adapter, eps2, depth + 1);
    }
}

/// 3D-ring form of [`subdivide_edges_to_surface`]. The x and y of each
/// point are geographic, z is elevation and interpolates linearly.
pub fn subdivide_edges_to_surface3d(
    in_pts: &[Point3d],
    out_pts: &mut VectorRing3d,
    closed: bool,
    adapter: &dyn DisplayAdapter,
    eps: f64,
) -> bool {
    debug_assert!(eps > 0.0, "subdivide_edges_to_surface3d: eps must be positive");
    out_pts.clear();
    if in_pts.len() < 2 {
        out_pts.extend_from_slice(in_pts);
        return false;
    }
    let eps2 = eps * eps;
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        surface_recurse3d(p0, p1, out_pts, adapter, eps2, 0);
    }
    if !closed {
        if let Some(last) = in_pts.last() {
            out_pts.push(*last);
        }
    }
    out_pts.len() != in_pts.len()
}

fn surface_recurse3d(
    p0: Point3d,
    p1: Point3d,
    out_pts: &mut VectorRing3d,
    adapter: &dyn DisplayAdapter,
    eps2: f64,
    depth: usize,
) {
    if depth >= precision::SUBDIVISION_DEPTH_LIMIT {
        return;
    }
    let dp0 = adapter.display_point3(&p0);
    let dp1 = adapter.display_point3(&p1);
    let mid = nalgebra::center(&p0, &p1);
    let mid_on_surface = adapter.display_point3(&mid);
    let chord_mid = nalgebra::center(&dp0, &dp1);
    if (mid_on_surface - chord_mid).norm_squared() > eps2 {
        surface_recurse3d(p0, mid, out_pts, adapter, eps2, depth + 1);
        out_pts.push(mid);
        surface_recurse3d(mid, p1, out_pts, adapter, eps2, depth + 1);
    }
}

/// Surface-deviation subdivision that walks each edge along the great
/// circle between its endpoints, emitting display-space points on the
/// oracle's surface rather than geographic chord points.
///
/// `surf_offset` lifts the output off the surface by that fraction of the
/// globe radius. `min_pts` forces subdivision until each edge carries at
/// least that many points, regardless of deviation. The output is always a
/// 3D display-space ring; flat adapters get plain chord midpoints.
///
/// Returns true if anything was inserted. `eps` must be positive.
pub fn subdivide_edges_to_surface_gc(
    in_pts: &[Point2f],
    out_pts: &mut VectorRing3d,
    closed: bool,
    adapter: &dyn DisplayAdapter,
    eps: f32,
    surf_offset: f32,
    min_pts: usize,
) -> bool {
    debug_assert!(eps > 0.0, "subdivide_edges_to_surface_gc: eps must be positive");
    out_pts.clear();
    let scale = 1.0 + f64::from(surf_offset);
    if in_pts.len() < 2 {
        for p in in_pts {
            out_pts.push(lift_to_surface(*p, adapter, scale));
        }
        return false;
    }
    let eps2 = f64::from(eps) * f64::from(eps);
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let dp0 = lift_to_surface(in_pts[ii], adapter, scale);
        let dp1 = lift_to_surface(in_pts[(ii + 1) % in_pts.len()], adapter, scale);
        out_pts.push(dp0);
        gc_recurse(dp0, dp1, out_pts, adapter, eps2, scale, min_pts, 0);
    }
    if !closed {
        if let Some(last) = in_pts.last() {
            out_pts.push(lift_to_surface(*last, adapter, scale));
        }
    }
    out_pts.len() > in_pts.len()
}

fn gc_recurse(
    p0: Point3d,
    p1: Point3d,
    out_pts: &mut VectorRing3d,
    adapter: &dyn DisplayAdapter,
    eps2: f64,
    scale: f64,
    min_pts: usize,
    depth: usize,
) {
    if depth >= precision::SUBDIVISION_DEPTH_LIMIT {
        return;
    }
    let mid = nalgebra::center(&p0, &p1);
    let mid_on_surface = if adapter.is_flat() {
        mid
    } else {
        reproject(mid, scale)
    };
    if (mid_on_surface - mid).norm_squared() > eps2 || min_pts > 0 {
        gc_recurse(p0, mid_on_surface, out_pts, adapter, eps2, scale, min_pts / 2, depth + 1);
        out_pts.push(mid_on_surface);
        gc_recurse(mid_on_surface, p1, out_pts, adapter, eps2, scale, min_pts / 2, depth + 1);
    }
}

fn lift_to_surface(geo: Point2f, adapter: &dyn DisplayAdapter, scale: f64) -> Point3d {
    let dp = adapter.display_point(&geo.cast::<f64>());
    if adapter.is_flat() {
        dp
    } else {
        reproject(dp, scale)
    }
}

/// Pushes a display point radially onto the sphere of radius `scale`.
/// Points too close to the origin to normalize come back unchanged.
fn reproject(pt: Point3d, scale: f64) -> Point3d {
    let n2 = pt.coords.norm_squared();
    if n2 < precision::SQUARE_RESOLUTION {
        return pt;
    }
    Point3d::from(pt.coords * (scale / n2.sqrt()))
}
