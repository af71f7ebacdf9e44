//! Loop metrics: area, centroid, center of mass.
//!
//! Generic over scalar width so the f32 and f64 forms share one
//! implementation.

use nalgebra::{convert, Point2, RealField};

use crate::precision;

/// Signed area of a closed loop via the shoelace formula.
///
/// Positive area means counter-clockwise winding. Fewer than three points
/// yields zero.
pub fn calc_loop_area<T: RealField + Copy>(loop_pts: &[Point2<T>]) -> T {
    if loop_pts.len() < 3 {
        return T::zero();
    }
    let mut area = T::zero();
    for (ii, p0) in loop_pts.iter().enumerate() {
        let p1 = &loop_pts[(ii + 1) % loop_pts.len()];
        area += p0.x * p1.y - p1.x * p0.y;
    }
    area / convert::<f64, T>(2.0)
}

/// Area-weighted centroid of a closed loop.
///
/// Undefined for (near) zero-area loops; returns `None` there, and callers
/// fall back to [`calc_center_of_mass`].
pub fn calc_loop_centroid<T: RealField + Copy>(loop_pts: &[Point2<T>]) -> Option<Point2<T>> {
    if loop_pts.len() < 3 {
        return None;
    }
    let mut area = T::zero();
    let mut cx = T::zero();
    let mut cy = T::zero();
    for (ii, p0) in loop_pts.iter().enumerate() {
        let p1 = &loop_pts[(ii + 1) % loop_pts.len()];
        let b = p0.x * p1.y - p1.x * p0.y;
        area += b;
        cx += (p0.x + p1.x) * b;
        cy += (p0.y + p1.y) * b;
    }
    area /= convert::<f64, T>(2.0);
    if area.abs() < convert(precision::DEGENERATE_AREA) {
        return None;
    }
    let scale = convert::<f64, T>(6.0) * area;
    Some(Point2::new(cx / scale, cy / scale))
}

/// Arithmetic mean of the loop's vertices.
///
/// Well-defined for any non-empty ring, including degenerate ones, which is
/// what makes it the centroid fallback.
pub fn calc_center_of_mass<T: RealField + Copy>(loop_pts: &[Point2<T>]) -> Option<Point2<T>> {
    if loop_pts.is_empty() {
        return None;
    }
    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    for p in loop_pts {
        sum_x += p.x;
        sum_y += p.y;
    }
    let n: T = convert(loop_pts.len() as f64);
    Some(Point2::new(sum_x / n, sum_y / n))
}
