//! Point containment primitives.

use nalgebra::{Point2, RealField};

/// Ray-casting (odd-even rule) point-in-polygon test.
///
/// The loop is treated as closed; the final edge runs from the last point
/// back to the first. Fewer than three points never contain anything.
/// Points exactly on an edge may land on either side.
pub fn point_in_polygon<T: RealField + Copy>(pt: &Point2<T>, ring: &[Point2<T>]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut jj = ring.len() - 1;
    for ii in 0..ring.len() {
        let pi = &ring[ii];
        let pj = &ring[jj];
        if (pi.y > pt.y) != (pj.y > pt.y) {
            let x_cross = (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        jj = ii;
    }
    inside
}
