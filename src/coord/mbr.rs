//! Geographic minimum bounding rectangle.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::{GeoCoord, Point2d};

/// Axis-aligned bounding box in geographic coordinates (radians).
///
/// A freshly created box is empty, which is distinguishable from any real
/// box. Once a point has been added, `ll <= ur` holds per axis.
///
/// Longitude handling: when a coordinate is unioned into a non-empty box,
/// the candidate longitudes `lon`, `lon - 2π` and `lon + 2π` are considered
/// and the one requiring the least growth wins. The stored longitude range
/// may therefore extend outside [-π, π]; [`GeoMbr::crosses_antimeridian`]
/// reports when it does. Points near +179° and -179° union to a box a few
/// degrees wide rather than one spanning the globe.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoMbr {
    ll: Point2d,
    ur: Point2d,
}

impl Default for GeoMbr {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoMbr {
    /// Creates an empty bounding box.
    pub fn new() -> Self {
        GeoMbr {
            ll: Point2d::new(f64::MAX, f64::MAX),
            ur: Point2d::new(-f64::MAX, -f64::MAX),
        }
    }

    /// Creates a box from lower-left and upper-right corners.
    pub fn from_corners(ll: Point2d, ur: Point2d) -> Self {
        GeoMbr { ll, ur }
    }

    /// True once at least one point has been added.
    pub fn is_valid(&self) -> bool {
        self.ll.x <= self.ur.x && self.ll.y <= self.ur.y
    }

    /// Empties the box.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Lower-left corner. Meaningless while the box is empty.
    pub fn ll(&self) -> Point2d {
        self.ll
    }

    /// Upper-right corner. Meaningless while the box is empty.
    pub fn ur(&self) -> Point2d {
        self.ur
    }

    /// True if the stored longitude range extends past ±π.
    pub fn crosses_antimeridian(&self) -> bool {
        self.is_valid() && (self.ll.x < -PI || self.ur.x > PI)
    }

    /// Expands the box to cover a geographic coordinate.
    pub fn add_geo_coord(&mut self, geo: GeoCoord) {
        self.add_point(geo.cast::<f64>());
    }

    /// Expands the box to cover every coordinate in the slice.
    pub fn add_geo_coords(&mut self, coords: &[GeoCoord]) {
        for c in coords {
            self.add_geo_coord(*c);
        }
    }

    /// Double precision form of [`GeoMbr::add_geo_coord`].
    pub fn add_point(&mut self, pt: Point2d) {
        if !self.is_valid() {
            self.ll = pt;
            self.ur = pt;
            return;
        }
        let lon = self.best_lon(pt.x);
        self.ll.x = self.ll.x.min(lon);
        self.ur.x = self.ur.x.max(lon);
        self.ll.y = self.ll.y.min(pt.y);
        self.ur.y = self.ur.y.max(pt.y);
    }

    /// Unions another box into this one.
    pub fn add_geo_mbr(&mut self, other: &GeoMbr) {
        if !other.is_valid() {
            return;
        }
        if !self.is_valid() {
            *self = *other;
            return;
        }
        // Shift the other box's longitude span as a whole so boxes on the
        // far side of the antimeridian union to the near copy.
        let shift = self.best_lon(other.mid().x) - other.mid().x;
        self.ll.x = self.ll.x.min(other.ll.x + shift);
        self.ur.x = self.ur.x.max(other.ur.x + shift);
        self.ll.y = self.ll.y.min(other.ll.y);
        self.ur.y = self.ur.y.max(other.ur.y);
    }

    /// True if the coordinate falls inside the box.
    pub fn contains(&self, geo: GeoCoord) -> bool {
        self.contains_point(geo.cast::<f64>())
    }

    /// Double precision form of [`GeoMbr::contains`].
    pub fn contains_point(&self, pt: Point2d) -> bool {
        if !self.is_valid() || pt.y < self.ll.y || pt.y > self.ur.y {
            return false;
        }
        [pt.x, pt.x - TAU, pt.x + TAU]
            .iter()
            .any(|&lon| lon >= self.ll.x && lon <= self.ur.x)
    }

    /// True if the two boxes overlap.
    pub fn intersects(&self, other: &GeoMbr) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        if self.ll.y > other.ur.y || self.ur.y < other.ll.y {
            return false;
        }
        [0.0, -TAU, TAU]
            .iter()
            .any(|&shift| self.ll.x <= other.ur.x + shift && self.ur.x >= other.ll.x + shift)
    }

    /// Center of the box.
    pub fn mid(&self) -> Point2d {
        nalgebra::center(&self.ll, &self.ur)
    }

    /// Width and height of the box.
    pub fn span(&self) -> Vector2<f64> {
        self.ur - self.ll
    }

    /// Grows the box outward by the given fraction of its span per side.
    pub fn expand_by_fraction(&mut self, frac: f64) {
        if !self.is_valid() {
            return;
        }
        let pad = self.span() * frac;
        self.ll -= pad;
        self.ur += pad;
    }

    /// Picks the copy of `lon` (shifted by 0 or ±2π) closest to the box.
    /// Longitudes already outside [-π, π] are taken literally; wrap
    /// disambiguation only applies to normalized input.
    fn best_lon(&self, lon: f64) -> f64 {
        if !(-PI..=PI).contains(&lon) {
            return lon;
        }
        let mut best = lon;
        let mut best_cost = f64::MAX;
        for cand in [lon, lon - TAU, lon + TAU] {
            let cost = if cand < self.ll.x {
                self.ll.x - cand
            } else if cand > self.ur.x {
                cand - self.ur.x
            } else {
                0.0
            };
            if cost < best_cost {
                best_cost = cost;
                best = cand;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(d: f64) -> f64 {
        d.to_radians()
    }

    #[test]
    fn test_empty_box() {
        let mbr = GeoMbr::new();
        assert!(!mbr.is_valid());
        assert!(!mbr.contains(GeoCoord::new(0.0, 0.0)));
        assert!(!mbr.crosses_antimeridian());
    }

    #[test]
    fn test_add_and_contains() {
        let mut mbr = GeoMbr::new();
        mbr.add_geo_coord(GeoCoord::new(0.1, 0.2));
        assert!(mbr.is_valid());
        assert!(mbr.contains(GeoCoord::new(0.1, 0.2)));

        mbr.add_geo_coord(GeoCoord::new(0.3, 0.4));
        assert!(mbr.contains(GeoCoord::new(0.2, 0.3)));
        assert!(!mbr.contains(GeoCoord::new(0.5, 0.3)));
    }

    #[test]
    fn test_antimeridian_union_stays_narrow() {
        let mut mbr = GeoMbr::new();
        mbr.add_geo_coord(GeoCoord::new(deg(179.0) as f32, 0.0));
        mbr.add_geo_coord(GeoCoord::new(deg(-179.0) as f32, 0.0));

        let width = mbr.span().x;
        assert!(width < deg(3.0), "box spans {width} rad, expected ~2 deg");
        assert!(mbr.crosses_antimeridian());

        // The dateline itself is inside, the far side of the globe is not.
        assert!(mbr.contains(GeoCoord::new(deg(180.0) as f32, 0.0)));
        assert!(mbr.contains(GeoCoord::new(deg(-180.0) as f32, 0.0)));
        assert!(!mbr.contains(GeoCoord::new(0.0, 0.0)));
    }

    #[test]
    fn test_union_of_boxes_across_antimeridian() {
        let mut east = GeoMbr::new();
        east.add_point(Point2d::new(deg(178.0), 0.0));
        east.add_point(Point2d::new(deg(179.0), deg(1.0)));

        let mut west = GeoMbr::new();
        west.add_point(Point2d::new(deg(-179.0), 0.0));
        west.add_point(Point2d::new(deg(-178.0), deg(1.0)));

        let mut both = east;
        both.add_geo_mbr(&west);
        assert!(both.span().x < deg(5.0));
        assert!(both.contains_point(Point2d::new(deg(180.0), deg(0.5))));
    }

    #[test]
    fn test_intersects() {
        let mut a = GeoMbr::new();
        a.add_point(Point2d::new(0.0, 0.0));
        a.add_point(Point2d::new(0.2, 0.2));

        let mut b = GeoMbr::new();
        b.add_point(Point2d::new(0.1, 0.1));
        b.add_point(Point2d::new(0.3, 0.3));

        let mut c = GeoMbr::new();
        c.add_point(Point2d::new(0.5, 0.5));
        c.add_point(Point2d::new(0.6, 0.6));

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(!a.intersects(&GeoMbr::new()));
    }

    #[test]
    fn test_out_of_range_longitudes_taken_literally() {
        // Abstract planar rings (units are the caller's business) must not
        // get wrapped.
        let mut mbr = GeoMbr::new();
        mbr.add_point(Point2d::new(0.0, 0.0));
        mbr.add_point(Point2d::new(10.0, 10.0));
        assert!(mbr.contains_point(Point2d::new(5.0, 5.0)));
        assert_eq!(mbr.span().x, 10.0);
    }

    #[test]
    fn test_expand_by_fraction() {
        let mut mbr = GeoMbr::new();
        mbr.add_point(Point2d::new(0.0, 0.0));
        mbr.add_point(Point2d::new(1.0, 1.0));
        mbr.expand_by_fraction(0.1);
        assert!(mbr.contains_point(Point2d::new(-0.05, -0.05)));
        assert!(!mbr.contains_point(Point2d::new(-0.2, 0.5)));
    }
}
