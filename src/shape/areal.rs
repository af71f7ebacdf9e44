//! Areal feature: an outer loop plus holes.

use serde::{Deserialize, Serialize};

use super::{AttrDict, ShapeId};
use crate::contain::point_in_polygon;
use crate::coord::{GeoCoord, GeoMbr, VectorRing};
use crate::subdivide::subdivide_edges;

/// A polygon feature as a list of loops. The first loop is the outer
/// boundary; all following loops are holes. Every loop shares the one
/// bounding box and attribute dictionary.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorAreal {
    #[serde(skip, default = "ShapeId::fresh")]
    id: ShapeId,
    #[serde(skip)]
    attr: Option<AttrDict>,
    /// Cached bounding box; call `init_geo_mbr` after editing `loops`.
    pub geo_mbr: GeoMbr,
    /// Outer loop first, then holes.
    pub loops: Vec<VectorRing>,
}

impl VectorAreal {
    /// Creation function. New shapes start empty.
    pub fn new() -> Self {
        VectorAreal {
            id: ShapeId::fresh(),
            attr: None,
            geo_mbr: GeoMbr::new(),
            loops: Vec::new(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn attr_dict(&self) -> Option<&AttrDict> {
        self.attr.as_ref()
    }

    pub fn set_attr_dict(&mut self, dict: AttrDict) {
        self.attr = Some(dict);
    }

    /// Bounding box of the current geometry. Holes are interior and never
    /// enlarge the box, so only the outer loop contributes.
    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        if let Some(outer) = self.loops.first() {
            mbr.add_geo_coords(outer);
        }
        mbr
    }

    /// Computes and caches the bounding box.
    pub fn init_geo_mbr(&mut self) {
        self.geo_mbr = self.calc_geo_mbr();
    }

    /// True if the coordinate lands inside the feature.
    ///
    /// Odd-even over the loop set: inside the outer loop, then flipped by
    /// each hole that also contains the point, so a point within a hole is
    /// not inside. Short-circuits on the cached bounding box, so
    /// `init_geo_mbr` must have run.
    pub fn point_inside(&self, coord: GeoCoord) -> bool {
        if !self.geo_mbr.contains(coord) {
            return false;
        }
        let mut inside = false;
        for l in &self.loops {
            if point_in_polygon(&coord, l) {
                inside = !inside;
            }
        }
        inside
    }

    /// Breaks every loop's edges down to the given maximum length, in
    /// place. Tolerance is in the same units as the coordinates.
    pub fn subdivide(&mut self, tolerance: f32) {
        for l in &mut self.loops {
            let mut out = VectorRing::with_capacity(l.len());
            subdivide_edges(l, &mut out, true, tolerance);
            *l = out;
        }
    }
}

impl Default for VectorAreal {
    fn default() -> Self {
        Self::new()
    }
}
