//! Linear feature: a list of points forming a set of edges.

use serde::{Deserialize, Serialize};

use super::{AttrDict, ShapeId};
use crate::coord::{GeoMbr, VectorRing};
use crate::subdivide::subdivide_edges;

/// An open path of 2D edges.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorLinear {
    #[serde(skip, default = "ShapeId::fresh")]
    id: ShapeId,
    #[serde(skip)]
    attr: Option<AttrDict>,
    /// Cached bounding box; call `init_geo_mbr` after editing `pts`.
    pub geo_mbr: GeoMbr,
    /// The path. Order defines the edges.
    pub pts: VectorRing,
}

impl VectorLinear {
    /// Creation function. New shapes start empty.
    pub fn new() -> Self {
        VectorLinear {
            id: ShapeId::fresh(),
            attr: None,
            geo_mbr: GeoMbr::new(),
            pts: VectorRing::new(),
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

    /// Bounding box of the current geometry.
    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        mbr.add_geo_coords(&self.pts);
        mbr
    }

    /// Computes and caches the bounding box.
    pub fn init_geo_mbr(&mut self) {
        self.geo_mbr = self.calc_geo_mbr();
    }

    /// Breaks the path's edges down to the given maximum length, in place.
    /// Tolerance is in the same units as the coordinates.
    pub fn subdivide(&mut self, tolerance: f32) {
        let mut out = VectorRing::with_capacity(self.pts.len());
        subdivide_edges(&self.pts, &mut out, false, tolerance);
        self.pts = out;
    }
}

impl Default for VectorLinear {
    fn default() -> Self {
        Self::new()
    }
}
