//! Linear feature with elevation.

use serde::{Deserialize, Serialize};

use super::{AttrDict, ShapeId};
use crate::coord::{GeoMbr, Point2d, VectorRing3d};

/// An open path of 3D edges; x and y are geographic, z is elevation.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorLinear3d {
    #[serde(skip, default = "ShapeId::fresh")]
    id: ShapeId,
    #[serde(skip)]
    attr: Option<AttrDict>,
    /// Cached bounding box; call `init_geo_mbr` after editing `pts`.
    pub geo_mbr: GeoMbr,
    /// The path. Order defines the edges.
    pub pts: VectorRing3d,
}

impl VectorLinear3d {
    /// Creation function. New shapes start empty.
    pub fn new() -> Self {
        VectorLinear3d {
            id: ShapeId::fresh(),
            attr: None,
            geo_mbr: GeoMbr::new(),
            pts: VectorRing3d::new(),
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

    /// Bounding box of the current geometry. Elevation does not
    /// participate; only the geographic footprint does.
    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        for p in &self.pts {
            mbr.add_point(Point2d::new(p.x, p.y));
        }
        mbr
    }

    /// Computes and caches the bounding box.
    pub fn init_geo_mbr(&mut self) {
        self.geo_mbr = self.calc_geo_mbr();
    }
}

impl Default for VectorLinear3d {
    fn default() -> Self {
        Self::new()
    }
}
