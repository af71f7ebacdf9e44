//! Points feature.

use serde::{Deserialize, Serialize};

use super::{AttrDict, ShapeId};
use crate::coord::{GeoMbr, VectorRing};

/// A list of points that share attributes and are otherwise unrelated.
/// In most cases there is one point, but be prepared for several.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorPoints {
    #[serde(skip, default = "ShapeId::fresh")]
    id: ShapeId,
    #[serde(skip)]
    attr: Option<AttrDict>,
    /// Cached bounding box; call `init_geo_mbr` after editing `pts`.
    pub geo_mbr: GeoMbr,
    /// The points. Order carries no meaning for this variant.
    pub pts: VectorRing,
}

impl VectorPoints {
    /// Creation function. New shapes start empty.
    pub fn new() -> Self {
        VectorPoints {
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
}

impl Default for VectorPoints {
    fn default() -> Self {
        Self::new()
    }
}
