//! Triangle mesh feature.

use serde::{Deserialize, Serialize};

use super::{AttrDict, ShapeId};
use crate::contain::point_in_polygon;
use crate::coord::{GeoCoord, GeoMbr, Point2f, Point3f, VectorRing};

/// Simple triangle referencing three shared vertices by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub pts: [usize; 3],
}

/// A collection of triangles forming a mesh over a shared vertex array.
/// Triangles may share vertices; x and y of each vertex are geographic,
/// z is elevation.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorTriangles {
    #[serde(skip, default = "ShapeId::fresh")]
    id: ShapeId,
    #[serde(skip)]
    attr: Option<AttrDict>,
    /// Cached bounding box; call `init_geo_mbr` after editing the mesh.
    pub geo_mbr: GeoMbr,
    /// Shared vertices.
    pub pts: Vec<Point3f>,
    /// Index triples into `pts`.
    pub tris: Vec<Triangle>,
}

impl VectorTriangles {
    /// Creation function. New shapes start empty.
    pub fn new() -> Self {
        VectorTriangles {
            id: ShapeId::fresh(),
            attr: None,
            geo_mbr: GeoMbr::new(),
            pts: Vec::new(),
            tris: Vec::new(),
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

    /// Bounding box of the current geometry. Every vertex referenced by a
    /// triangle contributes; unreferenced vertices do not.
    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        for tri in &self.tris {
            for &vi in &tri.pts {
                if let Some(p) = self.pts.get(vi) {
                    mbr.add_geo_coord(GeoCoord::new(p.x, p.y));
                }
            }
        }
        mbr
    }

    /// Computes and caches the bounding box.
    pub fn init_geo_mbr(&mut self) {
        self.geo_mbr = self.calc_geo_mbr();
    }

    /// Returns the given triangle as a 3-point ring (geographic footprint),
    /// or None when the index or any vertex reference is out of range.
    pub fn triangle(&self, which: usize) -> Option<VectorRing> {
        let tri = self.tris.get(which)?;
        let mut ring = VectorRing::with_capacity(3);
        for &vi in &tri.pts {
            let p = self.pts.get(vi)?;
            ring.push(Point2f::new(p.x, p.y));
        }
        Some(ring)
    }

    /// True if the coordinate lands inside any of the triangles, each
    /// treated as a flat facet. Short-circuits on the cached bounding box,
    /// so `init_geo_mbr` must have run.
    pub fn point_inside(&self, coord: GeoCoord) -> bool {
        if !self.geo_mbr.contains(coord) {
            return false;
        }
        for which in 0..self.tris.len() {
            if let Some(ring) = self.triangle(which) {
                if point_in_polygon(&coord, &ring) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for VectorTriangles {
    fn default() -> Self {
        Self::new()
    }
}
