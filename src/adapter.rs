//! Surface/projection oracle.
//!
//! Subdivision needs to know where a geographic coordinate really sits on
//! the display surface. That mapping belongs to the rendering side, so the
//! kernel only sees it through [`DisplayAdapter`].

use crate::coord::{Point2d, Point3d};

/// Maps geographic coordinates to display-space positions.
///
/// Implementations must be pure functions of their input; the convergence
/// argument for adaptive subdivision depends on it. Non-flat adapters are
/// expected to place points on the unit sphere.
pub trait DisplayAdapter {
    /// Display-space position of a geographic coordinate (radians).
    fn display_point(&self, geo: &Point2d) -> Point3d;

    /// Elevation-aware variant. The default ignores z.
    fn display_point3(&self, geo: &Point3d) -> Point3d {
        self.display_point(&Point2d::new(geo.x, geo.y))
    }

    /// True when the display surface is a plane rather than a globe.
    fn is_flat(&self) -> bool {
        false
    }
}

/// Geocentric unit-sphere globe.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitSphereAdapter;

impl DisplayAdapter for UnitSphereAdapter {
    fn display_point(&self, geo: &Point2d) -> Point3d {
        let (sin_lon, cos_lon) = geo.x.sin_cos();
        let (sin_lat, cos_lat) = geo.y.sin_cos();
        Point3d::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    fn display_point3(&self, geo: &Point3d) -> Point3d {
        let on_sphere = self.display_point(&Point2d::new(geo.x, geo.y));
        Point3d::from(on_sphere.coords * (1.0 + geo.z))
    }
}

/// Flat map: longitude and latitude land directly on the XY plane.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaneAdapter;

impl DisplayAdapter for PlaneAdapter {
    fn display_point(&self, geo: &Point2d) -> Point3d {
        Point3d::new(geo.x, geo.y, 0.0)
    }

    fn display_point3(&self, geo: &Point3d) -> Point3d {
        *geo
    }

    fn is_flat(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_unit_sphere_poles_and_equator() {
        let adapter = UnitSphereAdapter;
        let north = adapter.display_point(&Point2d::new(0.0, FRAC_PI_2));
        assert_relative_eq!(north.z, 1.0, epsilon = 1e-12);

        let greenwich = adapter.display_point(&Point2d::new(0.0, 0.0));
        assert_relative_eq!(greenwich.x, 1.0, epsilon = 1e-12);

        // Every output sits on the sphere.
        let p = adapter.display_point(&Point2d::new(1.1, -0.4));
        assert_relative_eq!(p.coords.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_sphere_elevation() {
        let adapter = UnitSphereAdapter;
        let lifted = adapter.display_point3(&Point3d::new(0.3, 0.2, 0.5));
        assert_relative_eq!(lifted.coords.norm(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_plane_is_identity() {
        let adapter = PlaneAdapter;
        assert!(adapter.is_flat());
        let p = adapter.display_point(&Point2d::new(0.25, -0.5));
        assert_eq!(p, Point3d::new(0.25, -0.5, 0.0));
    }
}
