//! Precision constants for geometric comparisons.
//!
//! Display-space tolerances assume a unit-radius globe; geographic
//! tolerances are in radians.

/// Two display-space positions within this distance are coincident.
pub const CONFUSION: f64 = 1.0e-7;

/// Square of CONFUSION for squared-distance comparisons.
pub const SQUARE_CONFUSION: f64 = CONFUSION * CONFUSION;

/// Determinant magnitude below which a ray is treated as parallel to a
/// triangle's plane.
pub const RAY_PARALLEL: f64 = 1.0e-10;

/// Signed loop area magnitude below which the area-weighted centroid is
/// undefined and callers must fall back to the center of mass.
pub const DEGENERATE_AREA: f64 = 1.0e-12;

/// Squared display-space length below which a vector cannot be normalized.
pub const SQUARE_RESOLUTION: f64 = 1.0e-16;

/// Hard ceiling on recursive edge bisection. A segment that still exceeds
/// its deviation bound at this depth is accepted as-is.
pub const SUBDIVISION_DEPTH_LIMIT: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(CONFUSION, 1.0e-7);
        assert_eq!(SQUARE_CONFUSION, CONFUSION * CONFUSION);
        assert!(RAY_PARALLEL < CONFUSION);
        assert!(SUBDIVISION_DEPTH_LIMIT >= 8);
    }
}
