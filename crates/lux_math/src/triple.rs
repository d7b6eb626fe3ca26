use glam::DVec3;
use std::ops::Mul;

/// Three scalar coefficients, one per color channel.
///
/// Used for material coefficients (kD, kS, kT, kR) and for the attenuation
/// factor accumulated along a recursive ray path.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Triple(DVec3);

impl Triple {
    pub const ZERO: Triple = Triple(DVec3::ZERO);
    pub const ONE: Triple = Triple(DVec3::ONE);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    /// Broadcast a scalar to all three channels.
    pub const fn splat(value: f64) -> Self {
        Self(DVec3::splat(value))
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// True when every channel is strictly below `threshold`.
    pub fn all_below(&self, threshold: f64) -> bool {
        self.0.x < threshold && self.0.y < threshold && self.0.z < threshold
    }
}

impl Mul for Triple {
    type Output = Triple;

    fn mul(self, rhs: Triple) -> Triple {
        Triple(self.0 * rhs.0)
    }
}

impl Mul<f64> for Triple {
    type Output = Triple;

    fn mul(self, rhs: f64) -> Triple {
        Triple(self.0 * rhs)
    }
}

impl From<f64> for Triple {
    fn from(value: f64) -> Self {
        Triple::splat(value)
    }
}

impl From<[f64; 3]> for Triple {
    fn from(rgb: [f64; 3]) -> Self {
        Triple(DVec3::from_array(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_product() {
        let a = Triple::new(0.5, 1.0, 0.0);
        let b = Triple::splat(0.5);
        assert_eq!(a * b, Triple::new(0.25, 0.5, 0.0));
        assert_eq!(a * 2.0, Triple::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_all_below() {
        assert!(Triple::ZERO.all_below(0.001));
        assert!(!Triple::new(0.0, 0.0, 0.5).all_below(0.001));
        // Equal to the threshold is not below it
        assert!(!Triple::splat(0.001).all_below(0.001));
    }

    #[test]
    fn test_scalar_broadcast() {
        assert_eq!(Triple::from(0.3), Triple::new(0.3, 0.3, 0.3));
    }
}
