use crate::{MathResult, Vector3};
use glam::DVec3;
use std::ops::{Add, Sub};

/// A location in 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point3(DVec3);

impl Point3 {
    pub const ZERO: Point3 = Point3(DVec3::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    pub const fn from_dvec3(v: DVec3) -> Self {
        Self(v)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// Coordinate along axis `n` (0=X, 1=Y, 2=Z).
    #[inline]
    pub fn axis(&self, n: usize) -> f64 {
        self.0[n]
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// Vector from `other` to `self`.
    ///
    /// Fails with `ZeroVector` when both points coincide.
    pub fn subtract(&self, other: Point3) -> MathResult<Vector3> {
        Vector3::try_from_dvec3(self.0 - other.0)
    }

    /// `self + direction * t`, infallible even for `t == 0`.
    #[inline]
    pub fn offset(&self, direction: Vector3, t: f64) -> Point3 {
        Point3(self.0 + direction.as_dvec3() * t)
    }

    pub fn distance_squared(&self, other: Point3) -> f64 {
        self.0.distance_squared(other.0)
    }

    pub fn distance(&self, other: Point3) -> f64 {
        self.0.distance(other.0)
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Point3) -> Point3 {
        Point3(self.0.min(other.0))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Point3) -> Point3 {
        Point3(self.0.max(other.0))
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, v: Vector3) -> Point3 {
        Point3(self.0 + v.as_dvec3())
    }
}

impl Sub<Vector3> for Point3 {
    type Output = Point3;

    fn sub(self, v: Vector3) -> Point3 {
        Point3(self.0 - v.as_dvec3())
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(xyz: [f64; 3]) -> Self {
        Point3(DVec3::from_array(xyz))
    }
}
