//! Non-zero direction vectors.

use glam::DVec3;
use thiserror::Error;

/// Errors raised by the numeric primitives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("zero vector is not allowed")]
    ZeroVector,
}

/// Result type for vector operations.
pub type MathResult<T> = Result<T, MathError>;

/// A 3D vector that is never all-zero.
///
/// Every operation that could produce the zero vector (construction,
/// subtraction, scaling by zero, cross product of parallel vectors) returns
/// [`MathError::ZeroVector`] instead, so `normalize` can never fail.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector3(DVec3);

impl Vector3 {
    pub const X: Vector3 = Vector3(DVec3::X);
    pub const Y: Vector3 = Vector3(DVec3::Y);
    pub const Z: Vector3 = Vector3(DVec3::Z);
    pub const NEG_X: Vector3 = Vector3(DVec3::NEG_X);
    pub const NEG_Y: Vector3 = Vector3(DVec3::NEG_Y);
    pub const NEG_Z: Vector3 = Vector3(DVec3::NEG_Z);

    /// Create a vector, failing on `(0, 0, 0)`.
    pub fn new(x: f64, y: f64, z: f64) -> MathResult<Self> {
        Self::try_from_dvec3(DVec3::new(x, y, z))
    }

    /// Wrap a raw glam vector, failing if it is zero.
    pub fn try_from_dvec3(v: DVec3) -> MathResult<Self> {
        if v == DVec3::ZERO {
            Err(MathError::ZeroVector)
        } else {
            Ok(Self(v))
        }
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

    /// Component along axis `n` (0=X, 1=Y, 2=Z).
    #[inline]
    pub fn axis(&self, n: usize) -> f64 {
        self.0[n]
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    #[inline]
    pub fn dot(&self, other: Vector3) -> f64 {
        self.0.dot(other.0)
    }

    pub fn cross(&self, other: Vector3) -> MathResult<Vector3> {
        Self::try_from_dvec3(self.0.cross(other.0))
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Unit vector in the same direction.
    pub fn normalize(&self) -> Vector3 {
        Self(self.0 / self.0.length())
    }

    pub fn add(&self, other: Vector3) -> MathResult<Vector3> {
        Self::try_from_dvec3(self.0 + other.0)
    }

    pub fn subtract(&self, other: Vector3) -> MathResult<Vector3> {
        Self::try_from_dvec3(self.0 - other.0)
    }

    pub fn scale(&self, factor: f64) -> MathResult<Vector3> {
        Self::try_from_dvec3(self.0 * factor)
    }

    /// Rotate around the unit vector `axis` by `angle` radians (Rodrigues).
    ///
    /// `v' = v cos θ + (k × v) sin θ + k (k · v)(1 - cos θ)`
    pub fn rotate_around(&self, axis: Vector3, angle: f64) -> MathResult<Vector3> {
        let k = axis.normalize().0;
        let (sin, cos) = angle.sin_cos();
        let rotated = self.0 * cos + k.cross(self.0) * sin + k * k.dot(self.0) * (1.0 - cos);
        Self::try_from_dvec3(rotated)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3(-self.0)
    }
}

impl TryFrom<DVec3> for Vector3 {
    type Error = MathError;

    fn try_from(v: DVec3) -> MathResult<Self> {
        Self::try_from_dvec3(v)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> DVec3 {
        v.0
    }
}
