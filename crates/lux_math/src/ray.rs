use crate::{Point3, Vector3};

/// How far a secondary ray's origin is pushed off the surface it starts on.
pub const DELTA: f64 = 0.1;

/// A half-line in 3D space: `origin + t * direction` for `t >= 0`.
///
/// The direction is always unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vector3,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Create a ray leaving a surface with the given normal.
    ///
    /// The origin is moved by [`DELTA`] along `normal`, towards the side the
    /// direction points to, so the ray cannot hit the surface it starts on.
    pub fn offset(point: Point3, direction: Vector3, normal: Vector3) -> Self {
        let delta = if direction.dot(normal) >= 0.0 { DELTA } else { -DELTA };
        Self::new(point.offset(normal, delta), direction)
    }

    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin.offset(self.direction, t)
    }

    /// The point nearest to the ray origin, if any.
    pub fn closest_point(&self, points: &[Point3]) -> Option<Point3> {
        points.iter().copied().min_by(|a, b| {
            self.origin
                .distance_squared(*a)
                .total_cmp(&self.origin.distance_squared(*b))
        })
    }
}
