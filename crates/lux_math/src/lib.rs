//! Lux math - numeric primitives for the ray tracer.
//!
//! Points, non-zero vectors, color and coefficient triples, rays and
//! axis-aligned bounding boxes. Everything is `f64` and backed by glam's
//! `DVec3`.

// Re-export glam for convenience
pub use glam::{DVec2, DVec3};

mod aabb;
mod color;
mod interval;
mod point;
mod ray;
mod triple;
mod util;
mod vector;

pub use aabb::Aabb;
pub use color::Color;
pub use interval::Interval;
pub use point::Point3;
pub use ray::{Ray, DELTA};
pub use triple::Triple;
pub use util::{align_zero, is_zero, EPSILON};
pub use vector::{MathError, MathResult, Vector3};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_vector_round_trip() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(4.0, 6.0, 3.0);
        let v = b.subtract(a).unwrap();
        assert_eq!(a + v, b);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_zero_vector_rejected_everywhere() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(p.subtract(p), Err(MathError::ZeroVector));
        assert_eq!(Vector3::new(0.0, 0.0, 0.0), Err(MathError::ZeroVector));
        assert_eq!(Vector3::X.cross(Vector3::X), Err(MathError::ZeroVector));
    }
}
