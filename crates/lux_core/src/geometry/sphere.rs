use super::{in_range, BOX_PADDING};
use lux_math::{align_zero, Aabb, MathResult, Point3, Ray, Vector3};

/// A sphere defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Ray parameters of the crossings, nearest first.
    ///
    /// A tangent ray touches the sphere at a single point and is reported
    /// as a miss.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<f64> {
        let Ok(u) = self.center.subtract(ray.origin()) else {
            // Origin at the center: exactly one forward crossing
            return if in_range(self.radius, max_distance) {
                vec![self.radius]
            } else {
                Vec::new()
            };
        };

        let tm = ray.direction().dot(u);
        let d_squared = (u.length_squared() - tm * tm).max(0.0);
        let d = d_squared.sqrt();
        if align_zero(d - self.radius) >= 0.0 {
            return Vec::new();
        }

        let th = (self.radius * self.radius - d_squared).sqrt();
        [tm - th, tm + th]
            .into_iter()
            .filter(|&t| in_range(t, max_distance))
            .collect()
    }

    pub fn normal_at(&self, point: Point3) -> MathResult<Vector3> {
        Ok(point.subtract(self.center)?.normalize())
    }

    pub fn bounding_box(&self) -> Aabb {
        let r = self.radius.abs() + BOX_PADDING;
        let c = self.center.as_dvec3();
        Aabb::from_points(Point3::from_dvec3(c - r), Point3::from_dvec3(c + r))
    }
}
