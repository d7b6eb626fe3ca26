use super::in_range;
use lux_math::{is_zero, MathResult, Point3, Ray, Vector3};

/// An infinite plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    point: Point3,
    normal: Vector3,
}

impl Plane {
    pub fn new(point: Point3, normal: Vector3) -> Self {
        Self {
            point,
            normal: normal.normalize(),
        }
    }

    /// Plane through three points. Fails if any two coincide or all three
    /// are collinear.
    pub fn from_points(p1: Point3, p2: Point3, p3: Point3) -> MathResult<Self> {
        let v1 = p1.subtract(p2)?;
        let v2 = p2.subtract(p3)?;
        Ok(Self::new(p1, v1.cross(v2)?))
    }

    pub fn point(&self) -> Point3 {
        self.point
    }

    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Ray parameter of the single crossing, if any.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Option<f64> {
        // Ray starting on the reference point lies in the plane
        let to_plane = self.point.subtract(ray.origin()).ok()?;

        let numerator = self.normal.dot(to_plane);
        if is_zero(numerator) {
            return None;
        }

        let denominator = self.normal.dot(ray.direction());
        if is_zero(denominator) {
            return None;
        }

        let t = numerator / denominator;
        in_range(t, max_distance).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_plane() -> Plane {
        Plane::new(Point3::new(0.0, 0.0, 1.0), Vector3::Z)
    }

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();

        let n = plane.normal();
        let k = 1.0 / 3f64.sqrt();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x().abs() - k).abs() < 1e-12);
        assert!((n.y().abs() - k).abs() < 1e-12);
        assert!((n.z().abs() - k).abs() < 1e-12);
    }

    #[test]
    fn test_plane_from_degenerate_points() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Plane::from_points(p, p, Point3::ZERO).is_err());
        assert!(Plane::from_points(
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(2.0, 2.0, 2.0),
            Point3::new(3.0, 3.0, 3.0),
        )
        .is_err());
    }

    #[test]
    fn test_ray_parallel_to_plane() {
        // Outside the plane
        let ray = Ray::new(Point3::new(0.0, 0.0, 2.0), Vector3::X);
        assert_eq!(xy_plane().intersect(&ray, f64::INFINITY), None);

        // Inside the plane
        let ray = Ray::new(Point3::new(1.0, 1.0, 1.0), Vector3::X);
        assert_eq!(xy_plane().intersect(&ray, f64::INFINITY), None);
    }

    #[test]
    fn test_ray_orthogonal_to_plane() {
        // Before the plane
        let ray = Ray::new(Point3::new(1.0, 1.0, -1.0), Vector3::Z);
        let t = xy_plane().intersect(&ray, f64::INFINITY).unwrap();
        assert_eq!(ray.at(t), Point3::new(1.0, 1.0, 1.0));

        // On the plane
        let ray = Ray::new(Point3::new(1.0, 1.0, 1.0), Vector3::Z);
        assert_eq!(xy_plane().intersect(&ray, f64::INFINITY), None);

        // After the plane
        let ray = Ray::new(Point3::new(1.0, 1.0, 2.0), Vector3::Z);
        assert_eq!(xy_plane().intersect(&ray, f64::INFINITY), None);
    }

    #[test]
    fn test_ray_oblique_to_plane() {
        let ray = Ray::new(Point3::ZERO, Vector3::new(1.0, 0.0, 1.0).unwrap());
        let t = xy_plane().intersect(&ray, f64::INFINITY).unwrap();
        let hit = ray.at(t);
        assert!((hit.x() - 1.0).abs() < 1e-9);
        assert!((hit.z() - 1.0).abs() < 1e-9);

        // Starting from the reference point itself
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::new(1.0, 0.0, 1.0).unwrap());
        assert_eq!(xy_plane().intersect(&ray, f64::INFINITY), None);
    }

    #[test]
    fn test_plane_max_distance() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -1.0), Vector3::Z);
        assert!(xy_plane().intersect(&ray, 2.0).is_some());
        assert!(xy_plane().intersect(&ray, 1.5).is_none());
    }
}
