use super::{in_range, BOX_PADDING};
use lux_math::{align_zero, is_zero, Aabb, MathResult, Point3, Ray, Vector3};

/// An infinite tube of `radius` around an axis ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    axis: Ray,
    radius: f64,
}

impl Tube {
    pub fn new(axis: Ray, radius: f64) -> Self {
        Self { axis, radius }
    }

    pub fn axis(&self) -> &Ray {
        &self.axis
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Ray parameters of the side crossings, nearest first.
    ///
    /// Solves `a t² + b t + c = 0` on the components of the ray
    /// perpendicular to the axis. A ray parallel to the axis never crosses
    /// the side; a tangent ray crosses once.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<f64> {
        self.side_roots(ray)
            .into_iter()
            .filter(|&t| in_range(t, max_distance))
            .collect()
    }

    fn side_roots(&self, ray: &Ray) -> Vec<f64> {
        let v = ray.direction().as_dvec3();
        let va = self.axis.direction().as_dvec3();
        let dp = ray.origin().as_dvec3() - self.axis.origin().as_dvec3();

        let v_va = v.dot(va);
        let dp_va = dp.dot(va);

        let a = v.length_squared() - v_va * v_va;
        if is_zero(a) {
            return Vec::new();
        }
        let b = 2.0 * (v.dot(dp) - v_va * dp_va);
        let c = dp.length_squared() - dp_va * dp_va - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if is_zero(discriminant) {
            return vec![-b / (2.0 * a)];
        }
        if discriminant < 0.0 {
            return Vec::new();
        }

        let root = discriminant.sqrt();
        let (t1, t2) = ((-b - root) / (2.0 * a), (-b + root) / (2.0 * a));
        vec![t1.min(t2), t1.max(t2)]
    }

    /// Signed distance of `point` along the axis from the axis origin.
    fn axial_offset(&self, point: Point3) -> f64 {
        let offset = point.as_dvec3() - self.axis.origin().as_dvec3();
        self.axis.direction().as_dvec3().dot(offset)
    }

    /// Direction from the nearest axis point to `point`.
    pub fn normal_at(&self, point: Point3) -> MathResult<Vector3> {
        let t = self.axial_offset(point);
        let on_axis = self.axis.at(t);
        Ok(Vector3::try_from_dvec3(point.as_dvec3() - on_axis.as_dvec3())?.normalize())
    }
}

/// A tube clipped to `[0, height]` along its axis. Open at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    tube: Tube,
    height: f64,
}

impl Cylinder {
    pub fn new(axis: Ray, radius: f64, height: f64) -> Self {
        Self {
            tube: Tube::new(axis, radius),
            height,
        }
    }

    pub fn tube(&self) -> &Tube {
        &self.tube
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<f64> {
        self.tube
            .side_roots(ray)
            .into_iter()
            .filter(|&t| in_range(t, max_distance))
            .filter(|&t| {
                let h = self.tube.axial_offset(ray.at(t));
                align_zero(h) >= 0.0 && align_zero(h - self.height) <= 0.0
            })
            .collect()
    }

    pub fn normal_at(&self, point: Point3) -> MathResult<Vector3> {
        self.tube.normal_at(point)
    }

    /// Box around both end discs.
    pub fn bounding_box(&self) -> Aabb {
        let base = self.tube.axis.origin();
        let top = self.tube.axis.at(self.height);
        let r = self.tube.radius.abs() + BOX_PADDING;
        Aabb::from_points(
            Point3::from_dvec3(base.min(top).as_dvec3() - r),
            Point3::from_dvec3(base.max(top).as_dvec3() + r),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z_axis() -> Ray {
        Ray::new(Point3::ZERO, Vector3::Z)
    }

    #[test]
    fn test_tube_normal() {
        let tube = Tube::new(z_axis(), 1.0);
        assert_eq!(tube.normal_at(Point3::new(0.0, 1.0, 1.0)).unwrap(), Vector3::Y);

        // Level with the axis origin
        assert_eq!(tube.normal_at(Point3::new(1.0, 0.0, 0.0)).unwrap(), Vector3::X);

        // On the axis there is no normal
        assert!(tube.normal_at(Point3::new(0.0, 0.0, 5.0)).is_err());
    }

    #[test]
    fn test_ray_crosses_tube() {
        let tube = Tube::new(z_axis(), 1.0);
        let ray = Ray::new(Point3::new(-3.0, 0.0, 7.0), Vector3::X);
        let ts = tube.intersect(&ray, f64::INFINITY);
        assert_eq!(ts.len(), 2);
        assert!((ts[0] - 2.0).abs() < 1e-9);
        assert!((ts[1] - 4.0).abs() < 1e-9);

        // Clipped by the distance limit
        assert_eq!(tube.intersect(&ray, 3.0).len(), 1);
    }

    #[test]
    fn test_ray_inside_tube() {
        let tube = Tube::new(z_axis(), 1.0);
        let ray = Ray::new(Point3::ZERO, Vector3::new(1.0, 0.0, 1.0).unwrap());
        let ts = tube.intersect(&ray, f64::INFINITY);
        assert_eq!(ts.len(), 1);
        let hit = ray.at(ts[0]);
        assert!((hit.x() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ray_parallel_to_tube() {
        let tube = Tube::new(z_axis(), 1.0);
        let ray = Ray::new(Point3::new(0.5, 0.0, 0.0), Vector3::Z);
        assert!(tube.intersect(&ray, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_ray_tangent_to_tube() {
        let tube = Tube::new(z_axis(), 1.0);
        let ray = Ray::new(Point3::new(-2.0, 1.0, 0.0), Vector3::X);
        let ts = tube.intersect(&ray, f64::INFINITY);
        assert_eq!(ts.len(), 1);
        assert!((ts[0] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_ray_misses_tube() {
        let tube = Tube::new(z_axis(), 1.0);
        let ray = Ray::new(Point3::new(-2.0, 2.0, 0.0), Vector3::X);
        assert!(tube.intersect(&ray, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_cylinder_clips_axially() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0);

        let within = Ray::new(Point3::new(-3.0, 0.0, 1.0), Vector3::X);
        assert_eq!(cylinder.intersect(&within, f64::INFINITY).len(), 2);

        let above = Ray::new(Point3::new(-3.0, 0.0, 3.0), Vector3::X);
        assert!(cylinder.intersect(&above, f64::INFINITY).is_empty());

        let below = Ray::new(Point3::new(-3.0, 0.0, -0.5), Vector3::X);
        assert!(cylinder.intersect(&below, f64::INFINITY).is_empty());
    }

    #[test]
    fn test_cylinder_slanted_ray_hits_one_side() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0);
        // Enters the side at z = 1 and leaves through the open top
        let ray = Ray::new(Point3::new(-2.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 1.0).unwrap());
        let ts = cylinder.intersect(&ray, f64::INFINITY);
        assert_eq!(ts.len(), 1);
        let hit = ray.at(ts[0]);
        assert!((hit.x() + 1.0).abs() < 1e-9);
        assert!((hit.z() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cylinder_bounding_box() {
        let cylinder = Cylinder::new(z_axis(), 1.0, 2.0);
        let bbox = cylinder.bounding_box();
        assert!(bbox.z.contains(0.0) && bbox.z.contains(2.0));
        assert!(bbox.x.contains(-1.0) && bbox.x.contains(1.0));
        assert!(!bbox.z.contains(3.5));
    }
}
