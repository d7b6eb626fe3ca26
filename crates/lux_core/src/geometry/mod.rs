//! Geometric primitives and the ray intersection contract.
//!
//! The primitive set is closed: [`Shape`] is an enum over every supported
//! surface and is dispatched with `match`. A [`Geometry`] pairs a shape with
//! its emission color and [`Material`]. Anything that can answer a ray query
//! (a single geometry or a container of them) implements [`Intersectable`].

mod plane;
mod polygon;
mod sphere;
mod tube;

pub use plane::Plane;
pub use polygon::{Polygon, Triangle};
pub use sphere::Sphere;
pub use tube::{Cylinder, Tube};

use crate::Material;
use lux_math::{align_zero, Aabb, Color, MathError, MathResult, Point3, Ray, Vector3};
use std::fmt::Debug;
use thiserror::Error;

/// Errors raised while constructing geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Degenerate geometry: {0}")]
    Math(#[from] MathError),
}

/// Record of a ray-geometry intersection: which geometry, and where.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint<'a> {
    pub geometry: &'a Geometry,
    pub point: Point3,
}

impl PartialEq for GeoPoint<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.geometry, other.geometry) && self.point == other.point
    }
}

/// Trait for objects that can be hit by rays.
pub trait Intersectable: Send + Sync + Debug {
    /// All intersections with `0 < t <= max_distance`.
    ///
    /// Order follows the object's own structure, not distance.
    fn intersect<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>>;

    /// Axis-aligned bounds, or `None` for unbounded objects (never culled).
    fn bounding_box(&self) -> Option<Aabb>;

    /// All intersections along the whole ray.
    fn find_intersections<'a>(&'a self, ray: &Ray) -> Vec<GeoPoint<'a>> {
        self.intersect(ray, f64::INFINITY)
    }

    /// The intersection nearest to the ray origin.
    fn find_closest<'a>(&'a self, ray: &Ray) -> Option<GeoPoint<'a>> {
        closest_hit(ray, self.find_intersections(ray))
    }
}

/// Pick the hit closest to the ray origin.
pub fn closest_hit<'a, I>(ray: &Ray, hits: I) -> Option<GeoPoint<'a>>
where
    I: IntoIterator<Item = GeoPoint<'a>>,
{
    let origin = ray.origin();
    hits.into_iter().min_by(|a, b| {
        origin
            .distance_squared(a.point)
            .total_cmp(&origin.distance_squared(b.point))
    })
}

/// Accept a ray parameter strictly in front of the origin and within range.
#[inline]
pub(crate) fn in_range(t: f64, max_distance: f64) -> bool {
    align_zero(t) > 0.0 && align_zero(t - max_distance) <= 0.0
}

/// Padding applied to primitive bounding boxes so culling never rejects a
/// hit that round-off places on the box surface.
pub(crate) const BOX_PADDING: f64 = 0.0001;

/// The closed set of supported surfaces.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
    Polygon(Polygon),
    Tube(Tube),
    Cylinder(Cylinder),
}

impl Shape {
    /// Ray parameters of every hit in `(0, max_distance]`.
    pub fn intersect(&self, ray: &Ray, max_distance: f64) -> Vec<f64> {
        match self {
            Shape::Sphere(s) => s.intersect(ray, max_distance),
            Shape::Plane(p) => p.intersect(ray, max_distance).into_iter().collect(),
            Shape::Triangle(t) => t.intersect(ray, max_distance).into_iter().collect(),
            Shape::Polygon(p) => p.intersect(ray, max_distance).into_iter().collect(),
            Shape::Tube(t) => t.intersect(ray, max_distance),
            Shape::Cylinder(c) => c.intersect(ray, max_distance),
        }
    }

    /// Unit surface normal at a point on the surface.
    pub fn normal_at(&self, point: Point3) -> MathResult<Vector3> {
        match self {
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Plane(p) => Ok(p.normal()),
            Shape::Triangle(t) => Ok(t.normal()),
            Shape::Polygon(p) => Ok(p.normal()),
            Shape::Tube(t) => t.normal_at(point),
            Shape::Cylinder(c) => c.normal_at(point),
        }
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        match self {
            Shape::Sphere(s) => Some(s.bounding_box()),
            Shape::Plane(_) | Shape::Tube(_) => None,
            Shape::Triangle(t) => Some(t.bounding_box()),
            Shape::Polygon(p) => Some(p.bounding_box()),
            Shape::Cylinder(c) => Some(c.bounding_box()),
        }
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Shape {
                fn from(shape: $variant) -> Self {
                    Shape::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape!(Sphere, Plane, Triangle, Polygon, Tube, Cylinder);

/// A shape with its emission color and material. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    shape: Shape,
    emission: Color,
    material: Material,
}

impl Geometry {
    /// Create a non-emissive geometry with the default material.
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            emission: Color::BLACK,
            material: Material::default(),
        }
    }

    pub fn with_emission(mut self, emission: Color) -> Self {
        self.emission = emission;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn emission(&self) -> Color {
        self.emission
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn normal_at(&self, point: Point3) -> MathResult<Vector3> {
        self.shape.normal_at(point)
    }
}

impl Intersectable for Geometry {
    fn intersect<'a>(&'a self, ray: &Ray, max_distance: f64) -> Vec<GeoPoint<'a>> {
        self.shape
            .intersect(ray, max_distance)
            .into_iter()
            .map(|t| GeoPoint {
                geometry: self,
                point: ray.at(t),
            })
            .collect()
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.shape.bounding_box()
    }
}
