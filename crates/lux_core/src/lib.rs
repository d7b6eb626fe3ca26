//! Lux Core - geometry, lights and scene description.
//!
//! This crate provides:
//!
//! - **Geometric primitives**: `Sphere`, `Plane`, `Polygon`, `Triangle`,
//!   `Tube` and `Cylinder`, wrapped in a `Geometry` with emission and material
//! - **Intersection**: the `Intersectable` trait returning `GeoPoint` hit records
//! - **Culling**: per-primitive bounding boxes and the `Geometries` container
//! - **Lighting**: ambient, directional, point and spot lights
//! - **Scene**: read-only scene built once with `SceneBuilder`
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{Geometry, Material, PointLight, SceneBuilder, Sphere};
//! use lux_math::{Color, Point3};
//!
//! let scene = SceneBuilder::new("single sphere")
//!     .add_geometry(
//!         Geometry::new(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0))
//!             .with_material(Material::new().with_kd(1.0)),
//!     )
//!     .add_light(PointLight::new(Color::WHITE, Point3::ZERO))
//!     .build();
//! ```

pub mod geometries;
pub mod geometry;
pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use geometries::Geometries;
pub use geometry::{
    closest_hit, Cylinder, GeoPoint, Geometry, GeometryError, Intersectable, Plane, Polygon,
    Shape, Sphere, Triangle, Tube,
};
pub use light::{AmbientLight, DirectionalLight, LightSource, PointLight, SpotLight};
pub use material::Material;
pub use scene::{Scene, SceneBuilder};
