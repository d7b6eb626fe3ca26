//! Read-only scene description.
//!
//! A [`Scene`] is assembled once with [`SceneBuilder`] and then shared
//! immutably by every render thread.

use crate::{AmbientLight, Geometries, Intersectable, LightSource};
use lux_math::Color;

/// Everything a tracer needs to shade a ray.
#[derive(Debug)]
pub struct Scene {
    name: String,
    background: Color,
    ambient_light: AmbientLight,
    geometries: Geometries,
    lights: Vec<Box<dyn LightSource>>,
}

impl Scene {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color returned for rays that hit nothing.
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient_light
    }

    pub fn geometries(&self) -> &Geometries {
        &self.geometries
    }

    pub fn lights(&self) -> &[Box<dyn LightSource>] {
        &self.lights
    }
}

/// Builder for [`Scene`].
#[derive(Debug)]
pub struct SceneBuilder {
    name: String,
    background: Color,
    ambient_light: AmbientLight,
    geometries: Geometries,
    lights: Vec<Box<dyn LightSource>>,
    hierarchy: bool,
}

impl SceneBuilder {
    /// Start an empty scene with a black background and no ambient light.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Color::BLACK,
            ambient_light: AmbientLight::NONE,
            geometries: Geometries::new(),
            lights: Vec::new(),
            hierarchy: false,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_ambient_light(mut self, ambient_light: AmbientLight) -> Self {
        self.ambient_light = ambient_light;
        self
    }

    /// Replace the whole geometry container.
    pub fn with_geometries(mut self, geometries: Geometries) -> Self {
        self.geometries = geometries;
        self
    }

    pub fn add_geometry(mut self, geometry: impl Intersectable + 'static) -> Self {
        self.geometries.add(geometry);
        self
    }

    pub fn add_light(mut self, light: impl LightSource + 'static) -> Self {
        self.lights.push(Box::new(light));
        self
    }

    /// Group bounded geometry into a hierarchy when the scene is built.
    pub fn with_hierarchy(mut self, hierarchy: bool) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    pub fn build(self) -> Scene {
        let geometries = if self.hierarchy {
            self.geometries.into_hierarchy()
        } else {
            self.geometries
        };

        log::debug!(
            "Built scene '{}': {} top-level geometries, {} lights",
            self.name,
            geometries.len(),
            self.lights.len()
        );

        Scene {
            name: self.name,
            background: self.background,
            ambient_light: self.ambient_light,
            geometries,
            lights: self.lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Geometry, PointLight, Sphere};
    use lux_math::{Point3, Ray, Vector3};

    #[test]
    fn test_empty_scene_defaults() {
        let scene = SceneBuilder::new("empty").build();
        assert_eq!(scene.name(), "empty");
        assert_eq!(scene.background(), Color::BLACK);
        assert_eq!(scene.ambient_light().intensity(), Color::BLACK);
        assert!(scene.geometries().is_empty());
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn test_scene_builder() {
        let scene = SceneBuilder::new("sphere")
            .with_background(Color::new(0.1, 0.1, 0.1))
            .with_ambient_light(AmbientLight::new(Color::WHITE, 0.1))
            .add_geometry(Geometry::new(Sphere::new(Point3::new(0.0, 0.0, -3.0), 1.0)))
            .add_light(PointLight::new(Color::WHITE, Point3::ZERO))
            .build();

        assert_eq!(scene.background(), Color::new(0.1, 0.1, 0.1));
        assert_eq!(scene.geometries().len(), 1);
        assert_eq!(scene.lights().len(), 1);

        let ray = Ray::new(Point3::ZERO, Vector3::NEG_Z);
        assert!(scene.geometries().find_closest(&ray).is_some());
    }

    #[test]
    fn test_scene_with_hierarchy() {
        let builder = (0..10).fold(SceneBuilder::new("grid"), |b, i| {
            b.add_geometry(Geometry::new(Sphere::new(
                Point3::new(i as f64 * 3.0, 0.0, -5.0),
                1.0,
            )))
        });
        let scene = builder.with_hierarchy(true).build();
        assert_eq!(scene.geometries().len(), 1);

        let ray = Ray::new(Point3::new(27.0, 0.0, 0.0), Vector3::NEG_Z);
        assert_eq!(scene.geometries().find_intersections(&ray).len(), 2);
    }
}
