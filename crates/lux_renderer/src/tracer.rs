//! Recursive Whitted shading.
//!
//! Color at a hit is its emission plus Phong local lighting from every
//! unshadowed light, plus reflected and refracted contributions traced
//! recursively. Recursion stops at `max_level` or once the accumulated
//! attenuation `k` drops below `min_k` in every channel. Ambient light is
//! added once, for the primary hit.

use glam::DVec3;
use lux_core::{GeoPoint, Intersectable, LightSource, Scene};
use lux_math::{align_zero, Color, Point3, Ray, Triple, Vector3};
use serde::{Deserialize, Serialize};

/// Default recursion depth for secondary rays.
pub const MAX_CALC_COLOR_LEVEL: u32 = 10;

/// Default attenuation below which a branch is abandoned.
pub const MIN_CALC_COLOR_K: f64 = 0.001;

/// Computes the color seen along a ray.
pub trait RayTracer: Send + Sync {
    fn trace_ray(&self, ray: &Ray) -> Color;
}

/// How the diffuse term treats the side of the surface a light is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffuseMode {
    /// `kD · |n·l|`: both faces respond equally.
    #[default]
    TwoSided,
    /// `kD · max(0, −n·l)`: only light arriving against the normal counts.
    OneSided,
}

/// Recursion limits and shading options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    pub max_level: u32,
    pub min_k: f64,
    pub diffuse: DiffuseMode,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            max_level: MAX_CALC_COLOR_LEVEL,
            min_k: MIN_CALC_COLOR_K,
            diffuse: DiffuseMode::TwoSided,
        }
    }
}

/// Whitted ray tracer over a borrowed scene.
#[derive(Debug)]
pub struct WhittedTracer<'a> {
    scene: &'a Scene,
    config: TracerConfig,
}

impl<'a> WhittedTracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            config: TracerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TracerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    fn find_closest(&self, ray: &Ray) -> Option<GeoPoint<'a>> {
        self.scene.geometries().find_closest(ray)
    }

    fn calc_color(&self, gp: &GeoPoint<'_>, ray: &Ray, level: u32, k: Triple) -> Color {
        let color = gp.geometry.emission() + self.local_effects(gp, ray, k);
        if level <= 1 {
            color
        } else {
            color + self.global_effects(gp, ray, level, k)
        }
    }

    fn local_effects(&self, gp: &GeoPoint<'_>, ray: &Ray, k: Triple) -> Color {
        let Ok(n) = gp.geometry.normal_at(gp.point) else {
            return Color::BLACK;
        };
        let v = ray.direction();
        let nv = align_zero(n.dot(v));
        if nv == 0.0 {
            return Color::BLACK;
        }

        let material = gp.geometry.material();
        let mut color = Color::BLACK;

        for light in self.scene.lights() {
            let Some(l) = light.incident(gp.point) else {
                continue;
            };
            let nl = align_zero(n.dot(l));
            if nl * nv <= 0.0 {
                continue;
            }

            let ktr = self.transparency(gp.point, n, l, light.as_ref());
            if (ktr * k).all_below(self.config.min_k) {
                continue;
            }

            let intensity = light.intensity_at(gp.point) * ktr;
            let diffuse = material.kd * self.diffuse_factor(nl);
            let specular = material.ks * specular_factor(l, n, v, material.shininess);
            color += intensity * diffuse + intensity * specular;
        }

        color
    }

    fn diffuse_factor(&self, nl: f64) -> f64 {
        match self.config.diffuse {
            DiffuseMode::TwoSided => nl.abs(),
            DiffuseMode::OneSided => (-nl).max(0.0),
        }
    }

    /// Product of `kT` over everything between `point` and the light.
    fn transparency(
        &self,
        point: Point3,
        n: Vector3,
        l: Vector3,
        light: &dyn LightSource,
    ) -> Triple {
        let shadow_ray = Ray::offset(point, -l, n);
        let hits = self
            .scene
            .geometries()
            .intersect(&shadow_ray, light.distance(point));

        let mut ktr = Triple::ONE;
        for hit in hits {
            ktr = ktr * hit.geometry.material().kt;
            if ktr.all_below(self.config.min_k) {
                return Triple::ZERO;
            }
        }
        ktr
    }

    fn global_effects(&self, gp: &GeoPoint<'_>, ray: &Ray, level: u32, k: Triple) -> Color {
        let Ok(n) = gp.geometry.normal_at(gp.point) else {
            return Color::BLACK;
        };
        let material = gp.geometry.material();
        let v = ray.direction();
        let mut color = Color::BLACK;

        if let Some(r) = reflect(v, n) {
            let reflected = Ray::offset(gp.point, r, n);
            color += self.global_effect(&reflected, level, k, material.kr);
        }

        let refracted = Ray::offset(gp.point, v, n);
        color += self.global_effect(&refracted, level, k, material.kt);

        color
    }

    fn global_effect(&self, ray: &Ray, level: u32, k: Triple, kx: Triple) -> Color {
        let kkx = k * kx;
        if kkx.all_below(self.config.min_k) {
            return Color::BLACK;
        }

        let color = match self.find_closest(ray) {
            Some(gp) => self.calc_color(&gp, ray, level - 1, kkx),
            None => self.scene.background(),
        };
        color * kx
    }
}

impl RayTracer for WhittedTracer<'_> {
    fn trace_ray(&self, ray: &Ray) -> Color {
        match self.find_closest(ray) {
            Some(gp) => {
                self.scene.ambient_light().intensity()
                    + self.calc_color(&gp, ray, self.config.max_level, Triple::ONE)
            }
            None => self.scene.background(),
        }
    }
}

/// Mirror `d` about the plane with normal `n`: `d − 2(d·n)n`.
fn reflect(d: Vector3, n: Vector3) -> Option<Vector3> {
    let d3: DVec3 = d.into();
    let n3: DVec3 = n.into();
    Vector3::try_from_dvec3(d3 - n3 * (2.0 * d3.dot(n3)))
        .ok()
        .map(|r| r.normalize())
}

/// Phong highlight `max(0, −v·r)^shininess` with `r` the mirrored light.
fn specular_factor(l: Vector3, n: Vector3, v: Vector3, shininess: i32) -> f64 {
    let Some(r) = reflect(l, n) else {
        return 0.0;
    };
    let vr = (-v.dot(r)).max(0.0);
    align_zero(vr.powi(shininess))
}
