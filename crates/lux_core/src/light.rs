//! Light sources.
//!
//! Every light reports, for a surface point, the intensity arriving there,
//! the incident direction (from the light toward the point) and how far
//! away it is. Shadow rays are clipped at that distance.

use lux_math::{is_zero, Color, Point3, Triple, Vector3};
use std::fmt::Debug;

/// A light that illuminates surface points directionally.
pub trait LightSource: Send + Sync + Debug {
    /// Intensity arriving at `point`.
    fn intensity_at(&self, point: Point3) -> Color;

    /// Unit direction from the light toward `point`, or `None` when the
    /// point sits exactly on the light.
    fn incident(&self, point: Point3) -> Option<Vector3>;

    /// Distance from `point` to the light (infinite for directional lights).
    fn distance(&self, point: Point3) -> f64;
}

/// Scene-wide background illumination `Ia * Ka`. Not a [`LightSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    intensity: Color,
}

impl AmbientLight {
    pub const NONE: AmbientLight = AmbientLight {
        intensity: Color::BLACK,
    };

    pub fn new(ia: Color, ka: impl Into<Triple>) -> Self {
        Self {
            intensity: ia * ka.into(),
        }
    }

    pub fn intensity(&self) -> Color {
        self.intensity
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::NONE
    }
}

/// Parallel light from infinitely far away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    intensity: Color,
    direction: Vector3,
}

impl DirectionalLight {
    pub fn new(intensity: Color, direction: Vector3) -> Self {
        Self {
            intensity,
            direction: direction.normalize(),
        }
    }
}

impl LightSource for DirectionalLight {
    fn intensity_at(&self, _point: Point3) -> Color {
        self.intensity
    }

    fn incident(&self, _point: Point3) -> Option<Vector3> {
        Some(self.direction)
    }

    fn distance(&self, _point: Point3) -> f64 {
        f64::INFINITY
    }
}

/// Omnidirectional light with `1 / (kC + kL d + kQ d²)` falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    intensity: Color,
    position: Point3,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {
    /// A light with no distance attenuation (`kC = 1`, `kL = kQ = 0`).
    pub fn new(intensity: Color, position: Point3) -> Self {
        Self {
            intensity,
            position,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.kc = kc;
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.kl = kl;
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.kq = kq;
        self
    }

    pub fn position(&self) -> Point3 {
        self.position
    }
}

impl LightSource for PointLight {
    fn intensity_at(&self, point: Point3) -> Color {
        let d = point.distance(self.position);
        let attenuation = self.kc + self.kl * d + self.kq * d * d;
        if is_zero(attenuation) {
            return self.intensity;
        }
        self.intensity / attenuation
    }

    fn incident(&self, point: Point3) -> Option<Vector3> {
        point.subtract(self.position).ok().map(|v| v.normalize())
    }

    fn distance(&self, point: Point3) -> f64 {
        point.distance(self.position)
    }
}

/// A point light focused along a beam direction.
///
/// Intensity is scaled by `max(0, dir · l)^narrow_beam`, where `l` is the
/// incident direction. Points behind the beam receive nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    light: PointLight,
    direction: Vector3,
    narrow_beam: f64,
}

impl SpotLight {
    pub fn new(intensity: Color, position: Point3, direction: Vector3) -> Self {
        Self {
            light: PointLight::new(intensity, position),
            direction: direction.normalize(),
            narrow_beam: 1.0,
        }
    }

    pub fn with_kc(mut self, kc: f64) -> Self {
        self.light = self.light.with_kc(kc);
        self
    }

    pub fn with_kl(mut self, kl: f64) -> Self {
        self.light = self.light.with_kl(kl);
        self
    }

    pub fn with_kq(mut self, kq: f64) -> Self {
        self.light = self.light.with_kq(kq);
        self
    }

    /// Sharpen the beam; `1` is a plain cosine falloff.
    pub fn with_narrow_beam(mut self, narrow_beam: f64) -> Self {
        self.narrow_beam = narrow_beam;
        self
    }
}

impl LightSource for SpotLight {
    fn intensity_at(&self, point: Point3) -> Color {
        let Some(l) = self.light.incident(point) else {
            return self.light.intensity_at(point);
        };

        let projection = self.direction.dot(l);
        if is_zero(projection) || projection < 0.0 {
            return Color::BLACK;
        }

        self.light.intensity_at(point) * projection.powf(self.narrow_beam)
    }

    fn incident(&self, point: Point3) -> Option<Vector3> {
        self.light.incident(point)
    }

    fn distance(&self, point: Point3) -> f64 {
        self.light.distance(point)
    }
}
