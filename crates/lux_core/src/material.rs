use lux_math::Triple;

/// Phong/Whitted surface coefficients.
///
/// The default material is black: opaque, non-reflective and without
/// diffuse or specular response, so only emission and ambient show.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Diffuse reflectance.
    pub kd: Triple,
    /// Specular reflectance.
    pub ks: Triple,
    /// Transparency. Also attenuates shadow rays passing through.
    pub kt: Triple,
    /// Mirror reflectivity.
    pub kr: Triple,
    /// Phong exponent for the specular lobe.
    pub shininess: i32,
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kd(mut self, kd: impl Into<Triple>) -> Self {
        self.kd = kd.into();
        self
    }

    pub fn with_ks(mut self, ks: impl Into<Triple>) -> Self {
        self.ks = ks.into();
        self
    }

    pub fn with_kt(mut self, kt: impl Into<Triple>) -> Self {
        self.kt = kt.into();
        self
    }

    pub fn with_kr(mut self, kr: impl Into<Triple>) -> Self {
        self.kr = kr.into();
        self
    }

    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }
}
