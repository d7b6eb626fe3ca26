//! RGB color / light intensity.

use crate::Triple;
use glam::DVec3;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul};

/// Linear RGB intensity. `1.0` is full display brightness per channel.
///
/// Channels are not clamped while tracing; the output stage clamps.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color(DVec3);

impl Color {
    pub const BLACK: Color = Color(DVec3::ZERO);
    pub const WHITE: Color = Color(DVec3::ONE);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    /// Build from 8-bit channels (0-255).
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(DVec3::new(r as f64, g as f64, b as f64) / 255.0)
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn as_dvec3(&self) -> DVec3 {
        self.0
    }

    /// Largest absolute per-channel difference to `other`.
    pub fn max_difference(&self, other: Color) -> f64 {
        (self.0 - other.0).abs().max_element()
    }

    /// Clamp to [0, 1] and quantize to 8 bits.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let c = self.0.clamp(DVec3::ZERO, DVec3::ONE) * 255.0;
        [c.x.round() as u8, c.y.round() as u8, c.z.round() as u8]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color(self.0 * rhs)
    }
}

/// Per-channel attenuation by a coefficient triple.
impl Mul<Triple> for Color {
    type Output = Color;

    fn mul(self, rhs: Triple) -> Color {
        Color(self.0 * rhs.as_dvec3())
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color(self.0 * rhs.0)
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, rhs: f64) -> Color {
        Color(self.0 / rhs)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, |acc, c| acc + c)
    }
}
