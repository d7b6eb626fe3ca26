//! Per-pixel sampling strategies.
//!
//! Supersampling shoots extra rays inside each pixel's footprint on the
//! view plane and averages their colors.

use crate::{Camera, RayTracer};
use lux_math::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How many rays are traced per pixel, and where.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Sampling {
    /// One ray through the pixel center.
    #[default]
    Single,
    /// The center ray plus `samples` rays jittered uniformly over the pixel.
    Stochastic { samples: u32 },
    /// Recursive corner refinement where neighbouring samples disagree.
    ///
    /// A quadrant is subdivided while any channel of its corner differs from
    /// its center by more than `threshold`, up to `max_depth` levels.
    Adaptive { max_depth: u32, threshold: f64 },
}

/// Color of one pixel under the camera's sampling strategy.
pub(crate) fn sample_pixel(
    camera: &Camera,
    tracer: &dyn RayTracer,
    nx: u32,
    ny: u32,
    x: u32,
    y: u32,
    seed: u64,
) -> Color {
    let (max_depth, threshold) = match camera.sampling() {
        Sampling::Adaptive {
            max_depth,
            threshold,
        } => (max_depth, threshold),
        _ => (0, 0.0),
    };
    let sampler = Sampler {
        camera,
        tracer,
        nx,
        ny,
        max_depth,
        threshold,
    };
    let (px, py) = (x as f64, y as f64);

    match camera.sampling() {
        Sampling::Single => sampler.trace(px, py),
        Sampling::Stochastic { samples } => {
            let mut rng = StdRng::seed_from_u64(pixel_seed(seed, nx, x, y));
            let jittered: Color = (0..samples)
                .map(|_| {
                    let jx = rng.gen_range(-0.5..0.5);
                    let jy = rng.gen_range(-0.5..0.5);
                    sampler.trace(px + jx, py + jy)
                })
                .sum();
            (sampler.trace(px, py) + jittered) / (samples as f64 + 1.0)
        }
        Sampling::Adaptive { .. } => {
            let center = sampler.trace(px, py);
            sampler.refine(px, py, 0.5, center, 0)
        }
    }
}

/// Stable per-pixel seed, independent of render order and thread count.
fn pixel_seed(seed: u64, nx: u32, x: u32, y: u32) -> u64 {
    let index = y as u64 * nx as u64 + x as u64;
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ index
}

struct Sampler<'a> {
    camera: &'a Camera,
    tracer: &'a dyn RayTracer,
    nx: u32,
    ny: u32,
    /// Deepest quadrant subdivision for adaptive sampling
    max_depth: u32,
    /// Largest channel difference accepted without subdividing
    threshold: f64,
}

impl Sampler<'_> {
    /// Trace through a continuous pixel position.
    fn trace(&self, px: f64, py: f64) -> Color {
        match self.camera.ray_through(self.nx, self.ny, px, py) {
            Ok(ray) => self.tracer.trace_ray(&ray),
            Err(e) => {
                log::warn!("No primary ray through ({px}, {py}): {e}");
                Color::BLACK
            }
        }
    }

    /// Average of the four quadrants around `(cx, cy)`, each accepted or
    /// refined against the center color.
    fn refine(&self, cx: f64, cy: f64, half: f64, center: Color, depth: u32) -> Color {
        let corners = [(-half, -half), (half, -half), (-half, half), (half, half)];

        let total: Color = corners
            .into_iter()
            .map(|(ox, oy)| {
                let corner = self.trace(cx + ox, cy + oy);
                if corner.max_difference(center) <= self.threshold {
                    center
                } else if depth >= self.max_depth {
                    (center + corner) / 2.0
                } else {
                    let (qx, qy) = (cx + ox / 2.0, cy + oy / 2.0);
                    let quadrant_center = self.trace(qx, qy);
                    self.refine(qx, qy, half / 2.0, quadrant_center, depth + 1)
                }
            })
            .sum();

        total / 4.0
    }
}
