//! Pinhole camera for primary ray generation.

use crate::sampling::{self, Sampling};
use crate::RayTracer;
use lux_math::{is_zero, Color, MathError, MathResult, Point3, Ray, Vector3};
use thiserror::Error;

/// Errors raised while configuring a camera.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("forward and up vectors are not orthogonal")]
    NonOrthogonalBasis,

    #[error("camera is missing its {0}")]
    IncompleteConfiguration(&'static str),

    #[error("view plane {0} must be positive")]
    InvalidViewPlane(&'static str),

    #[error("camera math error: {0}")]
    Math(#[from] MathError),
}

/// One of the camera's own basis vectors, used as a rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    Forward,
    Up,
    Right,
}

/// Builder for [`Camera`].
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    position: Point3,
    direction: Option<(Vector3, Vector3)>,
    view_plane_size: Option<(f64, f64)>,
    view_plane_distance: Option<f64>,
    sampling: Sampling,
}

impl CameraBuilder {
    /// Start at the origin with single-ray sampling.
    pub fn new() -> Self {
        Self {
            position: Point3::ZERO,
            direction: None,
            view_plane_size: None,
            view_plane_distance: None,
            sampling: Sampling::Single,
        }
    }

    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    /// Viewing direction and up vector. They must be orthogonal.
    pub fn with_direction(mut self, forward: Vector3, up: Vector3) -> Self {
        self.direction = Some((forward, up));
        self
    }

    pub fn with_view_plane_size(mut self, width: f64, height: f64) -> Self {
        self.view_plane_size = Some((width, height));
        self
    }

    pub fn with_view_plane_distance(mut self, distance: f64) -> Self {
        self.view_plane_distance = Some(distance);
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn build(self) -> Result<Camera, CameraError> {
        let (forward, up) = self
            .direction
            .ok_or(CameraError::IncompleteConfiguration("direction"))?;
        if !is_zero(forward.dot(up)) {
            return Err(CameraError::NonOrthogonalBasis);
        }

        let (width, height) = self
            .view_plane_size
            .ok_or(CameraError::IncompleteConfiguration("view plane size"))?;
        let distance = self
            .view_plane_distance
            .ok_or(CameraError::IncompleteConfiguration("view plane distance"))?;

        for (value, name) in [(width, "width"), (height, "height"), (distance, "distance")] {
            // Also rejects NaN
            if value.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
                return Err(CameraError::InvalidViewPlane(name));
            }
        }

        let forward = forward.normalize();
        let up = up.normalize();
        let right = forward.cross(up)?.normalize();

        Ok(Camera {
            position: self.position,
            forward,
            up,
            right,
            width,
            height,
            distance,
            sampling: self.sampling,
        })
    }
}

impl Default for CameraBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A pinhole camera with an orthonormal basis and a rectangular view plane.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Point3,
    forward: Vector3,
    up: Vector3,
    right: Vector3,
    width: f64,
    height: f64,
    distance: f64,
    sampling: Sampling,
}

impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::new()
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn forward(&self) -> Vector3 {
        self.forward
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn set_sampling(&mut self, sampling: Sampling) {
        self.sampling = sampling;
    }

    /// Primary ray through the center of pixel `(x, y)` of an `nx` by `ny`
    /// image. Row 0 is the top of the image.
    pub fn ray_through_pixel(&self, nx: u32, ny: u32, x: u32, y: u32) -> MathResult<Ray> {
        self.ray_through(nx, ny, x as f64, y as f64)
    }

    /// Ray through a continuous pixel position; integer coordinates are
    /// pixel centers.
    pub fn ray_through(&self, nx: u32, ny: u32, px: f64, py: f64) -> MathResult<Ray> {
        let nx_f = nx as f64;
        let ny_f = ny as f64;
        let dx = (px - (nx_f - 1.0) / 2.0) * (self.width / nx_f);
        let dy = -(py - (ny_f - 1.0) / 2.0) * (self.height / ny_f);

        let offset = self.forward.as_dvec3() * self.distance
            + self.right.as_dvec3() * dx
            + self.up.as_dvec3() * dy;
        Ok(Ray::new(self.position, Vector3::try_from_dvec3(offset)?))
    }

    /// Color of pixel `(x, y)` under the camera's sampling strategy.
    pub fn render_pixel(
        &self,
        tracer: &dyn RayTracer,
        nx: u32,
        ny: u32,
        x: u32,
        y: u32,
        seed: u64,
    ) -> Color {
        sampling::sample_pixel(self, tracer, nx, ny, x, y, seed)
    }

    /// Move along the viewing direction.
    pub fn dolly(&mut self, amount: f64) {
        self.position = self.position.offset(self.forward, amount);
    }

    /// Move sideways along the right vector.
    pub fn truck(&mut self, amount: f64) {
        self.position = self.position.offset(self.right, amount);
    }

    /// Move along the up vector.
    pub fn pedestal(&mut self, amount: f64) {
        self.position = self.position.offset(self.up, amount);
    }

    /// Rotate the basis around one of its own axes.
    ///
    /// The other two vectors turn with it and the basis stays orthonormal.
    pub fn rotate(&mut self, axis: CameraAxis, degrees: f64) -> Result<(), CameraError> {
        let angle = degrees.to_radians();
        match axis {
            CameraAxis::Forward => {
                self.up = self.up.rotate_around(self.forward, angle)?.normalize();
                self.right = self.forward.cross(self.up)?.normalize();
            }
            CameraAxis::Up => {
                self.forward = self.forward.rotate_around(self.up, angle)?.normalize();
                self.right = self.forward.cross(self.up)?.normalize();
            }
            CameraAxis::Right => {
                self.forward = self.forward.rotate_around(self.right, angle)?.normalize();
                self.up = self.right.cross(self.forward)?.normalize();
            }
        }
        Ok(())
    }
}
