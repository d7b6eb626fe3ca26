//! Lux Renderer - Whitted ray tracing on the CPU.
//!
//! - **Camera**: pinhole ray generation, pose changes and supersampling
//! - **Tracer**: recursive local/global illumination with shadow attenuation
//! - **Render**: bucketed parallel rendering into an [`ImageSink`]
//!
//! # Example
//!
//! ```ignore
//! use lux_renderer::{render, Camera, ImageBuffer, RenderConfig, WhittedTracer};
//!
//! let camera = Camera::builder()
//!     .with_direction(Vector3::NEG_Z, Vector3::Y)
//!     .with_view_plane_size(2.0, 2.0)
//!     .with_view_plane_distance(1.0)
//!     .build()?;
//! let mut image = ImageBuffer::new(320, 320);
//! render(&camera, &WhittedTracer::new(&scene), &mut image, &RenderConfig::default())?;
//! ```

mod bucket;
mod camera;
mod render;
mod sampling;
mod sink;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Camera, CameraAxis, CameraBuilder, CameraError};
pub use render::{render, RenderConfig, RenderError, RenderStats};
pub use sampling::Sampling;
pub use sink::{draw_grid, ImageBuffer, ImageSink, PngSink};
pub use tracer::{
    DiffuseMode, RayTracer, TracerConfig, WhittedTracer, MAX_CALC_COLOR_LEVEL, MIN_CALC_COLOR_K,
};
