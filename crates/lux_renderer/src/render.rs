//! Parallel render driver.
//!
//! Buckets are traced concurrently on a rayon pool against the immutable
//! scene; finished buckets are then written to the sink on the calling
//! thread, so sinks need no synchronization.

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, CameraError, ImageSink, RayTracer};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

/// Errors that abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Camera error: {0}")]
    Camera(#[from] CameraError),

    #[error("Image sink error: {0}")]
    Sink(String),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Render is missing its {0}")]
    IncompleteConfiguration(&'static str),
}

/// Render driver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Bucket edge length in pixels
    pub bucket_size: u32,
    /// Worker threads; 0 lets rayon decide
    pub threads: usize,
    /// Seed for stochastic sampling
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: 0,
            seed: 0,
        }
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub width: u32,
    pub height: u32,
    pub buckets: usize,
    pub elapsed_secs: f64,
}

/// Trace every pixel of the sink's resolution and write it to the sink.
///
/// Each pixel is written exactly once, then the sink is flushed.
pub fn render(
    camera: &Camera,
    tracer: &dyn RayTracer,
    sink: &mut dyn ImageSink,
    config: &RenderConfig,
) -> Result<RenderStats, RenderError> {
    let (width, height) = sink.resolution();
    if width == 0 || height == 0 {
        return Err(RenderError::IncompleteConfiguration("image resolution"));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    let buckets = generate_buckets(width, height, config.bucket_size);
    log::info!(
        "Rendering {}x{} in {} buckets on {} threads",
        width,
        height,
        buckets.len(),
        pool.current_num_threads()
    );

    let start = Instant::now();
    let results: Vec<BucketResult> = pool.install(|| {
        buckets
            .par_iter()
            .map(|bucket| render_bucket(bucket, camera, tracer, (width, height), config.seed))
            .collect()
    });

    for result in &results {
        for ((x, y), color) in result.bucket.pixels().zip(&result.pixels) {
            sink.write_pixel(x, y, *color);
        }
    }
    sink.flush()?;

    let elapsed_secs = start.elapsed().as_secs_f64();
    log::info!("Render complete in {:.2}s", elapsed_secs);

    Ok(RenderStats {
        width,
        height,
        buckets: buckets.len(),
        elapsed_secs,
    })
}
