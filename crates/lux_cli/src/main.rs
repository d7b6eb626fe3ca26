//! Lux command line renderer.
//!
//! Renders one of the built-in demo scenes to a PNG file. Render, tracer and
//! sampling settings can be supplied as a JSON file; missing fields fall back
//! to their defaults.

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use lux_math::Color;
use lux_renderer::{
    draw_grid, render, ImageSink, PngSink, RenderConfig, Sampling, TracerConfig, WhittedTracer,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod scenes;

use scenes::DemoScene;

#[derive(Parser, Debug)]
#[command(name = "lux")]
#[command(about = "Whitted ray tracer for built-in demo scenes", long_about = None)]
struct Cli {
    /// Demo scene to render
    #[arg(short, long, value_enum, default_value = "spheres")]
    scene: DemoScene,

    /// Output PNG file
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// JSON file with render, tracer and sampling settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Overlay a grid every N pixels instead of rendering the scene
    #[arg(long)]
    grid: Option<u32>,
}

/// Everything that can be set from the JSON configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    render: RenderConfig,
    tracer: TracerConfig,
    sampling: Sampling,
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let settings = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    log::debug!("{:?}", settings);

    let mut sink = PngSink::new(&cli.output, cli.width, cli.height);

    if let Some(interval) = cli.grid {
        draw_grid(&mut sink, interval, Color::WHITE);
        sink.flush()
            .with_context(|| format!("Failed to write {}", cli.output.display()))?;
        log::info!("Wrote grid to {}", cli.output.display());
        return Ok(());
    }

    let (scene, camera) = scenes::build(cli.scene, settings.sampling)?;
    log::info!("Rendering scene '{}'", scene.name());

    let tracer = WhittedTracer::new(&scene).with_config(settings.tracer);
    let stats = render(&camera, &tracer, &mut sink, &settings.render)
        .with_context(|| format!("Failed to render {}", cli.output.display()))?;

    log::info!(
        "Wrote {}x{} image to {} in {:.2}s",
        stats.width,
        stats.height,
        cli.output.display(),
        stats.elapsed_secs
    );
    Ok(())
}
