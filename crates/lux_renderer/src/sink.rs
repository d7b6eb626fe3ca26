//! Image output sinks.

use crate::RenderError;
use image::{Rgb, RgbImage};
use lux_math::Color;
use std::path::{Path, PathBuf};

/// Destination for rendered pixels.
///
/// Pixels may arrive in any order; `flush` is called once after the last.
pub trait ImageSink {
    /// Image width and height in pixels.
    fn resolution(&self) -> (u32, u32);

    fn write_pixel(&mut self, x: u32, y: u32, color: Color);

    fn flush(&mut self) -> Result<(), RenderError>;
}

/// Overlay grid lines every `interval` pixels.
pub fn draw_grid(sink: &mut dyn ImageSink, interval: u32, color: Color) {
    if interval == 0 {
        return;
    }
    let (width, height) = sink.resolution();
    for y in 0..height {
        for x in 0..width {
            if x % interval == 0 || y % interval == 0 {
                sink.write_pixel(x, y, color);
            }
        }
    }
}

/// In-memory image, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgb8()).collect()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl ImageSink for ImageBuffer {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Writes an 8-bit RGB image file on flush. The format follows the path
/// extension (normally `.png`).
#[derive(Debug)]
pub struct PngSink {
    path: PathBuf,
    image: RgbImage,
}

impl PngSink {
    pub fn new(path: impl AsRef<Path>, width: u32, height: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            image: RgbImage::new(width, height),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ImageSink for PngSink {
    fn resolution(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.image.put_pixel(x, y, Rgb(color.to_rgb8()));
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        self.image.save(&self.path)?;
        log::debug!("Wrote {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.resolution(), (4, 3));
        assert_eq!(image.pixels.len(), 12);

        image.write_pixel(3, 2, Color::WHITE);
        assert_eq!(image.get(3, 2), Color::WHITE);
        assert_eq!(image.pixels[11], Color::WHITE);
        assert_eq!(image.get(0, 0), Color::BLACK);
    }

    #[test]
    fn test_to_rgb8_clamps() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(2.0, 0.5, -1.0));
        image.set(1, 0, Color::new(0.0, 1.0, 0.0));
        assert_eq!(image.to_rgb8(), vec![255, 128, 0, 0, 255, 0]);
    }

    #[test]
    fn test_draw_grid() {
        let mut image = ImageBuffer::new(5, 5);
        draw_grid(&mut image, 2, Color::WHITE);
        assert_eq!(image.get(0, 3), Color::WHITE);
        assert_eq!(image.get(2, 1), Color::WHITE);
        assert_eq!(image.get(1, 1), Color::BLACK);
        assert_eq!(image.get(3, 3), Color::BLACK);
    }

    #[test]
    fn test_png_sink_writes_file() {
        let path = std::env::temp_dir().join(format!("lux_png_sink_{}.png", std::process::id()));
        let mut sink = PngSink::new(&path, 3, 2);
        sink.write_pixel(1, 1, Color::new(1.0, 0.0, 0.0));
        sink.flush().unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (3, 2));
        assert_eq!(written.get_pixel(1, 1), &Rgb([255, 0, 0]));
        std::fs::remove_file(&path).unwrap();
    }
}
