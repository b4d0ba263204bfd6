//! Rasterization: one primary ray per pixel, rows rendered in parallel.

use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};
use crate::interval::Interval;
use crate::output::save_image;
use crate::scene::Scene;
use crate::shading::ShadingParams;
use crate::vec3::Color;

/// Linear colours of a rendered image, row-major from the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Wrap row-major pixels. `None` for an empty image or unless there are
    /// exactly `width * height` of them.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        (pixels.len() == (width as usize) * (height as usize)).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour of the pixel in column `x` of row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows of pixels from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width as usize)
    }
}

/// Convert a colour to 8-bit channels.
///
/// Each channel is clamped to `[0, 1]`, scaled by 255 and truncated.
pub fn quantize(color: Color) -> [u8; 3] {
    let channel = |c: f64| (Interval::UNIT.clamp(c) * 255.0) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Renders scenes at a fixed resolution.
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Shading constants
    pub shading: ShadingParams,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Renderer {
    /// Renderer with default shading constants and no progress bar.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            shading: ShadingParams::default(),
            show_progress: false,
        }
    }

    /// Render `scene` into a framebuffer.
    ///
    /// Pixel `(j, i)` (column, row) is shaded along the camera ray through
    /// `u = j / width`, `v = i / height`. Every pixel is independent, so rows
    /// are distributed over the rayon thread pool; the result is identical to
    /// a sequential scan.
    pub fn render(&self, scene: &Scene) -> RenderResult<Framebuffer> {
        let (width, height) = (self.image_width, self.image_height);
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        scene.validate()?;

        let width_d = f64::from(width);
        let height_d = f64::from(height);
        let aspect_ratio = width_d / height_d;

        info!(
            "Rendering {}x{} with {} spheres on {} threads",
            width,
            height,
            scene.spheres.len(),
            rayon::current_num_threads()
        );
        let start = Instant::now();
        let progress = self.progress_bar(u64::from(height));

        let mut pixels = vec![Color::ZERO; (width as usize) * (height as usize)];
        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(i, row)| {
                let v = i as f64 / height_d;
                for (j, pixel) in row.iter_mut().enumerate() {
                    let u = j as f64 / width_d;
                    let ray = scene.camera.primary_ray(u, v, aspect_ratio);
                    *pixel = self.shading.shade(&ray, scene);
                }
                progress.inc(1);
            });

        progress.finish_and_clear();
        info!("Image rendered in {:.2?}", start.elapsed());

        Ok(Framebuffer {
            width,
            height,
            pixels,
        })
    }

    fn progress_bar(&self, rows: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::with_draw_target(Some(rows), ProgressDrawTarget::hidden());
        }
        let bar = ProgressBar::new(rows);
        match ProgressStyle::with_template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            Ok(style) => bar.set_style(style),
            Err(e) => debug!("Falling back to default progress style: {}", e),
        }
        bar
    }
}

/// Render `scene` at `width` x `height` and write it to `path`.
///
/// The format follows the extension (`.ppm`, `.png` or `.exr`). Invalid
/// dimensions or scene data, and an unwritable destination, are reported as
/// errors; nothing is written in the first two cases.
pub fn draw_image(width: u32, height: u32, path: impl AsRef<Path>, scene: &Scene) -> RenderResult<()> {
    let framebuffer = Renderer::new(width, height).render(scene)?;
    save_image(&framebuffer, path.as_ref())
}
