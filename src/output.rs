//! # Output Module
//!
//! Writes rendered framebuffers to disk:
//! - Plain-text PPM (`P3`), one image row per line
//! - 8-bit PNG through the `image` crate
//! - Linear 32-bit float OpenEXR through the `exr` crate
//!
//! PPM and PNG share the same quantization: channels clamped to `[0, 1]`,
//! scaled by 255 and truncated. No gamma correction is applied. EXR keeps the
//! raw shading values, including anything outside `[0, 1]`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{debug, info};

use crate::error::{RenderError, RenderResult};
use crate::render::{quantize, Framebuffer};

/// Maximum channel value written in the PPM header.
const COLOR_SCALE: u32 = 255;

/// Write a framebuffer as a `P3` PPM.
///
/// Layout:
///
/// ```text
/// P3
/// <width> <height>
/// 255
/// r g b r g b ... (one line per row, each value followed by a space)
/// ```
pub fn write_ppm<W: Write>(image: &Framebuffer, mut writer: W) -> std::io::Result<()> {
    write!(writer, "P3\n{} {}\n{}\n", image.width(), image.height(), COLOR_SCALE)?;
    for row in image.rows() {
        for &color in row {
            let [r, g, b] = quantize(color);
            write!(writer, "{} {} {} ", r, g, b)?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Save a framebuffer as a `P3` PPM file.
pub fn save_image_as_ppm(image: &Framebuffer, output_path: &Path) -> RenderResult<()> {
    let file = File::create(output_path)?;
    write_ppm(image, BufWriter::new(file))?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a framebuffer as an 8-bit PNG.
pub fn save_image_as_png(image: &Framebuffer, output_path: &Path) -> RenderResult<()> {
    let png: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| Rgb(quantize(image.pixel(x, y))));
    png.save(output_path)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save a framebuffer as an EXR with linear f32 channels.
pub fn save_image_as_exr(image: &Framebuffer, output_path: &Path) -> RenderResult<()> {
    let width = image.width() as usize;
    write_rgb_file(output_path, width, image.height() as usize, |x, y| {
        let color = image.pixels()[y * width + x];
        (color.x as f32, color.y as f32, color.z as f32)
    })?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Save a framebuffer, choosing the format from the file extension.
///
/// `.ppm`, `.png` and `.exr` are recognised (case-insensitively); anything
/// else is rejected before the file is created.
pub fn save_image(image: &Framebuffer, output_path: &Path) -> RenderResult<()> {
    let extension = output_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    debug!("Writing {} with extension {:?}", output_path.display(), extension);

    match extension.as_deref() {
        Some("ppm") => save_image_as_ppm(image, output_path),
        Some("png") => save_image_as_png(image, output_path),
        Some("exr") => save_image_as_exr(image, output_path),
        _ => Err(RenderError::UnsupportedFormat(output_path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3::Color;

    fn two_by_one() -> Framebuffer {
        Framebuffer::from_pixels(
            2,
            1,
            vec![Color::new(1.0, 0.5, 0.0), Color::new(-0.2, 2.0, 0.25)],
        )
        .unwrap()
    }

    #[test]
    fn test_ppm_layout() {
        let mut bytes = Vec::new();
        write_ppm(&two_by_one(), &mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "P3\n2 1\n255\n255 127 0 0 255 63 \n");
    }

    #[test]
    fn test_ppm_one_line_per_row() {
        let fb = Framebuffer::from_pixels(3, 4, vec![Color::ZERO; 12]).unwrap();
        let mut bytes = Vec::new();
        write_ppm(&fb, &mut bytes).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 4);
        assert!(lines[3..].iter().all(|line| *line == "0 0 0 0 0 0 0 0 0 "));
    }

    #[test]
    fn test_save_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let fb = two_by_one();

        let ppm = dir.path().join("out.PPM");
        save_image(&fb, &ppm).unwrap();
        assert!(std::fs::read_to_string(&ppm).unwrap().starts_with("P3\n2 1\n255\n"));

        let png = dir.path().join("out.png");
        save_image(&fb, &png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 127, 0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 255, 63]);

        let exr = dir.path().join("out.exr");
        save_image(&fb, &exr).unwrap();
        assert!(std::fs::metadata(&exr).unwrap().len() > 0);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bmp");
        let result = save_image(&two_by_one(), &path);
        assert!(matches!(result, Err(RenderError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.ppm");
        let result = save_image(&two_by_one(), &path);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}
