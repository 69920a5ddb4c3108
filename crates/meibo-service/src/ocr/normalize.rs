//! Image normalization ahead of OCR
//!
//! Namecard photos arrive at arbitrary sizes and exposure. Recognition gets
//! a downscaled, grayscale, contrast-stretched, sharpened PNG.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

/// Maximum width fed to the OCR engine. Larger images are downscaled,
/// smaller ones are never enlarged.
const MAX_WIDTH: u32 = 1200;

/// Prepare an uploaded image for OCR, returning PNG bytes.
pub fn normalize_for_ocr(bytes: &[u8]) -> Result<Vec<u8>, image::ImageError> {
    let img = image::load_from_memory(bytes)?;

    let img = if img.width() > MAX_WIDTH {
        img.resize(MAX_WIDTH, img.height(), FilterType::Lanczos3)
    } else {
        img
    };

    let normalized = DynamicImage::ImageLuma8(stretch_contrast(img.to_luma8())).unsharpen(1.5, 4);

    let mut out = Vec::new();
    normalized.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
    Ok(out)
}

/// Linear min-max contrast stretch over the full 0-255 range.
fn stretch_contrast(mut gray: image::GrayImage) -> image::GrayImage {
    let (mut lo, mut hi) = (u8::MAX, u8::MIN);
    for pixel in gray.pixels() {
        lo = lo.min(pixel.0[0]);
        hi = hi.max(pixel.0[0]);
    }

    // Flat images (single-color) have nothing to stretch.
    if hi <= lo {
        return gray;
    }

    let range = f32::from(hi - lo);
    for pixel in gray.pixels_mut() {
        let v = f32::from(pixel.0[0] - lo) / range * 255.0;
        pixel.0[0] = v.round().clamp(0.0, 255.0) as u8;
    }
    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, RgbImage};

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
        out
    }

    #[test]
    fn test_wide_images_downscale_to_max_width() {
        let wide = DynamicImage::ImageRgb8(RgbImage::new(2400, 1200));
        let normalized = normalize_for_ocr(&png_bytes(wide)).unwrap();

        let reloaded = image::load_from_memory(&normalized).unwrap();
        assert_eq!(reloaded.width(), 1200);
        assert_eq!(reloaded.height(), 600);
    }

    #[test]
    fn test_small_images_keep_their_size() {
        let small = DynamicImage::ImageRgb8(RgbImage::new(400, 250));
        let normalized = normalize_for_ocr(&png_bytes(small)).unwrap();

        let reloaded = image::load_from_memory(&normalized).unwrap();
        assert_eq!(reloaded.width(), 400);
        assert_eq!(reloaded.height(), 250);
    }

    #[test]
    fn test_contrast_stretch_expands_range() {
        let mut gray = GrayImage::new(4, 1);
        for (i, v) in [100u8, 120, 140, 160].into_iter().enumerate() {
            gray.put_pixel(i as u32, 0, Luma([v]));
        }

        let stretched = stretch_contrast(gray);
        assert_eq!(stretched.get_pixel(0, 0).0[0], 0);
        assert_eq!(stretched.get_pixel(3, 0).0[0], 255);
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(normalize_for_ocr(b"not an image").is_err());
    }
}
