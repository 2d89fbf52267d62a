//! Enhancement multipliers: brightness, contrast, saturation, sharpness.
//!
//! Each adjustment takes a positive factor where 1.0 is identity. The
//! implementation follows the classic enhancer definition: blend between a
//! degenerate image and the source, `out = degenerate + (src - degenerate)
//! * factor`. Factors below 1.0 move toward the degenerate image, factors
//! above 1.0 push past the source.
//!
//! Degenerate images per adjustment:
//! - brightness: solid black
//! - contrast: solid gray at the image's mean luminance
//! - saturation: the per-pixel luminance grayscale
//! - sharpness: a 3x3 smooth-kernel pass over the source

use crate::decode::DecodedImage;
use crate::filters::{convolve, SMOOTH_KERNEL};
use crate::luminance::calculate_luminance_u8;

/// Blend one channel between a degenerate value and the source value.
#[inline]
fn blend(degenerate: f32, value: f32, factor: f32) -> u8 {
    (degenerate + (value - degenerate) * factor)
        .clamp(0.0, 255.0)
        .round() as u8
}

/// Scale brightness by a factor (1.0 = identity, 0.0 = black).
pub fn adjust_brightness(image: &DecodedImage, factor: f32) -> DecodedImage {
    if factor == 1.0 {
        return image.clone();
    }

    let pixels = image
        .pixels
        .iter()
        .map(|&v| blend(0.0, v as f32, factor))
        .collect();

    DecodedImage::new(image.width, image.height, pixels)
}

/// Scale contrast by a factor (1.0 = identity, 0.0 = solid mean gray).
///
/// The pivot is the mean luminance of the whole image, so repeated
/// applications keep the overall exposure stable.
pub fn adjust_contrast(image: &DecodedImage, factor: f32) -> DecodedImage {
    if factor == 1.0 {
        return image.clone();
    }

    let mean = mean_luminance(image) as f32;
    let pixels = image
        .pixels
        .iter()
        .map(|&v| blend(mean, v as f32, factor))
        .collect();

    DecodedImage::new(image.width, image.height, pixels)
}

/// Scale color saturation by a factor (1.0 = identity, 0.0 = grayscale).
pub fn adjust_saturation(image: &DecodedImage, factor: f32) -> DecodedImage {
    if factor == 1.0 {
        return image.clone();
    }

    let mut pixels = Vec::with_capacity(image.pixels.len());
    for chunk in image.pixels.chunks_exact(3) {
        let gray = calculate_luminance_u8(chunk[0], chunk[1], chunk[2]) as f32;
        pixels.push(blend(gray, chunk[0] as f32, factor));
        pixels.push(blend(gray, chunk[1] as f32, factor));
        pixels.push(blend(gray, chunk[2] as f32, factor));
    }

    DecodedImage::new(image.width, image.height, pixels)
}

/// Scale sharpness by a factor (1.0 = identity, 0.0 = smoothed).
///
/// Blends against a single smooth-kernel pass, so factors above 1.0 act
/// as an unsharp mask.
pub fn adjust_sharpness(image: &DecodedImage, factor: f32) -> DecodedImage {
    if factor == 1.0 {
        return image.clone();
    }

    let smoothed = convolve(image, &SMOOTH_KERNEL);
    let pixels = image
        .pixels
        .iter()
        .zip(smoothed.pixels.iter())
        .map(|(&src, &soft)| blend(soft as f32, src as f32, factor))
        .collect();

    DecodedImage::new(image.width, image.height, pixels)
}

/// Mean luminance over all pixels, rounded to the nearest integer.
fn mean_luminance(image: &DecodedImage) -> u8 {
    if image.pixels.is_empty() {
        return 0;
    }

    let mut sum: u64 = 0;
    for chunk in image.pixels.chunks_exact(3) {
        sum += calculate_luminance_u8(chunk[0], chunk[1], chunk[2]) as u64;
    }
    (sum as f64 / image.pixel_count() as f64).round() as u8
}
