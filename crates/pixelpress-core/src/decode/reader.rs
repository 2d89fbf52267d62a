//! Decoding uploaded image files into RGB pixel buffers.
//!
//! Accepts the five upload formats (PNG, JPEG, GIF, BMP, WebP). The format
//! is sniffed from the bytes, never from the filename. Images with an alpha
//! channel are flattened onto a white background, since the engine works on
//! plain RGB buffers.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageReader};

use super::{DecodeError, DecodedImage};

/// Input formats accepted by [`decode_image`].
const SUPPORTED_FORMATS: [ImageFormat; 5] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::Bmp,
    ImageFormat::WebP,
];

/// Decode an uploaded image file into an RGB buffer.
///
/// # Arguments
///
/// * `bytes` - Raw file bytes in any of the supported formats
///
/// # Returns
///
/// A `DecodedImage` with RGB pixel data. For animated GIFs only the first
/// frame is decoded.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not one of the
/// supported formats, or `DecodeError::CorruptedFile` if decoding fails
/// partway through. A failed decode produces no partial result.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(flatten_to_rgb(img))
}

/// Convert a decoded image to RGB8, compositing any alpha onto white.
fn flatten_to_rgb(img: DynamicImage) -> DecodedImage {
    if !img.color().has_alpha() {
        return DecodedImage::from_rgb_image(img.into_rgb8());
    }

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);

    for px in rgba.pixels() {
        let [r, g, b, a] = px.0;
        let alpha = a as u16;
        // out = src * a + white * (1 - a), in integer math
        pixels.push(((r as u16 * alpha + 255 * (255 - alpha)) / 255) as u8);
        pixels.push(((g as u16 * alpha + 255 * (255 - alpha)) / 255) as u8);
        pixels.push(((b as u16 * alpha + 255 * (255 - alpha)) / 255) as u8);
    }

    DecodedImage::new(width, height, pixels)
}
