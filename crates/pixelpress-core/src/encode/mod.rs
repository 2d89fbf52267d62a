//! Re-encoding processed images for download.
//!
//! Output formats are JPEG, PNG, and WebP. The quality setting applies to
//! JPEG only; PNG is always lossless and the WebP encoder used here is the
//! lossless variant.

mod jpeg;
mod png;
mod webp;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodedImage;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use webp::encode_webp;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Encoding failed
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Output format for re-encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// The filename extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
        }
    }

    /// Whether the quality setting has any effect for this format.
    pub fn is_lossy(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

/// Target format and quality for the encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub format: OutputFormat,
    /// Quality 1-100. Only meaningful for lossy formats.
    pub quality: u8,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: 95,
        }
    }
}

/// Encode an image according to an output spec.
///
/// # Errors
///
/// Returns `EncodeError` if the image has zero dimensions, a mismatched
/// pixel buffer, or the codec fails.
pub fn encode_image(image: &DecodedImage, spec: &OutputSpec) -> Result<Vec<u8>, EncodeError> {
    match spec.format {
        OutputFormat::Jpeg => encode_jpeg(&image.pixels, image.width, image.height, spec.quality),
        OutputFormat::Png => encode_png(&image.pixels, image.width, image.height),
        OutputFormat::WebP => encode_webp(&image.pixels, image.width, image.height),
    }
}

/// Validate dimensions and pixel buffer length before encoding.
pub(crate) fn validate_buffer(pixels: &[u8], width: u32, height: u32) -> Result<(), EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Jpeg.extension(), "jpeg");
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::WebP.extension(), "webp");
    }

    #[test]
    fn test_only_jpeg_is_lossy() {
        assert!(OutputFormat::Jpeg.is_lossy());
        assert!(!OutputFormat::Png.is_lossy());
        assert!(!OutputFormat::WebP.is_lossy());
    }

    #[test]
    fn test_encode_image_dispatch() {
        let img = DecodedImage::new(8, 8, vec![128u8; 8 * 8 * 3]);

        for format in [OutputFormat::Jpeg, OutputFormat::Png, OutputFormat::WebP] {
            let spec = OutputSpec { format, quality: 90 };
            let bytes = encode_image(&img, &spec).unwrap();
            assert!(!bytes.is_empty(), "{:?} produced no output", format);
        }
    }

    #[test]
    fn test_validate_buffer_rejects_zero_dimensions() {
        assert!(matches!(
            validate_buffer(&[], 0, 10),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            validate_buffer(&[], 10, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_validate_buffer_rejects_length_mismatch() {
        let pixels = vec![0u8; 10];
        assert!(matches!(
            validate_buffer(&pixels, 2, 2),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }
}
