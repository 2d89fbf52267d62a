//! WebP encoding.
//!
//! Uses the image crate's native WebP encoder, which is lossless. The UI's
//! quality slider therefore has no effect on WebP output.

use std::io::Cursor;

use image::codecs::webp::WebPEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use super::{validate_buffer, EncodeError};

/// Encode RGB pixel data to lossless WebP bytes.
pub fn encode_webp(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(pixels, width, height)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = WebPEncoder::new_lossless(&mut buffer);

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed {
            format: "WebP",
            message: e.to_string(),
        })?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_webp_basic() {
        let pixels = vec![200u8; 20 * 20 * 3];
        let webp_bytes = encode_webp(&pixels, 20, 20).unwrap();

        // RIFF....WEBP container header
        assert_eq!(&webp_bytes[0..4], b"RIFF");
        assert_eq!(&webp_bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_webp_round_trip_is_lossless() {
        let pixels: Vec<u8> = (0..8 * 8 * 3).map(|i| (i * 11 % 256) as u8).collect();

        let webp_bytes = encode_webp(&pixels, 8, 8).unwrap();
        let decoded = crate::decode::decode_image(&webp_bytes).unwrap();

        assert_eq!(decoded.pixels, pixels);
    }

    #[test]
    fn test_encode_webp_invalid_input() {
        assert!(matches!(
            encode_webp(&[], 10, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_webp(&[0u8; 7], 2, 2),
            Err(EncodeError::InvalidPixelData { .. })
        ));
    }
}
