//! Image encoding WASM bindings.
//!
//! Exposes re-encoding to JPEG, PNG, and WebP. The quality setting only
//! affects JPEG; PNG and WebP output are lossless.

use crate::types::{output_spec, JsImage};
use pixelpress_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image for download.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `format` - `"jpeg"`, `"png"`, or `"webp"` (anything else means JPEG)
/// * `quality` - 1-100, JPEG only
///
/// # Returns
///
/// The encoded bytes as a `Uint8Array`, or an error if the image buffer is
/// inconsistent or the codec fails.
///
/// # Example
///
/// ```typescript
/// const bytes = encode_image(processed, 'jpeg', 85);
/// const blob = new Blob([bytes], { type: 'image/jpeg' });
/// ```
#[wasm_bindgen]
pub fn encode_image(image: &JsImage, format: &str, quality: u8) -> Result<Vec<u8>, JsValue> {
    let src = image.to_decoded();
    encode::encode_image(&src, &output_spec(format, quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
