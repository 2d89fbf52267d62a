//! Image decoding WASM bindings.
//!
//! This module exposes the pixelpress-core decoder to JavaScript. Format
//! detection is automatic; PNG, JPEG, GIF, BMP, and WebP uploads are
//! accepted and normalized to RGB with any alpha composited onto white.

use crate::types::JsImage;
use pixelpress_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an uploaded image from bytes.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsImage` containing the decoded RGB pixel data, or an error if the
/// format is unsupported or the data is corrupted.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
