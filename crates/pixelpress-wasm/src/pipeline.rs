//! WASM bindings for the transform pipeline.
//!
//! Effect settings cross the boundary as a plain JavaScript object
//! matching the core `EffectParams` struct:
//!
//! ```typescript
//! {
//!   brightness: 1.0, contrast: 1.1, saturation: 1.0, sharpness: 1.2,
//!   filter: "None", rotation_degrees: 90,
//!   flip_horizontal: false, flip_vertical: false,
//! }
//! ```

use crate::types::JsImage;
use pixelpress_core::decode::FilterType;
use pixelpress_core::pipeline::{self, BatchOperation};
use pixelpress_core::EffectParams;
use wasm_bindgen::prelude::*;

/// Resize an image to exact dimensions with the Lanczos3 filter.
///
/// # Returns
///
/// A new `JsImage`, or an error if either dimension is zero.
#[wasm_bindgen]
pub fn resize(image: &JsImage, width: u32, height: u32) -> Result<JsImage, JsValue> {
    let src = image.to_decoded();
    pipeline::resize(&src, width, height, FilterType::Lanczos3)
        .map(JsImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run the full effect pipeline against a decoded image.
///
/// Steps run in a fixed order: resize, brightness, contrast, saturation,
/// sharpness, named filter, rotation, horizontal flip, vertical flip.
/// Identity settings are skipped, so default params reduce to a plain
/// resize.
///
/// # Arguments
///
/// * `image` - Source image (not mutated)
/// * `width`, `height` - Target geometry from `compute_target_size`
/// * `params` - An `EffectParams` object (see module docs for the shape)
///
/// # Returns
///
/// A new `JsImage`. Its dimensions equal the target geometry unless
/// rotation expanded the canvas.
#[wasm_bindgen]
pub fn apply_pipeline(
    image: &JsImage,
    width: u32,
    height: u32,
    params: JsValue,
) -> Result<JsImage, JsValue> {
    let params: EffectParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid effect params: {}", e)))?;

    let src = image.to_decoded();
    pipeline::apply_pipeline(&src, width, height, &params)
        .map(JsImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Run one of the batch operations against a decoded image.
///
/// Accepted operation values are `"ResizeOnly"`, `"ResizeEnhance"`, and
/// `"ResizeCompress"`.
#[wasm_bindgen]
pub fn process_image(
    image: &JsImage,
    width: u32,
    height: u32,
    operation: &str,
) -> Result<JsImage, JsValue> {
    let src = image.to_decoded();
    pipeline::process_image(&src, width, height, parse_operation(operation)?)
        .map(JsImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a batch operation name from JavaScript.
pub(crate) fn parse_operation(operation: &str) -> Result<BatchOperation, JsValue> {
    match operation {
        "ResizeOnly" => Ok(BatchOperation::ResizeOnly),
        "ResizeEnhance" => Ok(BatchOperation::ResizeEnhance),
        "ResizeCompress" => Ok(BatchOperation::ResizeCompress),
        other => Err(JsValue::from_str(&format!(
            "Unknown batch operation: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(width: u32, height: u32) -> JsImage {
        let pixels: Vec<u8> = (0..(width * height * 3) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_binding() {
        let img = test_image(100, 50);
        let result = resize(&img, 50, 25).unwrap();
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 25);
    }

    #[test]
    fn test_resize_zero_dimension_errors() {
        let img = test_image(10, 10);
        assert!(resize(&img, 0, 10).is_err());
    }

    #[test]
    fn test_process_image_binding() {
        let img = test_image(100, 100);
        let result = process_image(&img, 50, 50, "ResizeEnhance").unwrap();
        assert_eq!(result.width(), 50);
        assert_eq!(result.height(), 50);
    }

    #[test]
    fn test_parse_operation() {
        assert!(matches!(
            parse_operation("ResizeOnly"),
            Ok(BatchOperation::ResizeOnly)
        ));
        assert!(matches!(
            parse_operation("ResizeCompress"),
            Ok(BatchOperation::ResizeCompress)
        ));
        assert!(parse_operation("Sepia").is_err());
    }
}
