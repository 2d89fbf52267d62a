//! WASM bindings for target geometry resolution.
//!
//! The resize request crosses the boundary as a plain JavaScript object
//! matching the core `ResizeRequest` enum, for example:
//!
//! ```typescript
//! { Exact: { width: 800, height: 600, keep_aspect: true } }
//! { ScalePercent: 50 }
//! { Preset: "InstagramPost" }
//! ```

use pixelpress_core::geometry::{self, ResizeRequest};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Resolved output dimensions, returned as `{ width, height }`.
#[derive(Serialize)]
struct TargetSize {
    width: u32,
    height: u32,
}

/// Resolve the final output dimensions for a resize request.
///
/// # Arguments
///
/// * `src_width`, `src_height` - Source image dimensions (must be positive)
/// * `request` - A `ResizeRequest` object (see module docs for the shape)
///
/// # Returns
///
/// An object `{ width, height }`, or an error if the request object does
/// not match the expected shape.
#[wasm_bindgen]
pub fn compute_target_size(
    src_width: u32,
    src_height: u32,
    request: JsValue,
) -> Result<JsValue, JsValue> {
    let request: ResizeRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid resize request: {}", e)))?;

    let (width, height) = geometry::compute_target_size(src_width, src_height, &request);
    serde_wasm_bindgen::to_value(&TargetSize { width, height })
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use pixelpress_core::geometry::{compute_target_size, ResizeRequest, SizePreset};

    // The JsValue plumbing only runs in a browser; these cover the request
    // shapes the binding forwards to the core function.

    #[test]
    fn test_exact_locked_request() {
        let request = ResizeRequest::Exact {
            width: 800,
            height: 800,
            keep_aspect: true,
        };
        assert_eq!(compute_target_size(1000, 500, &request), (800, 400));
    }

    #[test]
    fn test_preset_request() {
        let request = ResizeRequest::Preset(SizePreset::Hd);
        assert_eq!(compute_target_size(100, 100, &request), (1920, 1080));
    }
}
