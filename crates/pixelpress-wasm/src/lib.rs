//! Pixelpress WASM - WebAssembly bindings for Pixelpress
//!
//! This crate provides WASM bindings to expose the pixelpress-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG, JPEG, GIF, BMP, WebP)
//! - `geometry` - Target size resolution bindings
//! - `pipeline` - Effect pipeline bindings (resize, enhance, filter, rotate, flip)
//! - `encode` - Image encoding bindings (JPEG, PNG, WebP export)
//! - `batch` - Single-file and batch-to-ZIP processing bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_pipeline } from '@pixelpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode an upload
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod batch;
mod decode;
mod encode;
mod geometry;
mod pipeline;
mod types;

// Re-export public types
pub use batch::{process_file, BatchArchive, BatchProcessor, ProcessedFile};
pub use decode::decode_image;
pub use encode::encode_image;
pub use geometry::compute_target_size;
pub use pipeline::{apply_pipeline, process_image, resize};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
