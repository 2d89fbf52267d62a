//! WASM bindings for single-file and batch processing.
//!
//! Batch uploads accumulate in a [`BatchProcessor`] and are processed in
//! one call, which returns a handle to the finished ZIP archive plus the
//! per-file failure list when the skip policy is selected.

use crate::pipeline::parse_operation;
use crate::types::output_spec;
use pixelpress_core::batch::{self, BatchInput, BatchOptions, BatchOutcome, ErrorPolicy};
use pixelpress_core::geometry::ResizeRequest;
use pixelpress_core::EffectParams;
use wasm_bindgen::prelude::*;

/// Process one uploaded file end to end.
///
/// Decodes the bytes, resolves the target geometry, runs the effect
/// pipeline, and re-encodes.
///
/// # Arguments
///
/// * `bytes` - Raw upload bytes
/// * `request` - A `ResizeRequest` object
/// * `params` - An `EffectParams` object
/// * `format` - `"jpeg"`, `"png"`, or `"webp"`
/// * `quality` - 1-100, JPEG only
#[wasm_bindgen]
pub fn process_file(
    bytes: &[u8],
    request: JsValue,
    params: JsValue,
    format: &str,
    quality: u8,
) -> Result<ProcessedFile, JsValue> {
    let request: ResizeRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid resize request: {}", e)))?;
    let params: EffectParams = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid effect params: {}", e)))?;

    let result = batch::process_single(bytes, &request, &params, &output_spec(format, quality))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(ProcessedFile { inner: result })
}

/// A processed single upload, ready for download.
#[wasm_bindgen]
pub struct ProcessedFile {
    inner: batch::ProcessedFile,
}

#[wasm_bindgen]
impl ProcessedFile {
    /// Suggested download filename
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.inner.filename.clone()
    }

    /// Final output width
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Final output height
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Encoded output bytes as a Uint8Array (copies the data)
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }
}

/// Accumulates uploads and processes them into a ZIP archive.
///
/// # Example
///
/// ```typescript
/// const processor = new BatchProcessor();
/// for (const file of files) {
///   processor.add_file(file.name, new Uint8Array(await file.arrayBuffer()));
/// }
/// const archive = processor.process(
///   { ScalePercent: 50 }, 'ResizeOnly', 'jpeg', 85, true,
/// );
/// ```
#[wasm_bindgen]
#[derive(Default)]
pub struct BatchProcessor {
    inputs: Vec<BatchInput>,
}

#[wasm_bindgen]
impl BatchProcessor {
    /// Create an empty batch.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files added so far
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Whether the batch is empty
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Add one upload to the batch.
    pub fn add_file(&mut self, name: String, bytes: Vec<u8>) {
        self.inputs.push(BatchInput { name, bytes });
    }

    /// Remove all files from the batch.
    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    /// Process every added file into a ZIP archive.
    ///
    /// # Arguments
    ///
    /// * `request` - A `ResizeRequest` object shared by all files
    /// * `operation` - `"ResizeOnly"`, `"ResizeEnhance"`, or `"ResizeCompress"`
    /// * `format` - `"jpeg"`, `"png"`, or `"webp"`
    /// * `quality` - 1-100, JPEG only
    /// * `skip_errors` - Skip files that fail instead of failing the batch
    pub fn process(
        &self,
        request: JsValue,
        operation: &str,
        format: &str,
        quality: u8,
        skip_errors: bool,
    ) -> Result<BatchArchive, JsValue> {
        let request: ResizeRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|e| JsValue::from_str(&format!("Invalid resize request: {}", e)))?;

        let options = BatchOptions {
            request,
            operation: parse_operation(operation)?,
            output: output_spec(format, quality),
            on_error: if skip_errors {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            },
        };

        batch::process_batch(&self.inputs, &options)
            .map(|outcome| BatchArchive { inner: outcome })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// A finished batch archive.
#[wasm_bindgen]
pub struct BatchArchive {
    inner: BatchOutcome,
}

#[wasm_bindgen]
impl BatchArchive {
    /// Suggested download filename for the archive
    #[wasm_bindgen(getter)]
    pub fn archive_name(&self) -> String {
        self.inner.archive_name.clone()
    }

    /// Entry names written to the archive, in input order
    #[wasm_bindgen(getter)]
    pub fn entries(&self) -> Vec<String> {
        self.inner.entries.clone()
    }

    /// Files skipped under the skip policy, as `{ name, error }` objects
    #[wasm_bindgen(getter)]
    pub fn failures(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.failures)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// ZIP archive bytes as a Uint8Array (copies the data)
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.archive.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![80u8; (width * height * 3) as usize];
        pixelpress_core::encode::encode_png(&pixels, width, height).unwrap()
    }

    #[test]
    fn test_batch_processor_accumulates() {
        let mut processor = BatchProcessor::new();
        assert!(processor.is_empty());

        processor.add_file("a.png".to_string(), png_bytes(10, 10));
        processor.add_file("b.png".to_string(), png_bytes(20, 10));
        assert_eq!(processor.len(), 2);

        processor.clear();
        assert!(processor.is_empty());
    }

    #[test]
    fn test_batch_core_path() {
        // The JsValue plumbing only runs in a browser; drive the same core
        // path the binding forwards to.
        let inputs = vec![BatchInput {
            name: "a.png".to_string(),
            bytes: png_bytes(40, 20),
        }];
        let options = BatchOptions {
            request: ResizeRequest::ScalePercent(50),
            operation: parse_operation("ResizeOnly").unwrap(),
            output: output_spec("png", 85),
            on_error: ErrorPolicy::Abort,
        };

        let outcome = batch::process_batch(&inputs, &options).unwrap();
        let archive = BatchArchive { inner: outcome };

        assert_eq!(archive.entries(), vec!["a_processed_20x10.png".to_string()]);
        assert!(!archive.bytes().is_empty());
        assert!(archive.archive_name().ends_with(".zip"));
    }
}
