//! Single-file and batch processing drivers.
//!
//! These tie the whole engine together: decode the uploaded bytes, resolve
//! the target geometry, run the pipeline or batch operation, re-encode,
//! and derive the download filename. Batch processing iterates the inputs
//! sequentially and packs the results into a deflate-compressed ZIP.
//!
//! What happens when one file in a batch fails to decode is a policy
//! choice, not hardcoded: [`ErrorPolicy::Abort`] fails the whole batch,
//! [`ErrorPolicy::Skip`] records the failure and keeps going. Either way a
//! failed file contributes no partial archive entry.

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::decode::{decode_image, DecodedImage};
use crate::encode::{encode_image, OutputSpec};
use crate::geometry::{compute_target_size, ResizeRequest};
use crate::naming::{batch_archive_filename, batch_entry_filename, single_filename};
use crate::pipeline::{apply_pipeline, process_image, BatchOperation, PipelineError};
use crate::EffectParams;

/// One uploaded file in a batch.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Original filename, used to derive the archive entry name.
    pub name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// What to do when one file in a batch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Fail the whole batch on the first bad file.
    #[default]
    Abort,
    /// Skip bad files and report them per-entry.
    Skip,
}

/// Settings for a batch run.
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    pub request: ResizeRequest,
    pub operation: BatchOperation,
    pub output: OutputSpec,
    pub on_error: ErrorPolicy,
}

/// A file that failed during a `Skip`-policy batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchFailure {
    pub name: String,
    pub error: String,
}

/// Result of a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The ZIP archive bytes.
    pub archive: Vec<u8>,
    /// Suggested download name for the archive.
    pub archive_name: String,
    /// Entry names written to the archive, in input order.
    pub entries: Vec<String>,
    /// Files skipped under `ErrorPolicy::Skip` (always empty with `Abort`).
    pub failures: Vec<BatchFailure>,
}

/// Result of processing a single upload.
#[derive(Debug)]
pub struct ProcessedFile {
    /// Suggested download name.
    pub filename: String,
    /// Encoded output bytes.
    pub bytes: Vec<u8>,
    /// Final output width.
    pub width: u32,
    /// Final output height.
    pub height: u32,
}

/// Process one uploaded file end to end.
///
/// Decodes the bytes, resolves the target geometry against the source
/// dimensions, runs the effect pipeline, and re-encodes. The suggested
/// filename carries the final dimensions and a timestamp.
pub fn process_single(
    bytes: &[u8],
    request: &ResizeRequest,
    params: &EffectParams,
    output: &OutputSpec,
) -> Result<ProcessedFile, PipelineError> {
    let image = decode_image(bytes)?;
    let (width, height) = compute_target_size(image.width, image.height, request);
    let processed = apply_pipeline(&image, width, height, params)?;
    let encoded = encode_image(&processed, output)?;

    Ok(ProcessedFile {
        filename: single_filename(processed.width, processed.height, output.format),
        bytes: encoded,
        width: processed.width,
        height: processed.height,
    })
}

/// Process a batch of uploads into a ZIP archive.
///
/// Files are processed sequentially; each is decoded, resized per the
/// shared [`ResizeRequest`], run through the selected [`BatchOperation`],
/// encoded, and written as one deflate-compressed archive entry.
///
/// # Errors
///
/// With `ErrorPolicy::Abort`, the first bad file fails the whole call.
/// With `ErrorPolicy::Skip`, bad files end up in
/// [`BatchOutcome::failures`] and processing continues. Archive I/O errors
/// always fail the call.
pub fn process_batch(
    inputs: &[BatchInput],
    options: &BatchOptions,
) -> Result<BatchOutcome, PipelineError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let zip_options =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = Vec::new();
    let mut failures = Vec::new();

    for input in inputs {
        let (entry_name, encoded) = match process_entry(input, options) {
            Ok(result) => result,
            Err(err) => match options.on_error {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::Skip => {
                    failures.push(BatchFailure {
                        name: input.name.clone(),
                        error: err.to_string(),
                    });
                    continue;
                }
            },
        };

        writer
            .start_file(entry_name.as_str(), zip_options)
            .map_err(|e| PipelineError::Archive(e.to_string()))?;
        writer
            .write_all(&encoded)
            .map_err(|e| PipelineError::Archive(e.to_string()))?;
        entries.push(entry_name);
    }

    let cursor = writer
        .finish()
        .map_err(|e| PipelineError::Archive(e.to_string()))?;

    Ok(BatchOutcome {
        archive: cursor.into_inner(),
        archive_name: batch_archive_filename(),
        entries,
        failures,
    })
}

/// Process one batch input into its entry name and encoded bytes.
fn process_entry(
    input: &BatchInput,
    options: &BatchOptions,
) -> Result<(String, Vec<u8>), PipelineError> {
    let image = decode_image(&input.bytes)?;
    let (width, height) = compute_target_size(image.width, image.height, &options.request);
    let processed: DecodedImage = process_image(&image, width, height, options.operation)?;
    let encoded = encode_image(&processed, &options.output)?;

    let entry_name = batch_entry_filename(
        &input.name,
        processed.width,
        processed.height,
        options.output.format,
    );
    Ok((entry_name, encoded))
}
