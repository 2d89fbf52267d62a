//! Pixelpress Core - Image processing library
//!
//! This crate provides the core image processing functionality for
//! Pixelpress: decoding uploads, resolving target geometry, the effect
//! pipeline (enhancements, filters, rotation, flips), re-encoding, and
//! batch processing into ZIP archives.

pub mod batch;
pub mod decode;
pub mod encode;
pub mod enhance;
pub mod filters;
pub mod geometry;
pub mod luminance;
pub mod naming;
pub mod pipeline;
pub mod transform;

pub use batch::{
    process_batch, process_single, BatchInput, BatchOptions, BatchOutcome, ErrorPolicy,
    ProcessedFile,
};
pub use decode::{decode_image, DecodeError, DecodedImage, FilterType};
pub use encode::{encode_image, EncodeError, OutputFormat, OutputSpec};
pub use filters::FilterEffect;
pub use geometry::{compute_target_size, ResizeRequest, SizePreset};
pub use pipeline::{apply_pipeline, process_image, resize, BatchOperation, PipelineError};
pub use transform::{compute_rotated_bounds, flip_horizontal, flip_vertical, rotate};

/// Effect settings for the transform pipeline.
///
/// Enhancement values are multipliers where 1.0 means no change. The
/// default value is a complete identity: running the pipeline with it is
/// equivalent to a plain resize.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectParams {
    /// Brightness multiplier (0.0 = black, 1.0 = unchanged)
    pub brightness: f32,
    /// Contrast multiplier (0.0 = flat gray, 1.0 = unchanged)
    pub contrast: f32,
    /// Saturation multiplier (0.0 = grayscale, 1.0 = unchanged)
    pub saturation: f32,
    /// Sharpness multiplier (<1.0 = smoothed, 1.0 = unchanged)
    pub sharpness: f32,
    /// Named filter applied after the enhancements
    pub filter: FilterEffect,
    /// Counterclockwise rotation in degrees; the canvas expands to fit
    pub rotation_degrees: i32,
    /// Mirror left-right after rotation
    pub flip_horizontal: bool,
    /// Mirror top-bottom after the horizontal flip
    pub flip_vertical: bool,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            sharpness: 1.0,
            filter: FilterEffect::None,
            rotation_degrees: 0,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }
}

impl EffectParams {
    /// Create a new EffectParams with identity values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all settings are at their identity values
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}
