//! The transform pipeline.
//!
//! One call takes a decoded image plus the resolved target geometry and an
//! [`EffectParams`](crate::EffectParams), and produces a new image. The
//! step order is a contract, not an implementation detail, because the
//! steps do not commute:
//!
//! 1. Resize to the target geometry (Lanczos3)
//! 2. Brightness
//! 3. Contrast
//! 4. Saturation
//! 5. Sharpness
//! 6. Named filter
//! 7. Rotation (canvas expanded)
//! 8. Horizontal flip
//! 9. Vertical flip
//!
//! Multiplier steps are skipped at exactly 1.0, rotation at 0, so an
//! identity `EffectParams` reduces the pipeline to a plain resize.
//!
//! The batch tab's "Resize + Enhance" option uses a separate fixed
//! shortcut: resize, sharpness 1.2x, contrast 1.1x.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{DecodeError, DecodedImage, FilterType};
use crate::encode::EncodeError;
use crate::enhance::{adjust_brightness, adjust_contrast, adjust_saturation, adjust_sharpness};
use crate::filters::apply_filter;
use crate::transform::{flip_horizontal, flip_vertical, rotate};
use crate::EffectParams;

/// Fixed sharpness boost for the batch "Resize + Enhance" operation.
const ENHANCE_SHARPNESS: f32 = 1.2;

/// Fixed contrast boost for the batch "Resize + Enhance" operation.
const ENHANCE_CONTRAST: f32 = 1.1;

/// Errors surfaced by the pipeline and the batch driver.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The pixel buffer does not match its declared dimensions.
    #[error("Invalid image buffer: {0}")]
    InvalidImage(String),

    /// Writing the batch archive failed.
    #[error("Archive error: {0}")]
    Archive(String),
}

/// Per-batch processing operation, selected in the batch tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BatchOperation {
    /// Resize to the target geometry, nothing else.
    #[default]
    ResizeOnly,
    /// Resize, then the fixed sharpness/contrast boost.
    ResizeEnhance,
    /// Resize only; compression comes from the encoder quality setting.
    ResizeCompress,
}

/// Resize an image to exact dimensions.
///
/// Returns a clone when the dimensions already match.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, PipelineError> {
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidImage(format!(
            "target dimensions {}x{} must be non-zero",
            width, height
        )));
    }

    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| PipelineError::InvalidImage("pixel buffer size mismatch".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Run the full effect pipeline against a decoded image.
///
/// # Arguments
///
/// * `image` - Source image (never mutated)
/// * `width`, `height` - Target geometry from
///   [`compute_target_size`](crate::geometry::compute_target_size)
/// * `params` - Effect settings; the default value is a pure resize
///
/// # Returns
///
/// The transformed image. Its dimensions equal the target geometry unless
/// rotation expanded the canvas.
pub fn apply_pipeline(
    image: &DecodedImage,
    width: u32,
    height: u32,
    params: &EffectParams,
) -> Result<DecodedImage, PipelineError> {
    let mut out = resize(image, width, height, FilterType::Lanczos3)?;

    if params.brightness != 1.0 {
        out = adjust_brightness(&out, params.brightness);
    }
    if params.contrast != 1.0 {
        out = adjust_contrast(&out, params.contrast);
    }
    if params.saturation != 1.0 {
        out = adjust_saturation(&out, params.saturation);
    }
    if params.sharpness != 1.0 {
        out = adjust_sharpness(&out, params.sharpness);
    }

    out = apply_filter(&out, params.filter);

    if params.rotation_degrees != 0 {
        out = rotate(&out, params.rotation_degrees as f64);
    }
    if params.flip_horizontal {
        out = flip_horizontal(&out);
    }
    if params.flip_vertical {
        out = flip_vertical(&out);
    }

    Ok(out)
}

/// Run one of the batch operations against a decoded image.
///
/// `ResizeEnhance` applies the fixed boost, independent of any
/// `EffectParams`; the other operations are plain resizes.
pub fn process_image(
    image: &DecodedImage,
    width: u32,
    height: u32,
    operation: BatchOperation,
) -> Result<DecodedImage, PipelineError> {
    let resized = resize(image, width, height, FilterType::Lanczos3)?;

    match operation {
        BatchOperation::ResizeOnly | BatchOperation::ResizeCompress => Ok(resized),
        BatchOperation::ResizeEnhance => {
            let sharpened = adjust_sharpness(&resized, ENHANCE_SHARPNESS);
            Ok(adjust_contrast(&sharpened, ENHANCE_CONTRAST))
        }
    }
}
