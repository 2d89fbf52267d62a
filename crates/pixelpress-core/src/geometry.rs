//! Target geometry resolution.
//!
//! Maps a [`ResizeRequest`] plus the source dimensions to the final output
//! dimensions. This is a pure, total function: the caller guarantees
//! positive source dimensions, and the result is always at least 1x1.
//!
//! Aspect-locked requests fit the image inside the requested box without
//! cropping: the scale factor is `min(target_w / src_w, target_h / src_h)`
//! and both edges are scaled by it.

use serde::{Deserialize, Serialize};

/// Named output resolutions offered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizePreset {
    // Standard sizes
    Thumbnail,
    Small,
    Medium,
    Large,
    Hd,
    Uhd4k,
    // Social media
    InstagramPost,
    InstagramStory,
    FacebookCover,
    TwitterHeader,
    YoutubeThumbnail,
    LinkedinBanner,
}

impl SizePreset {
    /// The fixed output dimensions for this preset.
    ///
    /// Presets are applied verbatim, with no aspect adjustment.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            SizePreset::Thumbnail => (150, 150),
            SizePreset::Small => (400, 300),
            SizePreset::Medium => (800, 600),
            SizePreset::Large => (1200, 900),
            SizePreset::Hd => (1920, 1080),
            SizePreset::Uhd4k => (3840, 2160),
            SizePreset::InstagramPost => (1080, 1080),
            SizePreset::InstagramStory => (1080, 1920),
            SizePreset::FacebookCover => (1200, 630),
            SizePreset::TwitterHeader => (1200, 675),
            SizePreset::YoutubeThumbnail => (1280, 720),
            SizePreset::LinkedinBanner => (1200, 627),
        }
    }

    /// Human-readable label, matching the UI dropdown.
    pub fn label(self) -> &'static str {
        match self {
            SizePreset::Thumbnail => "Thumbnail",
            SizePreset::Small => "Small",
            SizePreset::Medium => "Medium",
            SizePreset::Large => "Large",
            SizePreset::Hd => "HD",
            SizePreset::Uhd4k => "4K",
            SizePreset::InstagramPost => "Instagram Post",
            SizePreset::InstagramStory => "Instagram Story",
            SizePreset::FacebookCover => "Facebook Cover",
            SizePreset::TwitterHeader => "Twitter Header",
            SizePreset::YoutubeThumbnail => "YouTube Thumbnail",
            SizePreset::LinkedinBanner => "LinkedIn Banner",
        }
    }
}

/// How the output dimensions should be derived from the source.
///
/// Exactly one variant is active per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResizeRequest {
    /// Explicit width and height. With `keep_aspect` the image is scaled
    /// to fit inside the box; without it the dimensions are used verbatim.
    Exact {
        width: u32,
        height: u32,
        keep_aspect: bool,
    },
    /// Uniform scale as a percentage of the source size (100 = identity).
    ScalePercent(u32),
    /// A named fixed resolution, applied verbatim.
    Preset(SizePreset),
}

/// Resolve the final output dimensions for a resize request.
///
/// # Arguments
///
/// * `src_width` - Source image width (must be positive)
/// * `src_height` - Source image height (must be positive)
/// * `request` - The resize request from the UI
///
/// # Returns
///
/// The final (width, height). Fractional results round down, and both
/// dimensions are clamped to at least 1.
pub fn compute_target_size(src_width: u32, src_height: u32, request: &ResizeRequest) -> (u32, u32) {
    match *request {
        ResizeRequest::Exact {
            width,
            height,
            keep_aspect: false,
        } => (width.max(1), height.max(1)),
        ResizeRequest::Exact {
            width,
            height,
            keep_aspect: true,
        } => {
            let scale = f64::min(
                width as f64 / src_width as f64,
                height as f64 / src_height as f64,
            );
            scale_dimensions(src_width, src_height, scale)
        }
        ResizeRequest::ScalePercent(percent) => {
            scale_dimensions(src_width, src_height, percent as f64 / 100.0)
        }
        ResizeRequest::Preset(preset) => preset.dimensions(),
    }
}

/// Scale both dimensions by a factor, rounding down and clamping to 1.
fn scale_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let w = (width as f64 * scale).floor() as u32;
    let h = (height as f64 * scale).floor() as u32;
    (w.max(1), h.max(1))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn source_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=5000, 1u32..=5000)
    }

    proptest! {
        /// Property: aspect-locked results always fit within the requested box.
        #[test]
        fn prop_locked_fits_box(
            (src_w, src_h) in source_strategy(),
            (box_w, box_h) in (1u32..=5000, 1u32..=5000),
        ) {
            let request = ResizeRequest::Exact {
                width: box_w,
                height: box_h,
                keep_aspect: true,
            };
            let (w, h) = compute_target_size(src_w, src_h, &request);

            // Result fits in the box except when clamping to 1 forced it up
            prop_assert!(w <= box_w.max(1));
            prop_assert!(h <= box_h.max(1));
            prop_assert!(w >= 1 && h >= 1);
        }

        /// Property: aspect-locked results preserve the source ratio within rounding.
        #[test]
        fn prop_locked_preserves_ratio(
            (src_w, src_h) in (10u32..=5000, 10u32..=5000),
            (box_w, box_h) in (10u32..=5000, 10u32..=5000),
        ) {
            let request = ResizeRequest::Exact {
                width: box_w,
                height: box_h,
                keep_aspect: true,
            };
            let (w, h) = compute_target_size(src_w, src_h, &request);

            // Both edges are off from the ideal src * scale by less than one
            // pixel (floor, then clamp to 1), so the cross products differ by
            // at most src_w + src_h
            let cross = (w as i64 * src_h as i64) - (h as i64 * src_w as i64);
            prop_assert!(
                cross.unsigned_abs() <= (src_w + src_h) as u64,
                "ratio drifted: {}x{} from {}x{}",
                w,
                h,
                src_w,
                src_h
            );
        }

        /// Property: results are never zero in any mode.
        #[test]
        fn prop_never_zero(
            (src_w, src_h) in source_strategy(),
            percent in 1u32..=500,
        ) {
            let (w, h) = compute_target_size(src_w, src_h, &ResizeRequest::ScalePercent(percent));
            prop_assert!(w >= 1 && h >= 1);
        }

        /// Property: 100 percent scale is a dimension identity.
        #[test]
        fn prop_hundred_percent_identity((src_w, src_h) in source_strategy()) {
            let (w, h) = compute_target_size(src_w, src_h, &ResizeRequest::ScalePercent(100));
            prop_assert_eq!((w, h), (src_w, src_h));
        }
    }
}
