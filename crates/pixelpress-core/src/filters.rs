//! The fixed filter palette.
//!
//! Most filters are small integer convolution kernels; the kernel
//! constants match the classic filter set the UI exposes (blur, detail,
//! edge enhance, emboss, find edges, smooth, sharpen). Grayscale collapses
//! to luminance and replicates it across all three channels, and vintage
//! is a desaturate-then-boost-contrast combination.
//!
//! Convolution samples outside the image are clamped to the nearest edge
//! pixel.

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;
use crate::enhance::{adjust_contrast, adjust_saturation};
use crate::luminance::calculate_luminance_u8;

/// A square convolution kernel with integer coefficients.
///
/// The output channel value is `sum(coeff * sample) / divisor + offset`,
/// rounded and clamped to [0, 255].
pub(crate) struct Kernel {
    pub size: usize,
    pub coeffs: &'static [i32],
    pub divisor: f32,
    pub offset: f32,
}

pub(crate) const BLUR_KERNEL: Kernel = Kernel {
    size: 5,
    #[rustfmt::skip]
    coeffs: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    divisor: 16.0,
    offset: 0.0,
};

pub(crate) const DETAIL_KERNEL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    coeffs: &[
         0, -1,  0,
        -1, 10, -1,
         0, -1,  0,
    ],
    divisor: 6.0,
    offset: 0.0,
};

pub(crate) const EDGE_ENHANCE_KERNEL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    coeffs: &[
        -1, -1, -1,
        -1, 10, -1,
        -1, -1, -1,
    ],
    divisor: 2.0,
    offset: 0.0,
};

pub(crate) const EMBOSS_KERNEL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    coeffs: &[
        -1, 0, 0,
         0, 1, 0,
         0, 0, 0,
    ],
    divisor: 1.0,
    offset: 128.0,
};

pub(crate) const FIND_EDGES_KERNEL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    coeffs: &[
        -1, -1, -1,
        -1,  8, -1,
        -1, -1, -1,
    ],
    divisor: 1.0,
    offset: 0.0,
};

pub(crate) const SMOOTH_KERNEL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    coeffs: &[
        1, 1, 1,
        1, 5, 1,
        1, 1, 1,
    ],
    divisor: 13.0,
    offset: 0.0,
};

pub(crate) const SHARPEN_KERNEL: Kernel = Kernel {
    size: 3,
    #[rustfmt::skip]
    coeffs: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    divisor: 16.0,
    offset: 0.0,
};

/// The named filters offered by the effects panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterEffect {
    /// Identity, no filtering.
    #[default]
    None,
    /// Soft 5x5 box-ring blur.
    Blur,
    /// Detail enhancement.
    Detail,
    /// Edge enhancement.
    EdgeEnhance,
    /// Relief emboss around mid-gray.
    Emboss,
    /// Edge detection on a black background.
    FindEdges,
    /// Gentle 3x3 smoothing.
    Smooth,
    /// Kernel sharpening.
    Sharpen,
    /// Luminance grayscale, replicated to all channels.
    Grayscale,
    /// Desaturate to 0.8x then boost contrast to 1.2x.
    Vintage,
}

/// Apply a named filter to an image, returning a new image.
///
/// `FilterEffect::None` returns a plain copy.
pub fn apply_filter(image: &DecodedImage, effect: FilterEffect) -> DecodedImage {
    match effect {
        FilterEffect::None => image.clone(),
        FilterEffect::Blur => convolve(image, &BLUR_KERNEL),
        FilterEffect::Detail => convolve(image, &DETAIL_KERNEL),
        FilterEffect::EdgeEnhance => convolve(image, &EDGE_ENHANCE_KERNEL),
        FilterEffect::Emboss => convolve(image, &EMBOSS_KERNEL),
        FilterEffect::FindEdges => convolve(image, &FIND_EDGES_KERNEL),
        FilterEffect::Smooth => convolve(image, &SMOOTH_KERNEL),
        FilterEffect::Sharpen => convolve(image, &SHARPEN_KERNEL),
        FilterEffect::Grayscale => grayscale(image),
        FilterEffect::Vintage => adjust_contrast(&adjust_saturation(image, 0.8), 1.2),
    }
}

/// Convolve an image with a kernel, clamping samples to the image edge.
pub(crate) fn convolve(image: &DecodedImage, kernel: &Kernel) -> DecodedImage {
    let (width, height) = (image.width as i64, image.height as i64);
    let radius = (kernel.size / 2) as i64;
    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..height {
        for x in 0..width {
            let mut sum = [0i64; 3];

            for ky in 0..kernel.size as i64 {
                for kx in 0..kernel.size as i64 {
                    let coeff = kernel.coeffs[(ky * kernel.size as i64 + kx) as usize] as i64;
                    if coeff == 0 {
                        continue;
                    }

                    let sx = (x + kx - radius).clamp(0, width - 1);
                    let sy = (y + ky - radius).clamp(0, height - 1);
                    let idx = ((sy * width + sx) * 3) as usize;

                    sum[0] += coeff * image.pixels[idx] as i64;
                    sum[1] += coeff * image.pixels[idx + 1] as i64;
                    sum[2] += coeff * image.pixels[idx + 2] as i64;
                }
            }

            let out_idx = ((y * width + x) * 3) as usize;
            for c in 0..3 {
                let v = sum[c] as f32 / kernel.divisor + kernel.offset;
                output[out_idx + c] = v.clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    DecodedImage::new(image.width, image.height, output)
}

/// Convert to luminance grayscale, keeping three channels.
fn grayscale(image: &DecodedImage) -> DecodedImage {
    let mut pixels = Vec::with_capacity(image.pixels.len());
    for chunk in image.pixels.chunks_exact(3) {
        let gray = calculate_luminance_u8(chunk[0], chunk[1], chunk[2]);
        pixels.extend_from_slice(&[gray, gray, gray]);
    }
    DecodedImage::new(image.width, image.height, pixels)
}
