//! Arbitrary-angle rotation with canvas expansion.
//!
//! The output canvas is the bounding box of the rotated image, so nothing
//! is ever cropped. Pixels are produced by inverse mapping: for each output
//! pixel the corresponding source location is computed and sampled with
//! bilinear interpolation. Output pixels whose source location falls
//! outside the image are filled white, since the engine's RGB buffers have
//! no alpha channel to leave transparent.

use crate::decode::DecodedImage;

/// Background fill for canvas areas the rotated image does not cover.
const FILL: [u8; 3] = [255, 255, 255];

/// Compute the bounding box of an image rotated by the given angle.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// Tuple of (new_width, new_height), each at least 1.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    let normalized = angle_degrees.rem_euclid(360.0);

    // Fast paths for the axis-aligned angles
    if normalized.abs() < 0.001 || (normalized - 360.0).abs() < 0.001 {
        return (width, height);
    }
    if (normalized - 90.0).abs() < 0.001 || (normalized - 270.0).abs() < 0.001 {
        return (height, width);
    }
    if (normalized - 180.0).abs() < 0.001 {
        return (width, height);
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // Bounding box of a rotated rectangle:
    // new_w = |w*cos| + |h*sin|, new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin).round() as u32;
    let new_h = (w * sin + h * cos).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image around its center, expanding the canvas to fit.
///
/// # Arguments
///
/// * `image` - Source image
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// A new `DecodedImage` sized to the rotated bounding box. Uncovered
/// canvas is filled white.
pub fn rotate(image: &DecodedImage, angle_degrees: f64) -> DecodedImage {
    // Fast path: no rotation needed
    if angle_degrees.rem_euclid(360.0) < 0.001 {
        return image.clone();
    }

    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);

    // Negate the angle so a positive argument rotates counter-clockwise
    // on screen (y grows downward)
    let angle_rad = -angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = Vec::with_capacity((dst_w * dst_h * 3) as usize);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Pixel centers sit at integer + 0.5 in continuous coordinates
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            // Inverse rotation back into source coordinates
            let src_x = dx * cos - dy * sin + src_cx;
            let src_y = dx * sin + dy * cos + src_cy;

            let pixel = sample_bilinear(image, src_x - 0.5, src_y - 0.5);
            output.extend_from_slice(&pixel);
        }
    }

    DecodedImage::new(dst_w, dst_h, output)
}

/// Get a pixel as [f64; 3], clamping coordinates to the image bounds.
#[inline]
fn get_pixel_clamped(image: &DecodedImage, px: i64, py: i64) -> [f64; 3] {
    let x = px.clamp(0, image.width as i64 - 1) as usize;
    let y = py.clamp(0, image.height as i64 - 1) as usize;
    let idx = (y * image.width as usize + x) * 3;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a source location with bilinear interpolation.
///
/// Locations more than half a pixel outside the image return the white
/// background fill.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (image.width as f64, image.height as f64);

    if x < -0.5 || x > w - 0.5 || y < -0.5 || y > h - 0.5 {
        return FILL;
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = get_pixel_clamped(image, x0, y0);
    let p10 = get_pixel_clamped(image, x0 + 1, y0);
    let p01 = get_pixel_clamped(image, x0, y0 + 1);
    let p11 = get_pixel_clamped(image, x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}
