//! Horizontal and vertical mirroring.

use crate::decode::DecodedImage;

/// Mirror an image left-right.
pub fn flip_horizontal(image: &DecodedImage) -> DecodedImage {
    let (width, height) = (image.width as usize, image.height as usize);
    let mut pixels = vec![0u8; image.pixels.len()];

    for y in 0..height {
        for x in 0..width {
            let src = (y * width + x) * 3;
            let dst = (y * width + (width - 1 - x)) * 3;
            pixels[dst..dst + 3].copy_from_slice(&image.pixels[src..src + 3]);
        }
    }

    DecodedImage::new(image.width, image.height, pixels)
}

/// Mirror an image top-bottom.
pub fn flip_vertical(image: &DecodedImage) -> DecodedImage {
    let (width, height) = (image.width as usize, image.height as usize);
    let row_len = width * 3;
    let mut pixels = vec![0u8; image.pixels.len()];

    for y in 0..height {
        let src = y * row_len;
        let dst = (height - 1 - y) * row_len;
        pixels[dst..dst + row_len].copy_from_slice(&image.pixels[src..src + row_len]);
    }

    DecodedImage::new(image.width, image.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x2 image with four distinct pixels:
    /// A B
    /// C D
    fn quad() -> DecodedImage {
        DecodedImage::new(
            2,
            2,
            vec![
                10, 10, 10, // A
                20, 20, 20, // B
                30, 30, 30, // C
                40, 40, 40, // D
            ],
        )
    }

    #[test]
    fn test_flip_horizontal_swaps_columns() {
        let out = flip_horizontal(&quad());
        // B A / D C
        assert_eq!(out.pixels[0], 20);
        assert_eq!(out.pixels[3], 10);
        assert_eq!(out.pixels[6], 40);
        assert_eq!(out.pixels[9], 30);
    }

    #[test]
    fn test_flip_vertical_swaps_rows() {
        let out = flip_vertical(&quad());
        // C D / A B
        assert_eq!(out.pixels[0], 30);
        assert_eq!(out.pixels[3], 40);
        assert_eq!(out.pixels[6], 10);
        assert_eq!(out.pixels[9], 20);
    }

    #[test]
    fn test_double_flip_is_identity() {
        let img = quad();
        assert_eq!(flip_horizontal(&flip_horizontal(&img)).pixels, img.pixels);
        assert_eq!(flip_vertical(&flip_vertical(&img)).pixels, img.pixels);
    }

    #[test]
    fn test_both_flips_equal_180_rotation() {
        let img = quad();
        let flipped = flip_vertical(&flip_horizontal(&img));
        let rotated = crate::transform::rotate(&img, 180.0);
        assert_eq!(flipped.pixels, rotated.pixels);
    }

    #[test]
    fn test_flip_single_row() {
        let img = DecodedImage::new(3, 1, vec![1, 1, 1, 2, 2, 2, 3, 3, 3]);
        let out = flip_horizontal(&img);
        assert_eq!(out.pixels, vec![3, 3, 3, 2, 2, 2, 1, 1, 1]);

        let out = flip_vertical(&img);
        assert_eq!(out.pixels, img.pixels);
    }
}
