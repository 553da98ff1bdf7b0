//! Sepia tone via a linear color matrix.

use image::{Rgb, RgbImage};

/// Apply the sepia color matrix to every pixel.
///
/// ```text
/// R' = 0.393 R + 0.769 G + 0.189 B
/// G' = 0.349 R + 0.686 G + 0.168 B
/// B' = 0.272 R + 0.534 G + 0.131 B
/// ```
///
/// Each output channel is clamped to `[0, 255]` and truncated. Bright
/// inputs saturate: pure white maps to `(255, 255, 238)`.
#[must_use = "returns the toned image"]
pub fn sepia(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
        Rgb([
            quantize(0.393 * r + 0.769 * g + 0.189 * b),
            quantize(0.349 * r + 0.686 * g + 0.168 * b),
            quantize(0.272 * r + 0.534 * g + 0.131 * b),
        ])
    })
}

/// Clamp and truncate a weighted sum back into `u8`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_saturates_to_sepia_white_point() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let toned = sepia(&img);
        for pixel in toned.pixels() {
            // Red and green sums exceed 255 and clamp; blue truncates
            // from 238.9.
            assert_eq!(pixel.0, [255, 255, 238]);
        }
    }

    #[test]
    fn black_stays_black() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        assert_eq!(sepia(&img).get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn mid_gray_matches_matrix() {
        let img = RgbImage::from_pixel(1, 1, Rgb([100, 100, 100]));
        // Row sums: 1.351, 1.203, 0.937 -> 135.1, 120.3, 93.7.
        assert_eq!(sepia(&img).get_pixel(0, 0).0, [135, 120, 93]);
    }

    #[test]
    fn output_is_warm() {
        // Sepia pushes red above green above blue for any non-black
        // input.
        let img = RgbImage::from_pixel(1, 1, Rgb([60, 120, 180]));
        let Rgb([r, g, b]) = *sepia(&img).get_pixel(0, 0);
        assert!(r >= g && g >= b, "expected R >= G >= B, got {r},{g},{b}");
    }

    #[test]
    fn dimensions_preserved() {
        let img = RgbImage::new(7, 3);
        assert_eq!(sepia(&img).dimensions(), (7, 3));
    }
}
