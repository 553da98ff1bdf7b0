//! Pencil sketch: color-dodge of the luma channel against its blurred
//! inverse.
//!
//! Flat regions dodge to pure white; luminance boundaries survive as
//! dark strokes, which reads as pencil shading.

use image::{GrayImage, Luma, RgbImage};

use crate::grayscale;

/// Blur sigma for the inverted shading layer, derived from the classic
/// 21x21 kernel: `0.3 * ((21 - 1) / 2 - 1) + 0.8`.
const SHADING_SIGMA: f32 = 3.5;

/// Apply the pencil-sketch effect.
#[must_use = "returns the filtered image"]
pub fn pencil_sketch(image: &RgbImage) -> RgbImage {
    let gray = grayscale::to_gray(image);

    let inverted = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([!gray.get_pixel(x, y).0[0]])
    });
    let shading = imageproc::filter::gaussian_blur_f32(&inverted, SHADING_SIGMA);

    let sketch = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        Luma([dodge(
            gray.get_pixel(x, y).0[0],
            shading.get_pixel(x, y).0[0],
        )])
    });
    grayscale::gray_to_rgb(&sketch)
}

/// Color-dodge blend: `min(255, round(value * 256 / (255 - shade)))`.
///
/// A fully dark divisor yields 0, matching integer-divide semantics.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn dodge(value: u8, shade: u8) -> u8 {
    if shade == 255 {
        return 0;
    }
    let scaled = (f32::from(value) * 256.0 / f32::from(255 - shade)).round();
    scaled.min(255.0) as u8
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn flat_regions_dodge_to_white() {
        let img = RgbImage::from_pixel(12, 12, Rgb([128, 128, 128]));
        let sketch = pencil_sketch(&img);
        for pixel in sketch.pixels() {
            // Allow one count of blur rounding in the shading divisor.
            assert!(
                pixel.0[0] >= 254,
                "expected near-white, got {}",
                pixel.0[0],
            );
        }
    }

    #[test]
    fn white_input_stays_white() {
        let img = RgbImage::from_pixel(8, 8, Rgb([255, 255, 255]));
        let sketch = pencil_sketch(&img);
        for pixel in sketch.pixels() {
            assert_eq!(pixel.0, [255, 255, 255]);
        }
    }

    #[test]
    fn black_input_stays_black() {
        let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
        let sketch = pencil_sketch(&img);
        for pixel in sketch.pixels() {
            assert_eq!(pixel.0, [0, 0, 0]);
        }
    }

    #[test]
    fn boundaries_leave_dark_strokes() {
        let img = RgbImage::from_fn(30, 30, |x, _| {
            if x < 15 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let sketch = pencil_sketch(&img);
        // The dark side next to the boundary keeps gray = 0 but gains a
        // partially-bright shading divisor, staying black, while deep
        // inside both halves dodge toward their flat-region limits.
        let stroke = sketch.get_pixel(14, 15).0[0];
        assert!(stroke < 255, "expected a stroke at the boundary");
        assert_eq!(sketch.get_pixel(29, 15).0, [255, 255, 255]);
    }

    #[test]
    fn output_is_grayscale() {
        let img = RgbImage::from_fn(10, 10, |x, y| {
            Rgb([(x * 25) as u8, (y * 25) as u8, 99])
        });
        let sketch = pencil_sketch(&img);
        for pixel in sketch.pixels() {
            let [r, g, b] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn dodge_limits() {
        assert_eq!(dodge(0, 0), 0);
        assert_eq!(dodge(255, 0), 255);
        assert_eq!(dodge(0, 255), 0);
        // 128 * 256 / 128 = 256, clamped.
        assert_eq!(dodge(128, 127), 255);
    }

    #[test]
    fn dimensions_preserved() {
        let img = RgbImage::new(9, 14);
        assert_eq!(pencil_sketch(&img).dimensions(), (9, 14));
    }
}
