//! Luma-weighted grayscale conversion.
//!
//! Uses the BT.601 weights `0.299 R + 0.587 G + 0.114 B`, the classic
//! broadcast luma. Note that `image::imageops::grayscale` uses the
//! BT.709 weights instead, which would shift every value (pure red maps
//! to 54 there versus 76 here), so the conversion is done explicitly.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// BT.601 luma of one RGB pixel, rounded to the nearest integer.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn luma(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
    // Weighted sum of u8 channels cannot exceed 255_000, so the rounded
    // division stays within u8.
    ((weighted + 500) / 1000) as u8
}

/// Collapse an RGB image to its luma channel.
#[must_use = "returns the single-channel image"]
pub fn to_gray(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(*image.get_pixel(x, y))])
    })
}

/// Expand a single-channel image back to three identical channels.
#[must_use = "returns the three-channel image"]
pub fn gray_to_rgb(image: &GrayImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Luma([v]) = *image.get_pixel(x, y);
        Rgb([v, v, v])
    })
}

/// The grayscale filter: luma conversion expanded back to RGB, so the
/// result stays compatible with the color pipeline.
#[must_use = "returns the filtered image"]
pub fn grayscale(image: &RgbImage) -> RgbImage {
    gray_to_rgb(&to_gray(image))
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    #[test]
    fn pure_red_maps_to_bt601_luma() {
        assert_eq!(luma(Rgb([255, 0, 0])), 76);
    }

    #[test]
    fn pure_green_and_blue_luma() {
        assert_eq!(luma(Rgb([0, 255, 0])), 150);
        assert_eq!(luma(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn white_and_black_are_fixed_points() {
        assert_eq!(luma(Rgb([255, 255, 255])), 255);
        assert_eq!(luma(Rgb([0, 0, 0])), 0);
    }

    #[test]
    fn weighted_ordering_green_red_blue() {
        let g = luma(Rgb([0, 255, 0]));
        let r = luma(Rgb([255, 0, 0]));
        let b = luma(Rgb([0, 0, 255]));
        assert!(
            g > r && r > b,
            "expected green > red > blue luminance, got R={r} G={g} B={b}",
        );
    }

    #[test]
    fn grayscale_produces_equal_channels() {
        let img = RgbImage::from_fn(4, 4, |x, y| {
            Rgb([(x * 60) as u8, (y * 40) as u8, 200])
        });
        let gray = grayscale(&img);
        for pixel in gray.pixels() {
            let [r, g, b] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }

    #[test]
    fn solid_red_image_becomes_solid_76() {
        let img = RgbImage::from_pixel(4, 4, Rgb([255, 0, 0]));
        let gray = grayscale(&img);
        for pixel in gray.pixels() {
            assert_eq!(pixel.0, [76, 76, 76]);
        }
    }

    #[test]
    fn dimensions_preserved() {
        let img = RgbImage::new(17, 31);
        let gray = grayscale(&img);
        assert_eq!(gray.width(), 17);
        assert_eq!(gray.height(), 31);
    }

    #[test]
    fn gray_round_trip_preserves_values() {
        let gray = GrayImage::from_fn(3, 3, |x, y| {
            Luma([(x * 80 + y * 7) as u8])
        });
        let rgb = gray_to_rgb(&gray);
        assert_eq!(to_gray(&rgb), gray);
    }
}
