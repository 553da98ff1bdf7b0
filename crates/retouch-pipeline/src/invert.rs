//! Per-channel color inversion.

use image::{Rgb, RgbImage};

/// Invert every channel (`255 - v`, i.e. bitwise NOT for `u8`).
///
/// Exactly self-inverse: applying twice restores the input per-pixel.
#[must_use = "returns the inverted image"]
pub fn invert(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        Rgb([!r, !g, !b])
    })
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    #[test]
    fn white_becomes_black() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        let inverted = invert(&img);
        for pixel in inverted.pixels() {
            assert_eq!(pixel.0, [0, 0, 0]);
        }
    }

    #[test]
    fn channels_invert_independently() {
        let img = RgbImage::from_pixel(1, 1, Rgb([10, 100, 200]));
        let inverted = invert(&img);
        assert_eq!(inverted.get_pixel(0, 0).0, [245, 155, 55]);
    }

    #[test]
    fn double_invert_is_identity() {
        let img = RgbImage::from_fn(7, 5, |x, y| {
            Rgb([(x * 37) as u8, (y * 53) as u8, ((x + y) * 11) as u8])
        });
        assert_eq!(invert(&invert(&img)), img);
    }

    #[test]
    fn dimensions_preserved() {
        let img = RgbImage::new(9, 4);
        let inverted = invert(&img);
        assert_eq!(inverted.dimensions(), (9, 4));
    }
}
