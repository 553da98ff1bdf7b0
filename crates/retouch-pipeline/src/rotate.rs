//! Rotation about the image center.
//!
//! Wraps [`imageproc::geometric_transformations::rotate_about_center`].
//! Angles are whole degrees counter-clockwise. The output frame keeps
//! the input dimensions; corners exposed by the rotation are filled
//! with opaque black, and sampling is nearest-neighbor. One fixed
//! policy keeps repeated re-application from the original image
//! deterministic.

use image::{Rgb, RgbImage};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

/// Rotate counter-clockwise by `degrees` about the image center.
///
/// Multiples of 360 (including 0) return the image unchanged.
#[must_use = "returns the rotated image"]
#[allow(clippy::cast_precision_loss)]
pub fn rotate(image: &RgbImage, degrees: u32) -> RgbImage {
    if degrees % 360 == 0 {
        return image.clone();
    }
    // `rotate_about_center` rotates clockwise for positive theta.
    let theta = -(degrees as f32).to_radians();
    rotate_about_center(image, theta, Interpolation::Nearest, Rgb([0, 0, 0]))
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    #[test]
    fn zero_degrees_returns_identical_image() {
        let img = RgbImage::from_pixel(5, 5, Rgb([10, 20, 30]));
        assert_eq!(rotate(&img, 0), img);
    }

    #[test]
    fn full_turn_returns_identical_image() {
        let img = RgbImage::from_pixel(5, 5, Rgb([10, 20, 30]));
        assert_eq!(rotate(&img, 360), img);
    }

    #[test]
    fn dimensions_preserved_for_any_angle() {
        let img = RgbImage::new(20, 10);
        for degrees in [1, 45, 90, 180, 270, 359] {
            let rotated = rotate(&img, degrees);
            assert_eq!(rotated.dimensions(), (20, 10), "angle {degrees}");
        }
    }

    #[test]
    fn exposed_corners_fill_with_black() {
        let img = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        let rotated = rotate(&img, 45);
        assert_eq!(rotated.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rotated.get_pixel(19, 19).0, [0, 0, 0]);
    }

    #[test]
    fn interior_survives_rotation() {
        let img = RgbImage::from_pixel(21, 21, Rgb([200, 100, 50]));
        let rotated = rotate(&img, 45);
        // The center pixel maps onto the original image for any angle.
        assert_eq!(rotated.get_pixel(10, 10).0, [200, 100, 50]);
    }

    #[test]
    fn rotation_is_deterministic() {
        let img = RgbImage::from_fn(16, 12, |x, y| {
            Rgb([(x * 16) as u8, (y * 20) as u8, 7])
        });
        assert_eq!(rotate(&img, 30), rotate(&img, 30));
    }
}
