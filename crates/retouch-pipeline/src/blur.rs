//! Gaussian blur of color images.
//!
//! Wraps [`imageproc::filter::gaussian_blur_f32`], which operates on a
//! single channel: the color image is split into R/G/B planes, each
//! blurred independently, and reassembled. Gaussian blur is a linear
//! per-channel operation, so the result matches blurring in color space.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// Blur with the given radius, used directly as the Gaussian sigma.
///
/// Radius 0 returns the image unchanged (the underlying `imageproc`
/// function panics on non-positive sigma).
#[must_use = "returns the blurred image"]
#[allow(clippy::cast_precision_loss)]
pub fn gaussian_blur(image: &RgbImage, radius: u32) -> RgbImage {
    if radius == 0 {
        return image.clone();
    }
    let sigma = radius as f32;
    let (w, h) = (image.width(), image.height());

    // Split into three grayscale planes.
    let channels: [GrayImage; 3] = std::array::from_fn(|c| {
        GrayImage::from_fn(w, h, |x, y| Luma([image.get_pixel(x, y).0[c]]))
    });

    // Blur each plane independently.
    let blurred: [GrayImage; 3] =
        std::array::from_fn(|c| imageproc::filter::gaussian_blur_f32(&channels[c], sigma));

    // Reassemble into RGB.
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            blurred[0].get_pixel(x, y).0[0],
            blurred[1].get_pixel(x, y).0[0],
            blurred[2].get_pixel(x, y).0[0],
        ])
    })
}
