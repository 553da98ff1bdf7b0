//! Brightness and contrast enhancement.
//!
//! Brightness multiplies every channel by the factor. Contrast
//! interpolates every channel toward the image's mean luma: a factor of
//! 0.5 pulls values halfway to flat gray, a factor above 1.0 spreads
//! them apart. Both treat a factor of exactly 1.0 as identity and
//! return the input unchanged.

use image::RgbImage;

use crate::grayscale;

/// Scale every channel by `factor`, clamping to `[0, 255]`.
#[must_use = "returns the adjusted image"]
pub fn brightness(image: &RgbImage, factor: f32) -> RgbImage {
    if (factor - 1.0).abs() < f32::EPSILON {
        return image.clone();
    }

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in &mut pixel.0 {
            *channel = quantize(f32::from(*channel) * factor);
        }
    }
    out
}

/// Interpolate every channel toward the image's mean luma by `factor`.
///
/// The pivot is the rounded mean of the BT.601 luma over all pixels, so
/// contrast changes preserve the overall exposure of the image.
#[must_use = "returns the adjusted image"]
pub fn contrast(image: &RgbImage, factor: f32) -> RgbImage {
    if (factor - 1.0).abs() < f32::EPSILON {
        return image.clone();
    }

    let mean = f32::from(mean_luma(image));
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for channel in &mut pixel.0 {
            *channel = quantize(mean + (f32::from(*channel) - mean) * factor);
        }
    }
    out
}

/// Rounded mean of the BT.601 luma over all pixels.
///
/// Returns 0 for an empty image; decoding rejects zero-area images, so
/// this only matters for hand-built buffers.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn mean_luma(image: &RgbImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }
    let sum: u64 = image.pixels().map(|p| u64::from(grayscale::luma(*p))).sum();
    (sum as f64 / count as f64 + 0.5) as u8
}

/// Round and clamp a channel value back into `u8`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
