//! Cartoon effect: flat smoothed color overlaid with hard dark edges.
//!
//! Three stages:
//!
//! 1. Edge mask: luma channel -> 5x5 median filter -> adaptive mean
//!    threshold. The mask is binary (0 on edges, 255 elsewhere).
//! 2. Color smoothing: an edge-preserving bilateral filter flattens
//!    color regions without bleeding across boundaries.
//! 3. Masking: pixels where the mask is 0 become black, drawing the
//!    cartoon outlines.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::median_filter;

use crate::grayscale;

/// Median filter radius for pre-threshold smoothing (5x5 window).
const MEDIAN_RADIUS: u32 = 2;
/// Adaptive threshold block radius (9x9 window).
const BLOCK_RADIUS: i64 = 4;
/// Offset subtracted from the local mean before comparison.
const THRESHOLD_C: f64 = 9.0;
/// Bilateral filter radius (9-pixel diameter).
const BILATERAL_RADIUS: i64 = 4;
/// Bilateral color sigma.
const SIGMA_COLOR: f64 = 250.0;
/// Bilateral spatial sigma.
const SIGMA_SPACE: f64 = 250.0;

/// Apply the cartoon effect.
#[must_use = "returns the filtered image"]
pub fn cartoonify(image: &RgbImage) -> RgbImage {
    // 1. Edge mask from the luma channel.
    let gray = grayscale::to_gray(image);
    let smoothed = median_filter(&gray, MEDIAN_RADIUS, MEDIAN_RADIUS);
    let edges = adaptive_mean_threshold(&smoothed);

    // 2. Smooth color regions while keeping boundaries crisp.
    let color = bilateral_filter(image);

    // 3. Blacken edge pixels.
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        if edges.get_pixel(x, y).0[0] == 0 {
            Rgb([0, 0, 0])
        } else {
            *color.get_pixel(x, y)
        }
    })
}

/// Binarize against the local mean: 255 where the pixel exceeds the
/// mean of its block minus [`THRESHOLD_C`], 0 otherwise.
///
/// Samples outside the image clamp to the nearest edge pixel, so border
/// blocks shrink toward the image instead of reading black.
#[allow(clippy::cast_precision_loss)]
fn adaptive_mean_threshold(image: &GrayImage) -> GrayImage {
    let (w, h) = image.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        let mut sum = 0u64;
        let mut count = 0u64;
        for dy in -BLOCK_RADIUS..=BLOCK_RADIUS {
            for dx in -BLOCK_RADIUS..=BLOCK_RADIUS {
                let sx = clamp_coord(i64::from(x) + dx, w);
                let sy = clamp_coord(i64::from(y) + dy, h);
                sum += u64::from(image.get_pixel(sx, sy).0[0]);
                count += 1;
            }
        }
        let mean = sum as f64 / count as f64;
        if f64::from(image.get_pixel(x, y).0[0]) > mean - THRESHOLD_C {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Edge-preserving smoothing over a circular neighborhood.
///
/// Each output pixel is a weighted mean of its neighbors, weighted by
/// spatial distance and by color distance (L1 across channels), so the
/// averaging collapses at strong edges instead of blurring across them.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bilateral_filter(image: &RgbImage) -> RgbImage {
    let (w, h) = image.dimensions();
    let color_coeff = -0.5 / (SIGMA_COLOR * SIGMA_COLOR);
    let space_coeff = -0.5 / (SIGMA_SPACE * SIGMA_SPACE);

    RgbImage::from_fn(w, h, |x, y| {
        let center = *image.get_pixel(x, y);
        let mut acc = [0.0f64; 3];
        let mut total = 0.0f64;

        for dy in -BILATERAL_RADIUS..=BILATERAL_RADIUS {
            for dx in -BILATERAL_RADIUS..=BILATERAL_RADIUS {
                let spatial_sq = dx * dx + dy * dy;
                if spatial_sq > BILATERAL_RADIUS * BILATERAL_RADIUS {
                    continue;
                }
                let sx = clamp_coord(i64::from(x) + dx, w);
                let sy = clamp_coord(i64::from(y) + dy, h);
                let sample = *image.get_pixel(sx, sy);

                let color_dist: f64 = sample
                    .0
                    .iter()
                    .zip(center.0)
                    .map(|(&s, c)| f64::from(i16::from(s) - i16::from(c)).abs())
                    .sum();
                let weight =
                    (spatial_sq as f64 * space_coeff + color_dist * color_dist * color_coeff)
                        .exp();

                total += weight;
                for (channel, value) in acc.iter_mut().zip(sample.0) {
                    *channel += weight * f64::from(value);
                }
            }
        }

        let mut out = [0u8; 3];
        for (slot, channel) in out.iter_mut().zip(acc) {
            *slot = (channel / total).round().clamp(0.0, 255.0) as u8;
        }
        Rgb(out)
    })
}

/// Clamp a signed coordinate into `[0, size)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_coord(value: i64, size: u32) -> u32 {
    value.clamp(0, i64::from(size) - 1) as u32
}
