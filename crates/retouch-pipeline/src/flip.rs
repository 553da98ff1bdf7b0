//! Axis mirrors.
//!
//! Thin wrappers over `image::imageops` so the rest of the crate (and
//! downstream crates) dispatch flips the same way as every other filter.

use image::RgbImage;

/// Mirror across the vertical axis (left and right swap).
#[must_use = "returns the mirrored image"]
pub fn flip_horizontal(image: &RgbImage) -> RgbImage {
    image::imageops::flip_horizontal(image)
}

/// Mirror across the horizontal axis (top and bottom swap).
#[must_use = "returns the mirrored image"]
pub fn flip_vertical(image: &RgbImage) -> RgbImage {
    image::imageops::flip_vertical(image)
}
