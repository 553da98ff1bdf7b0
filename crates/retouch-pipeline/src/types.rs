//! Shared types for the retouch filter pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can hold pipeline images
/// without depending on `image` directly.
pub use image::RgbImage;

/// Re-export `GrayImage` for single-channel intermediates (edge masks,
/// sketch shading).
pub use image::GrayImage;

/// Continuous adjustment parameters, re-derived from the original image
/// on every change.
///
/// Out-of-range values are never an error: [`AdjustParams::clamped`]
/// pulls them back into the documented ranges before the pipeline runs,
/// so raw slider values can be passed straight through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustParams {
    /// Per-channel brightness scale factor. 1.0 is identity.
    ///
    /// Clamped to `[MIN_FACTOR, MAX_FACTOR]`.
    pub brightness: f32,

    /// Contrast factor about the image's mean luma. 1.0 is identity;
    /// values below 1.0 flatten toward gray, above 1.0 spread away
    /// from it.
    ///
    /// Clamped to `[MIN_FACTOR, MAX_FACTOR]`.
    pub contrast: f32,

    /// Gaussian blur radius in pixels (used directly as the kernel
    /// sigma). 0 disables the blur stage.
    ///
    /// Clamped to `[0, MAX_BLUR]`.
    pub blur: u32,

    /// Counter-clockwise rotation in whole degrees. Multiples of 360
    /// disable the rotation stage.
    ///
    /// Clamped to `[0, MAX_ROTATE]`.
    pub rotate: u32,
}

impl AdjustParams {
    /// Smallest accepted brightness/contrast factor.
    pub const MIN_FACTOR: f32 = 0.5;
    /// Largest accepted brightness/contrast factor.
    pub const MAX_FACTOR: f32 = 3.0;
    /// Largest accepted blur radius.
    pub const MAX_BLUR: u32 = 10;
    /// Largest accepted rotation angle in degrees.
    pub const MAX_ROTATE: u32 = 360;

    /// Default brightness factor (identity).
    pub const DEFAULT_BRIGHTNESS: f32 = 1.0;
    /// Default contrast factor (identity).
    pub const DEFAULT_CONTRAST: f32 = 1.0;
    /// Default blur radius (disabled).
    pub const DEFAULT_BLUR: u32 = 0;
    /// Default rotation angle (disabled).
    pub const DEFAULT_ROTATE: u32 = 0;

    /// Return a copy with every parameter clamped into its range.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            brightness: self.brightness.clamp(Self::MIN_FACTOR, Self::MAX_FACTOR),
            contrast: self.contrast.clamp(Self::MIN_FACTOR, Self::MAX_FACTOR),
            blur: self.blur.min(Self::MAX_BLUR),
            rotate: self.rotate.min(Self::MAX_ROTATE),
        }
    }
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self {
            brightness: Self::DEFAULT_BRIGHTNESS,
            contrast: Self::DEFAULT_CONTRAST,
            blur: Self::DEFAULT_BLUR,
            rotate: Self::DEFAULT_ROTATE,
        }
    }
}

/// The closed set of one-shot filters.
///
/// Unlike the continuous adjustments, each of these is applied once to
/// the *current* image and stacked onto history. Dispatch happens by
/// direct `match` in [`apply`](crate::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscreteFilter {
    /// Luma-weighted grayscale, expanded back to three channels.
    Grayscale,
    /// Per-channel `255 - v`.
    Invert,
    /// 3x3 sharpening kernel.
    Sharpen,
    /// 3x3 edge-enhancement kernel.
    EdgeEnhance,
    /// 3x3 emboss kernel, biased to mid-gray.
    Emboss,
    /// Linear sepia color matrix.
    Sepia,
    /// Flat-color regions with hard dark edges.
    Cartoonify,
    /// Color-dodge pencil sketch.
    PencilSketch,
    /// Mirror across the vertical axis.
    FlipHorizontal,
    /// Mirror across the horizontal axis.
    FlipVertical,
}

impl DiscreteFilter {
    /// Every filter, in menu order.
    pub const ALL: [Self; 10] = [
        Self::Grayscale,
        Self::Invert,
        Self::Sharpen,
        Self::EdgeEnhance,
        Self::Emboss,
        Self::Sepia,
        Self::Cartoonify,
        Self::PencilSketch,
        Self::FlipHorizontal,
        Self::FlipVertical,
    ];

    /// Human-readable filter name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Invert => "invert",
            Self::Sharpen => "sharpen",
            Self::EdgeEnhance => "edge-enhance",
            Self::Emboss => "emboss",
            Self::Sepia => "sepia",
            Self::Cartoonify => "cartoonify",
            Self::PencilSketch => "pencil-sketch",
            Self::FlipHorizontal => "flip-horizontal",
            Self::FlipVertical => "flip-vertical",
        }
    }
}

impl fmt::Display for DiscreteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` keeps width/alignment flags working in tabular output.
        f.pad(self.name())
    }
}

/// Errors that can occur while bringing an image into the pipeline.
///
/// The filter functions themselves are total on decoded images; only
/// decoding can fail.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The decoded image has no pixels.
    #[error("image has zero area ({width}x{height})")]
    ZeroDimension {
        /// Decoded width in pixels.
        width: u32,
        /// Decoded height in pixels.
        height: u32,
    },
}
