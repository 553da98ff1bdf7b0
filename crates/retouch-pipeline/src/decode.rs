//! Image decoding to the pipeline's working format.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces the
//! 3-channel `RgbImage` every filter operates on. This is the only
//! fallible entry into the pipeline: once an image decodes with a
//! non-zero area, all filters are total.

use crate::types::{PipelineError, RgbImage};

/// Decode raw image bytes into an RGB image.
///
/// Whatever the `image` crate can decode is accepted; alpha channels
/// and palettes are flattened to RGB, matching an editor that always
/// works on opaque color images.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
/// Returns [`PipelineError::ZeroDimension`] if the decoded image has no
/// pixels.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let decoded = image::load_from_memory(bytes)?;
    let rgb = decoded.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(PipelineError::ZeroDimension {
            width: rgb.width(),
            height: rgb.height(),
        });
    }
    Ok(rgb)
}
