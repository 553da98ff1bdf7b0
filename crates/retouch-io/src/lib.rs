//! retouch-io: Path-based image reading and writing.
//!
//! The pipeline and session crates are sans-IO; this crate is the thin
//! filesystem boundary around them. Reading decodes through
//! [`retouch_pipeline::decode_rgb`] so every validity check lives in one
//! place; writing derives the output format from the target extension.

use std::path::Path;

use image::ImageFormat;
use retouch_pipeline::{PipelineError, RgbImage};

/// Errors from path-based image IO.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The offending path.
        path: String,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The file's bytes did not decode to a usable image.
    #[error(transparent)]
    Decode(#[from] PipelineError),

    /// The target extension does not name a writable format.
    #[error("unsupported save format for {path} (use png, jpg, or bmp)")]
    UnsupportedFormat {
        /// The offending path.
        path: String,
    },

    /// Encoding or writing the output failed.
    #[error("failed to write image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Read and decode an image file into the pipeline's working format.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the file cannot be read and
/// [`IoError::Decode`] if its contents are empty, corrupt, or decode to
/// a zero-area image.
pub fn read_image(path: &Path) -> Result<RgbImage, IoError> {
    let bytes = std::fs::read(path).map_err(|source| IoError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(retouch_pipeline::decode_rgb(&bytes)?)
}

/// Encode `image` to `path`, deriving the format from its extension.
///
/// PNG, JPEG, and BMP targets are supported. Extensions the `image`
/// crate recognizes but cannot encode (e.g. WebP) are rejected up front
/// rather than failing half-written.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the extension is missing
/// or does not name a writable format, and [`IoError::Encode`] if
/// encoding or writing fails.
pub fn write_image(path: &Path, image: &RgbImage) -> Result<(), IoError> {
    let format = path
        .extension()
        .and_then(ImageFormat::from_extension)
        .filter(|format| {
            matches!(
                format,
                ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp
            )
        })
        .ok_or_else(|| IoError::UnsupportedFormat {
            path: path.display().to_string(),
        })?;
    image.save_with_format(path, format)?;
    Ok(())
}
