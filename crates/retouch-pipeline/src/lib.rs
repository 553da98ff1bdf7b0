//! retouch-pipeline: Pure image filter pipeline (sans-IO).
//!
//! Implements the two filter families of an interactive image editor:
//!
//! - **Continuous adjustments** ([`adjust`]): brightness -> contrast ->
//!   Gaussian blur -> rotation, re-derived from the untouched original
//!   image every time a slider moves. Deterministic and idempotent for
//!   equal inputs; default parameters are the identity.
//! - **Discrete filters** ([`apply`]): one-shot transforms (grayscale,
//!   invert, sepia, convolution kernels, flips, cartoon, pencil sketch)
//!   applied to the *current* image and stacked onto edit history.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! images and byte slices. Filesystem interaction lives in `retouch-io`,
//! and the history/undo state machine in `retouch-session`.

pub mod blur;
pub mod cartoon;
pub mod convolve;
pub mod decode;
pub mod diagnostics;
pub mod enhance;
pub mod flip;
pub mod grayscale;
pub mod invert;
pub mod rotate;
pub mod sepia;
pub mod sketch;
pub mod types;

pub use decode::decode_rgb;
pub use diagnostics::{AdjustDiagnostics, StageDiagnostics, StageMetrics};
pub use types::{AdjustParams, DiscreteFilter, GrayImage, PipelineError, RgbImage};

/// Run the continuous adjustment pipeline.
///
/// Applies, in order: brightness scale, contrast about the mean luma,
/// Gaussian blur (skipped at radius 0), rotation (skipped at multiples
/// of 360 degrees). Parameters are clamped into their documented ranges
/// first, so raw slider values can be passed straight through.
#[must_use = "returns the adjusted image"]
pub fn adjust(original: &RgbImage, params: &AdjustParams) -> RgbImage {
    let params = params.clamped();

    // 1. Brightness scale.
    let adjusted = enhance::brightness(original, params.brightness);

    // 2. Contrast about the mean luma.
    let adjusted = enhance::contrast(&adjusted, params.contrast);

    // 3. Gaussian blur (identity at radius 0).
    let adjusted = blur::gaussian_blur(&adjusted, params.blur);

    // 4. Rotation (identity at multiples of 360).
    rotate::rotate(&adjusted, params.rotate)
}

/// Run the continuous pipeline while timing each stage.
///
/// Same semantics as [`adjust`]; additionally returns per-stage
/// [`AdjustDiagnostics`] for parameter experimentation (see
/// `retouch-bench`).
#[must_use = "returns the adjusted image and its diagnostics"]
pub fn adjust_diagnosed(
    original: &RgbImage,
    params: &AdjustParams,
) -> (RgbImage, AdjustDiagnostics) {
    use std::time::Instant;

    let params = params.clamped();
    let start = Instant::now();

    let stage = Instant::now();
    let adjusted = enhance::brightness(original, params.brightness);
    let brightness = StageDiagnostics {
        duration: stage.elapsed(),
        metrics: StageMetrics::Brightness {
            factor: params.brightness,
        },
    };

    let stage = Instant::now();
    let adjusted = enhance::contrast(&adjusted, params.contrast);
    let contrast = StageDiagnostics {
        duration: stage.elapsed(),
        metrics: StageMetrics::Contrast {
            factor: params.contrast,
        },
    };

    let stage = Instant::now();
    let adjusted = blur::gaussian_blur(&adjusted, params.blur);
    let blur = (params.blur > 0).then(|| StageDiagnostics {
        duration: stage.elapsed(),
        metrics: StageMetrics::Blur {
            radius: params.blur,
        },
    });

    let stage = Instant::now();
    let adjusted = rotate::rotate(&adjusted, params.rotate);
    let rotate = (params.rotate % 360 != 0).then(|| StageDiagnostics {
        duration: stage.elapsed(),
        metrics: StageMetrics::Rotate {
            degrees: params.rotate,
        },
    });

    let diagnostics = AdjustDiagnostics {
        brightness,
        contrast,
        blur,
        rotate,
        total_duration: start.elapsed(),
    };
    (adjusted, diagnostics)
}

/// Apply a one-shot filter.
#[must_use = "returns the filtered image"]
pub fn apply(image: &RgbImage, filter: DiscreteFilter) -> RgbImage {
    match filter {
        DiscreteFilter::Grayscale => grayscale::grayscale(image),
        DiscreteFilter::Invert => invert::invert(image),
        DiscreteFilter::Sharpen => convolve::convolve3(image, convolve::SHARPEN),
        DiscreteFilter::EdgeEnhance => convolve::convolve3(image, convolve::EDGE_ENHANCE),
        DiscreteFilter::Emboss => convolve::convolve3(image, convolve::EMBOSS),
        DiscreteFilter::Sepia => sepia::sepia(image),
        DiscreteFilter::Cartoonify => cartoon::cartoonify(image),
        DiscreteFilter::PencilSketch => sketch::pencil_sketch(image),
        DiscreteFilter::FlipHorizontal => flip::flip_horizontal(image),
        DiscreteFilter::FlipVertical => flip::flip_vertical(image),
    }
}
