//! retouch-bench: CLI tool for filter parameter experimentation and diagnostics.
//!
//! Runs the continuous adjustment pipeline on a given image file with
//! configurable parameters, optionally stacks one-shot filters on the
//! result, and prints per-stage timing diagnostics. Useful for:
//!
//! - Tuning brightness/contrast/blur/rotation parameters
//! - Measuring per-stage durations to identify bottlenecks
//! - Timing the one-shot filters (cartoonify and sketch dominate)
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin retouch-bench -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use retouch_pipeline::{AdjustDiagnostics, AdjustParams, DiscreteFilter};
use retouch_session::Session;

/// Filter parameter experimentation and diagnostics for retouch.
///
/// Runs the continuous adjustment pipeline on an image with configurable
/// parameters and prints detailed per-stage timing diagnostics.
#[derive(Parser)]
#[command(name = "retouch-bench", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Brightness factor (0.5-3.0).
    #[arg(long, default_value_t = AdjustParams::DEFAULT_BRIGHTNESS)]
    brightness: f32,

    /// Contrast factor (0.5-3.0).
    #[arg(long, default_value_t = AdjustParams::DEFAULT_CONTRAST)]
    contrast: f32,

    /// Gaussian blur radius in pixels (0-10).
    #[arg(long, default_value_t = AdjustParams::DEFAULT_BLUR)]
    blur: u32,

    /// Counter-clockwise rotation in degrees (0-360).
    #[arg(long, default_value_t = AdjustParams::DEFAULT_ROTATE)]
    rotate: u32,

    /// One-shot filter to stack on the adjusted result (repeatable).
    #[arg(long = "filter", value_enum)]
    filters: Vec<Filter>,

    /// Write the final image to this path (format from extension).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of runs for averaging.
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Output adjustment diagnostics as JSON instead of a report.
    #[arg(long)]
    json: bool,
}

/// One-shot filter selection.
#[derive(Clone, Copy, ValueEnum)]
enum Filter {
    /// Luma-weighted grayscale.
    Grayscale,
    /// Per-channel inversion.
    Invert,
    /// 3x3 sharpening kernel.
    Sharpen,
    /// 3x3 edge-enhancement kernel.
    EdgeEnhance,
    /// 3x3 emboss kernel.
    Emboss,
    /// Sepia color matrix.
    Sepia,
    /// Cartoon effect (median + adaptive threshold + bilateral).
    Cartoonify,
    /// Color-dodge pencil sketch.
    PencilSketch,
    /// Mirror across the vertical axis.
    FlipHorizontal,
    /// Mirror across the horizontal axis.
    FlipVertical,
}

/// Maps the local CLI [`Filter`] enum to [`DiscreteFilter`].
const fn filter_to_pipeline(f: Filter) -> DiscreteFilter {
    match f {
        Filter::Grayscale => DiscreteFilter::Grayscale,
        Filter::Invert => DiscreteFilter::Invert,
        Filter::Sharpen => DiscreteFilter::Sharpen,
        Filter::EdgeEnhance => DiscreteFilter::EdgeEnhance,
        Filter::Emboss => DiscreteFilter::Emboss,
        Filter::Sepia => DiscreteFilter::Sepia,
        Filter::Cartoonify => DiscreteFilter::Cartoonify,
        Filter::PencilSketch => DiscreteFilter::PencilSketch,
        Filter::FlipHorizontal => DiscreteFilter::FlipHorizontal,
        Filter::FlipVertical => DiscreteFilter::FlipVertical,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let params = AdjustParams {
        brightness: cli.brightness,
        contrast: cli.contrast,
        blur: cli.blur,
        rotate: cli.rotate,
    };

    let original = match retouch_io::read_image(&cli.image_path) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Image: {} ({}x{})",
        cli.image_path.display(),
        original.width(),
        original.height(),
    );
    eprintln!("Params: {params:?}");
    eprintln!("Runs: {}", cli.runs);
    eprintln!();

    let mut all_diagnostics = Vec::with_capacity(cli.runs);

    for run in 0..cli.runs {
        if cli.runs > 1 {
            eprintln!("--- Run {}/{} ---", run + 1, cli.runs);
        }

        let mut session = Session::new();
        if let Err(e) = session.load(original.clone()) {
            eprintln!("Session error: {e}");
            return ExitCode::FAILURE;
        }

        let (adjusted, diagnostics) = retouch_pipeline::adjust_diagnosed(&original, &params);
        if let Err(e) = session.push(adjusted) {
            eprintln!("Session error: {e}");
            return ExitCode::FAILURE;
        }

        if cli.json {
            match serde_json::to_string_pretty(&diagnostics) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing diagnostics: {e}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            println!("{}", diagnostics.report());
        }

        for &filter in &cli.filters {
            let filter = filter_to_pipeline(filter);
            let start = Instant::now();
            if let Err(e) = session.apply(filter) {
                eprintln!("Session error: {e}");
                return ExitCode::FAILURE;
            }
            let ms = start.elapsed().as_secs_f64() * 1000.0;
            println!("{filter:<16} {ms:>8.3}ms");
        }

        // Write the output on the first run only.
        if run == 0
            && let Some(ref output) = cli.output
        {
            let image = match session.save() {
                Ok(image) => image,
                Err(e) => {
                    eprintln!("Session error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            match retouch_io::write_image(output, image) {
                Ok(()) => eprintln!("Image written to {}", output.display()),
                Err(e) => {
                    eprintln!("Error writing {}: {e}", output.display());
                    return ExitCode::FAILURE;
                }
            }
        }

        all_diagnostics.push(diagnostics);

        if cli.runs > 1 {
            eprintln!();
        }
    }

    if cli.runs > 1 {
        print_multi_run_summary(&all_diagnostics);
    }

    ExitCode::SUCCESS
}

/// Print aggregated statistics across multiple runs.
#[allow(clippy::cast_precision_loss)]
fn print_multi_run_summary(all_diagnostics: &[AdjustDiagnostics]) {
    if all_diagnostics.is_empty() {
        return;
    }

    println!();
    println!(
        "Summary ({} runs)\n{}",
        all_diagnostics.len(),
        "=".repeat(56),
    );

    let durations: Vec<f64> = all_diagnostics
        .iter()
        .map(|d| d.total_duration.as_secs_f64() * 1000.0)
        .collect();

    let min = durations.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = durations.iter().copied().reduce(f64::max).unwrap_or(0.0);
    let mean = durations.iter().sum::<f64>() / durations.len() as f64;

    println!("Total duration: min={min:.3}ms  mean={mean:.3}ms  max={max:.3}ms");
}
