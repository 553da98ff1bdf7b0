//! Adjustment pipeline diagnostics: per-stage timing and parameters.
//!
//! Permanent instrumentation for parameter experimentation, collected by
//! [`adjust_diagnosed`](crate::adjust_diagnosed) and consumed by the
//! `retouch-bench` CLI. Durations are serialized as fractional seconds
//! (`f64`) for JSON compatibility, since [`std::time::Duration`] does
//! not implement serde traits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Serde support for `std::time::Duration` as fractional seconds.
mod duration_serde {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialize a `Duration` as fractional seconds (`f64`).
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs_f64().serialize(serializer)
    }

    /// Deserialize a `Duration` from fractional seconds (`f64`).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(|_| {
            serde::de::Error::custom(
                "duration seconds must be finite, non-negative, and representable as a Duration",
            )
        })
    }
}

/// Timing and parameters for a single adjustment stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Wall-clock duration of this stage.
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// The parameters the stage ran with.
    pub metrics: StageMetrics,
}

/// Stage-specific parameters recorded alongside the timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Brightness scale.
    Brightness {
        /// Scale factor (after clamping).
        factor: f32,
    },
    /// Contrast about the mean luma.
    Contrast {
        /// Contrast factor (after clamping).
        factor: f32,
    },
    /// Gaussian blur.
    Blur {
        /// Blur radius, used as the kernel sigma.
        radius: u32,
    },
    /// Rotation about the image center.
    Rotate {
        /// Counter-clockwise angle in degrees.
        degrees: u32,
    },
}

/// Diagnostics for one run of the continuous pipeline.
///
/// Stages that were skipped (blur at radius 0, rotation at multiples of
/// 360 degrees) are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustDiagnostics {
    /// Stage 1: brightness scale.
    pub brightness: StageDiagnostics,
    /// Stage 2: contrast about the mean luma.
    pub contrast: StageDiagnostics,
    /// Stage 3: Gaussian blur (`None` when skipped).
    pub blur: Option<StageDiagnostics>,
    /// Stage 4: rotation (`None` when skipped).
    pub rotate: Option<StageDiagnostics>,
    /// Total wall-clock duration of the pipeline run.
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
}

impl AdjustDiagnostics {
    /// Format the diagnostics as a human-readable table.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Adjustment Diagnostics\n{}",
            "=".repeat(56),
        ));
        lines.push(format!(
            "{:<16} {:>10} {:>10}  {}",
            "Stage", "Duration", "% Total", "Params"
        ));
        lines.push("-".repeat(56));

        let total_ms = duration_ms(self.total_duration);
        let stages: Vec<(&str, &StageDiagnostics)> = {
            let mut s = vec![("Brightness", &self.brightness), ("Contrast", &self.contrast)];
            if let Some(ref blur) = self.blur {
                s.push(("Blur", blur));
            }
            if let Some(ref rotate) = self.rotate {
                s.push(("Rotate", rotate));
            }
            s
        };

        for (name, diag) in &stages {
            let ms = duration_ms(diag.duration);
            let pct = if total_ms > 0.0 {
                ms / total_ms * 100.0
            } else {
                0.0
            };
            let params = format_metrics(&diag.metrics);
            lines.push(format!("{name:<16} {ms:>8.3}ms {pct:>9.1}%  {params}"));
        }

        lines.push(format!(
            "Total: {:.3}ms ({} of 4 stages ran)",
            total_ms,
            stages.len(),
        ));

        lines.join("\n")
    }
}

/// Convert a `Duration` to milliseconds as `f64`.
fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Format stage parameters into a compact detail string.
fn format_metrics(metrics: &StageMetrics) -> String {
    match metrics {
        StageMetrics::Brightness { factor } | StageMetrics::Contrast { factor } => {
            format!("factor={factor:.2}")
        }
        StageMetrics::Blur { radius } => format!("radius={radius}"),
        StageMetrics::Rotate { degrees } => format!("degrees={degrees}"),
    }
}
