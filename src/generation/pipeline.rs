//! Generation pipeline: validate, synthesize, write.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::audio::{samples_to_duration, write_wav, BITS_PER_SAMPLE};
use crate::config::{EnvelopeConfig, ToneParams};
use crate::error::{ChimeError, ErrorCode, Result};
use crate::synth::synthesize;

/// Summary of a generated chime file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedChime {
    /// Where the WAV file was written.
    pub path: PathBuf,
    /// Requested tone length in seconds.
    pub duration: f64,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples in the data chunk.
    pub sample_count: usize,
}

impl GeneratedChime {
    /// Actual length of the written audio in seconds.
    pub fn audio_duration(&self) -> f64 {
        samples_to_duration(self.sample_count, self.sample_rate)
    }

    /// Renders the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChimeError::with_source(
                ErrorCode::InvalidConfig,
                format!("Failed to encode summary for {}", self.path.display()),
                e,
            )
        })
    }
}

impl fmt::Display for GeneratedChime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated audio file: {}", self.path.display())?;
        writeln!(f, "  Duration: {}s", self.duration)?;
        writeln!(f, "  Frequency: {} Hz", self.frequency)?;
        writeln!(f, "  Samples: {}", self.sample_count)?;
        write!(
            f,
            "  Format: WAV {}-bit mono, {} Hz",
            BITS_PER_SAMPLE, self.sample_rate
        )
    }
}

/// Synthesizes a chime and writes it to `path`.
///
/// Fails with `INVALID_PARAMETER` before touching the filesystem if any
/// parameter is out of range, and with `IO_FAILURE` if the file cannot be
/// written. A failed write may leave a partial file behind.
///
/// # Example
///
/// ```ignore
/// use timer_chime::config::{EnvelopeConfig, ToneParams};
/// use timer_chime::generation::generate_chime;
///
/// let chime = generate_chime(
///     Path::new("public/sounds/timer-complete.wav"),
///     &ToneParams::new(1.0, 800.0, 44100),
///     &EnvelopeConfig::default(),
/// )?;
/// println!("{}", chime);
/// ```
pub fn generate_chime(
    path: &Path,
    params: &ToneParams,
    envelope: &EnvelopeConfig,
) -> Result<GeneratedChime> {
    if params.frequency > params.nyquist() {
        tracing::warn!(
            "Frequency {} Hz is above the Nyquist limit of {} Hz and will alias",
            params.frequency,
            params.nyquist()
        );
    }
    if params.duration <= envelope.fade_in {
        tracing::debug!(
            "Duration {}s does not exceed the {}s fade-in; no decay phase",
            params.duration,
            envelope.fade_in
        );
    }

    let start_time = Instant::now();
    let samples = synthesize(params, envelope)?;
    tracing::debug!(
        "Synthesized {} samples in {:.2}ms",
        samples.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    write_wav(&samples, path, params.sample_rate)?;
    tracing::info!("Saved to: {}", path.display());

    Ok(GeneratedChime {
        path: path.to_path_buf(),
        duration: params.duration,
        frequency: params.frequency,
        sample_rate: params.sample_rate,
        sample_count: samples.len(),
    })
}

/// Generates the default timer chime (1s, 800 Hz, 44100 Hz) at `path`.
pub fn generate_default_chime(path: &Path) -> Result<GeneratedChime> {
    generate_chime(path, &ToneParams::default(), &EnvelopeConfig::default())
}
