//! Chime configuration module.
//!
//! Holds the synthesis parameters, the envelope constants and the output
//! location. Values come from defaults, an optional JSON file, environment
//! variables and finally the command line, in that order of precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ChimeError, Result};

/// Default output location, relative to the web app root.
pub const DEFAULT_OUTPUT: &str = "public/sounds/timer-complete.wav";

/// Default tone length in seconds.
pub const DEFAULT_DURATION: f64 = 1.0;

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 800.0;

/// Default sample rate in Hz (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Largest RIFF file a WAV header can describe, in bytes.
const MAX_WAV_BYTES: f64 = u32::MAX as f64;

/// Size of the canonical PCM WAV header, in bytes.
const WAV_HEADER_BYTES: f64 = 44.0;

/// Parameters of the tone itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneParams {
    /// Length of the tone in seconds.
    pub duration: f64,

    /// Frequency of the sine partial in Hz.
    pub frequency: f64,

    /// Samples per second.
    pub sample_rate: u32,
}

impl ToneParams {
    /// Creates tone parameters from explicit values.
    pub fn new(duration: f64, frequency: f64, sample_rate: u32) -> Self {
        Self {
            duration,
            frequency,
            sample_rate,
        }
    }

    /// Checks that duration and frequency are positive and finite, that the
    /// sample rate is non-zero and that the samples fit in one WAV file.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(ChimeError::invalid_parameter(
                "duration",
                format!("must be a positive number of seconds, got {}", self.duration),
            ));
        }

        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ChimeError::invalid_parameter(
                "frequency",
                format!("must be a positive number of Hz, got {}", self.frequency),
            ));
        }

        if self.sample_rate == 0 {
            return Err(ChimeError::invalid_parameter(
                "sample rate",
                "must be at least 1 sample per second, got 0",
            ));
        }

        let data_bytes = self.duration * self.sample_rate as f64 * 2.0;
        if data_bytes + WAV_HEADER_BYTES > MAX_WAV_BYTES {
            return Err(ChimeError::invalid_parameter(
                "duration",
                format!(
                    "{}s at {} Hz does not fit in a WAV file (at most {:.0}s)",
                    self.duration,
                    self.sample_rate,
                    self.max_duration()
                ),
            ));
        }

        Ok(())
    }

    /// Longest tone, in seconds, whose samples fit in a WAV file at this rate.
    pub fn max_duration(&self) -> f64 {
        (MAX_WAV_BYTES - WAV_HEADER_BYTES) / 2.0 / self.sample_rate as f64
    }

    /// Returns the highest frequency representable at this sample rate.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            frequency: DEFAULT_FREQUENCY,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Shape of the amplitude envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Peak amplitude as a fraction of full scale.
    /// Default: 0.3, leaving headroom below clipping.
    pub peak: f64,

    /// Length of the linear fade-in in seconds.
    /// Default: 0.1
    pub fade_in: f64,

    /// Exponential decay constant, scaled against the time left after the fade-in.
    /// Default: 3.0
    pub decay_rate: f64,
}

impl EnvelopeConfig {
    /// Checks the envelope constants.
    pub fn validate(&self) -> Result<()> {
        if !self.peak.is_finite() || self.peak <= 0.0 || self.peak > 1.0 {
            return Err(ChimeError::invalid_parameter(
                "peak",
                format!("must be in (0, 1], got {}", self.peak),
            ));
        }

        if !self.fade_in.is_finite() || self.fade_in < 0.0 {
            return Err(ChimeError::invalid_parameter(
                "fade-in",
                format!("must be zero or more seconds, got {}", self.fade_in),
            ));
        }

        if !self.decay_rate.is_finite() || self.decay_rate <= 0.0 {
            return Err(ChimeError::invalid_parameter(
                "decay rate",
                format!("must be positive, got {}", self.decay_rate),
            ));
        }

        Ok(())
    }
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            peak: 0.3,
            fade_in: 0.1,
            decay_rate: 3.0,
        }
    }
}

/// Full configuration for one chime generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChimeConfig {
    /// Destination WAV file. Overwritten if it exists.
    pub output: PathBuf,

    /// Tone parameters.
    pub tone: ToneParams,

    /// Envelope constants.
    pub envelope: EnvelopeConfig,
}

impl ChimeConfig {
    /// Creates a new ChimeConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides fields with any `CHIME_*` environment variables that are set.
    ///
    /// Reads the following environment variables:
    /// - `CHIME_OUTPUT` - Output WAV path
    /// - `CHIME_DURATION` - Tone length in seconds
    /// - `CHIME_FREQUENCY` - Tone frequency in Hz
    /// - `CHIME_SAMPLE_RATE` - Sample rate in Hz
    ///
    /// Unset or unparsable variables leave the field unchanged.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Overrides fields using `lookup` to resolve `CHIME_*` variable names.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("CHIME_OUTPUT") {
            if !path.is_empty() {
                self.output = PathBuf::from(path);
            }
        }

        if let Some(duration) = lookup("CHIME_DURATION").and_then(|s| s.trim().parse().ok()) {
            self.tone.duration = duration;
        }

        if let Some(frequency) = lookup("CHIME_FREQUENCY").and_then(|s| s.trim().parse().ok()) {
            self.tone.frequency = frequency;
        }

        if let Some(rate) = lookup("CHIME_SAMPLE_RATE").and_then(|s| s.trim().parse().ok()) {
            self.tone.sample_rate = rate;
        }
    }

    /// Loads a ChimeConfig from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ChimeError::invalid_config(format!("Failed to read {}", path.display()), e)
        })?;
        serde_json::from_str(&text).map_err(|e| {
            ChimeError::invalid_config(format!("Failed to parse {}", path.display()), e)
        })
    }

    /// Parses a ChimeConfig from a JSON string.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| ChimeError::invalid_config("Failed to parse config", e))
    }

    /// Validates tone parameters and envelope constants.
    pub fn validate(&self) -> Result<()> {
        self.tone.validate()?;
        self.envelope.validate()
    }
}

impl Default for ChimeConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            tone: ToneParams::default(),
            envelope: EnvelopeConfig::default(),
        }
    }
}
