//! Sine tone synthesis and 16-bit quantization.

use std::f64::consts::PI;

use crate::config::{EnvelopeConfig, ToneParams};
use crate::error::Result;
use crate::synth::envelope::Envelope;

/// Scale factor from a unit amplitude to a 16-bit sample.
pub const FULL_SCALE: f64 = i16::MAX as f64;

/// Number of samples in a tone, `floor(duration * sample_rate)`.
pub fn sample_count(duration: f64, sample_rate: u32) -> usize {
    (duration * sample_rate as f64).floor() as usize
}

/// Converts a sample in `[-1, 1]` to a signed 16-bit value.
///
/// Rounds to nearest and clamps to the `i16` range.
pub fn quantize(raw: f64) -> i16 {
    (raw * FULL_SCALE)
        .round()
        .clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

/// Lazily generated samples of an enveloped sine tone, in time order.
#[derive(Debug, Clone)]
pub struct ToneSamples {
    envelope: Envelope,
    angular_frequency: f64,
    sample_rate: f64,
    index: usize,
    len: usize,
}

impl ToneSamples {
    pub fn new(params: &ToneParams, envelope: &EnvelopeConfig) -> Self {
        Self {
            envelope: Envelope::new(envelope, params.duration),
            angular_frequency: 2.0 * PI * params.frequency,
            sample_rate: params.sample_rate as f64,
            index: 0,
            len: sample_count(params.duration, params.sample_rate),
        }
    }

    /// Unquantized value of sample `index`.
    pub fn raw_sample(&self, index: usize) -> f64 {
        let t = index as f64 / self.sample_rate;
        self.envelope.amplitude(t) * (self.angular_frequency * t).sin()
    }
}

impl Iterator for ToneSamples {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.index >= self.len {
            return None;
        }
        let sample = quantize(self.raw_sample(self.index));
        self.index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples {}

/// Synthesizes the whole tone after validating its parameters.
///
/// # Example
///
/// ```
/// use timer_chime::config::{EnvelopeConfig, ToneParams};
/// use timer_chime::synth::synthesize;
///
/// let samples = synthesize(&ToneParams::default(), &EnvelopeConfig::default()).unwrap();
/// assert_eq!(samples.len(), 44100);
/// assert_eq!(samples[0], 0);
/// ```
pub fn synthesize(params: &ToneParams, envelope: &EnvelopeConfig) -> Result<Vec<i16>> {
    params.validate()?;
    envelope.validate()?;
    Ok(ToneSamples::new(params, envelope).collect())
}
