//! Amplitude envelope of the chime.

use crate::config::EnvelopeConfig;

/// Time-varying amplitude multiplier: a linear ramp from silence to `peak`
/// over the fade-in, then an exponential decay over the rest of the tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    peak: f64,
    fade_in: f64,
    decay_rate: f64,
    /// Time left after the fade-in. Non-positive when the tone is no longer
    /// than the fade-in.
    decay_window: f64,
}

impl Envelope {
    /// Builds the envelope for a tone lasting `duration` seconds.
    pub fn new(config: &EnvelopeConfig, duration: f64) -> Self {
        Self {
            peak: config.peak,
            fade_in: config.fade_in,
            decay_rate: config.decay_rate,
            decay_window: duration - config.fade_in,
        }
    }

    /// Amplitude at `t` seconds from the start of the tone.
    pub fn amplitude(&self, t: f64) -> f64 {
        if t < self.fade_in {
            self.fade_in_amplitude(t)
        } else {
            self.decay_amplitude(t)
        }
    }

    /// Linear ramp branch, `peak * t / fade_in`.
    pub fn fade_in_amplitude(&self, t: f64) -> f64 {
        if self.fade_in <= 0.0 {
            return self.peak;
        }
        self.peak * (t / self.fade_in)
    }

    /// Exponential decay branch, normalized to the time left after the fade-in.
    ///
    /// Holds at `peak` when there is no decay window left, so a tone exactly
    /// as long as its fade-in never divides by zero.
    pub fn decay_amplitude(&self, t: f64) -> f64 {
        if self.decay_window <= 0.0 {
            return self.peak;
        }
        let decay_time = t - self.fade_in;
        self.peak * (-self.decay_rate * decay_time / self.decay_window).exp()
    }
}
