//! Audio output module.
//!
//! Provides WAV file writing for synthesized tones.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    samples_to_duration, wav_spec, write_wav, write_wav_to_buffer, BITS_PER_SAMPLE, CHANNELS,
};
