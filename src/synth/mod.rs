//! Tone synthesis.
//!
//! - [`envelope`]: amplitude over time (linear fade-in, exponential decay)
//! - [`tone`]: sine synthesis and 16-bit quantization

pub mod envelope;
pub mod tone;

pub use envelope::Envelope;
pub use tone::{quantize, sample_count, synthesize, ToneSamples, FULL_SCALE};
