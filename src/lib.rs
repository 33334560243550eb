//! timer-chime: synthesizes the timer completion sound.
//!
//! Generates a mono 16-bit PCM bell tone (a sine partial shaped by a linear
//! fade-in and an exponential decay) and writes it as a WAV file.
//!
//! # Modules
//!
//! - [`config`]: Tone parameters, envelope constants and output path
//! - [`synth`]: Envelope and sample synthesis
//! - [`audio`]: WAV encoding
//! - [`generation`]: The `generate_chime` entry point
//! - [`error`]: Error types and codes (ChimeError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use timer_chime::{generate_chime, EnvelopeConfig, ToneParams};
//!
//! let chime = generate_chime(
//!     Path::new("timer-complete.wav"),
//!     &ToneParams::new(1.0, 800.0, 44100),
//!     &EnvelopeConfig::default(),
//! )?;
//! println!("{}", chime);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod logging;
pub mod synth;

// Re-export commonly used types at crate root for convenience
pub use config::{ChimeConfig, EnvelopeConfig, ToneParams};
pub use error::{ChimeError, ErrorCode, Result};
pub use generation::{generate_chime, generate_default_chime, GeneratedChime};
