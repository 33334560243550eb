//! Chime generation pipeline.
//!
//! Ties synthesis and WAV output together behind a single entry point.

mod pipeline;

pub use pipeline::{generate_chime, generate_default_chime, GeneratedChime};
