//! WAV file writer for audio output.
//!
//! Writes mono 16-bit linear PCM using the hound crate.

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{ChimeError, Result};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (signed 16-bit).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Returns the WAV header parameters for a mono 16-bit stream.
pub fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Writes 16-bit samples to a mono WAV file, replacing any existing file.
///
/// # Arguments
///
/// * `samples` - Quantized audio samples in time order
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz
///
/// # Example
///
/// ```ignore
/// use timer_chime::audio::write_wav;
///
/// let samples = vec![0i16, 1200, -1200, 0];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 44100)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    let writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| {
        ChimeError::io_failure(format!("Failed to create WAV file {}", path.display()), e)
    })?;

    write_samples(writer, samples)
}

/// Writes 16-bit samples to an in-memory WAV buffer.
///
/// Returns the WAV file contents as a byte vector.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());

    let writer = WavWriter::new(&mut cursor, wav_spec(sample_rate))
        .map_err(|e| ChimeError::io_failure("Failed to create WAV writer", e))?;
    write_samples(writer, samples)?;

    Ok(cursor.into_inner())
}

fn write_samples<W: Write + Seek>(mut writer: WavWriter<W>, samples: &[i16]) -> Result<()> {
    for sample in samples {
        writer
            .write_sample(*sample)
            .map_err(|e| ChimeError::io_failure("Failed to write sample", e))?;
    }

    writer
        .finalize()
        .map_err(|e| ChimeError::io_failure("Failed to finalize WAV file", e))
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    sample_count as f64 / sample_rate as f64
}
