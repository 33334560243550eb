//! End-to-end tests: generate chime files and decode them again.

use std::f64::consts::PI;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use tempfile::tempdir;
use timer_chime::{generate_chime, generate_default_chime, EnvelopeConfig, ErrorCode, ToneParams};

fn read_samples(path: &Path) -> (hound::WavSpec, Vec<i16>) {
    let mut reader = WavReader::open(path).unwrap();
    let spec = reader.spec();
    let samples = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    (spec, samples)
}

#[test]
fn default_chime_decodes_as_mono_16_bit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("timer-complete.wav");
    generate_default_chime(&path).unwrap();

    let (spec, samples) = read_samples(&path);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.sample_format, SampleFormat::Int);
    assert_eq!(samples.len(), 44100);
    assert_eq!(samples[0], 0);
}

#[test]
fn sample_count_is_floor_of_duration_times_rate() {
    let dir = tempdir().unwrap();
    let cases = [
        (1.0, 44100, 44100),
        (0.5, 48000, 24000),
        (0.25, 8000, 2000),
        (0.333, 1000, 333),
        (1.5, 22050, 33075),
    ];

    for (i, (duration, rate, expected)) in cases.into_iter().enumerate() {
        let path = dir.path().join(format!("case-{}.wav", i));
        let chime = generate_chime(
            &path,
            &ToneParams::new(duration, 800.0, rate),
            &EnvelopeConfig::default(),
        )
        .unwrap();
        assert_eq!(chime.sample_count, expected);

        let (spec, samples) = read_samples(&path);
        assert_eq!(spec.sample_rate, rate);
        assert_eq!(samples.len(), expected, "duration {} rate {}", duration, rate);
    }
}

#[test]
fn decoded_waveform_follows_envelope() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bell.wav");
    generate_default_chime(&path).unwrap();
    let (_, samples) = read_samples(&path);

    for (i, &sample) in samples.iter().enumerate().step_by(31) {
        let t = i as f64 / 44100.0;
        let amplitude = if t < 0.1 {
            0.3 * (t / 0.1)
        } else {
            0.3 * (-3.0 * (t - 0.1) / 0.9).exp()
        };
        let expected = amplitude * (2.0 * PI * 800.0 * t).sin() * 32767.0;
        assert!(
            (sample as f64 - expected).abs() <= 1.0,
            "sample {} = {}, expected {:.2}",
            i,
            sample,
            expected
        );
    }

    let early_peak = samples[..4410].iter().map(|s| (*s as i32).abs()).max().unwrap();
    let late_peak = samples[40000..].iter().map(|s| (*s as i32).abs()).max().unwrap();
    assert!(late_peak < early_peak / 5);
}

#[test]
fn identical_params_give_identical_files() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("first.wav");
    let second = dir.path().join("second.wav");
    let params = ToneParams::new(0.75, 987.77, 32000);

    generate_chime(&first, &params, &EnvelopeConfig::default()).unwrap();
    generate_chime(&second, &params, &EnvelopeConfig::default()).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn full_scale_envelope_stays_in_range() {
    let dir = tempdir().unwrap();
    let envelope = EnvelopeConfig {
        peak: 1.0,
        fade_in: 0.0,
        decay_rate: 1e-6,
    };

    for (i, (frequency, rate)) in [(1.0, 4), (250.0, 1000), (11025.0, 44100)]
        .into_iter()
        .enumerate()
    {
        let path = dir.path().join(format!("loud-{}.wav", i));
        generate_chime(&path, &ToneParams::new(1.0, frequency, rate), &envelope).unwrap();

        let (_, samples) = read_samples(&path);
        let max = samples.iter().copied().max().unwrap();
        let min = samples.iter().copied().min().unwrap();
        assert_eq!(max, 32767);
        assert_eq!(min, -32767);
    }
}

#[test]
fn duration_equal_to_fade_in_is_well_defined() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("short.wav");

    let chime = generate_chime(
        &path,
        &ToneParams::new(0.1, 800.0, 44100),
        &EnvelopeConfig::default(),
    )
    .unwrap();
    assert_eq!(chime.sample_count, 4410);

    let (_, samples) = read_samples(&path);
    assert_eq!(samples.len(), 4410);
    assert_eq!(samples[0], 0);
    let peak = samples.iter().map(|s| (*s as i32).abs()).max().unwrap();
    assert!(peak <= 9830);
}

#[test]
fn shorter_than_fade_in_is_well_defined() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blip.wav");

    generate_chime(
        &path,
        &ToneParams::new(0.05, 800.0, 44100),
        &EnvelopeConfig::default(),
    )
    .unwrap();

    let (_, samples) = read_samples(&path);
    assert_eq!(samples.len(), 2205);
}

#[test]
fn invalid_parameters_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("never.wav");

    for params in [
        ToneParams::new(0.0, 800.0, 44100),
        ToneParams::new(1.0, -800.0, 44100),
        ToneParams::new(1.0, 800.0, 0),
    ] {
        let err = generate_chime(&path, &params, &EnvelopeConfig::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
    }
    assert!(!path.exists());
}

#[test]
fn unwritable_destination_is_io_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("bell.wav");

    let err = generate_default_chime(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::IoFailure);
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn existing_file_is_overwritten() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bell.wav");
    std::fs::write(&path, b"not a wav file at all").unwrap();

    generate_chime(
        &path,
        &ToneParams::new(0.2, 800.0, 8000),
        &EnvelopeConfig::default(),
    )
    .unwrap();

    let (_, samples) = read_samples(&path);
    assert_eq!(samples.len(), 1600);
}
