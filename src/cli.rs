//! CLI argument parser.
//!
//! Every synthesis flag is optional so that values from a config file or the
//! environment are only overridden when the flag is actually given.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ChimeConfig;
use crate::error::Result;

/// timer-chime: synthesize the timer completion bell as a WAV file
#[derive(Parser, Debug)]
#[command(name = "timer-chime")]
#[command(about = "Synthesizes a soft bell tone and writes it as a mono 16-bit WAV file")]
#[command(version)]
pub struct Cli {
    /// Output WAV file path [default: public/sounds/timer-complete.wav]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Tone length in seconds [default: 1.0]
    #[arg(short, long, allow_negative_numbers = true)]
    pub duration: Option<f64>,

    /// Tone frequency in Hz [default: 800]
    #[arg(short, long, allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Sample rate in Hz [default: 44100]
    #[arg(short = 'r', long)]
    pub sample_rate: Option<u32>,

    /// JSON config file with output, tone and envelope settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Builds the effective configuration: defaults, then the config file,
    /// then `CHIME_*` environment variables, then explicit flags.
    pub fn resolve_config(&self) -> Result<ChimeConfig> {
        let mut config = self.base_config()?;
        config.apply_env();
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// Same as [`Cli::resolve_config`], with `CHIME_*` variables resolved by
    /// `lookup` instead of the process environment.
    pub fn resolve_config_with<F>(&self, lookup: F) -> Result<ChimeConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = self.base_config()?;
        config.apply_vars(lookup);
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// The config file if one was given, defaults otherwise.
    fn base_config(&self) -> Result<ChimeConfig> {
        match self.config {
            Some(ref path) => ChimeConfig::from_json_file(path),
            None => Ok(ChimeConfig::default()),
        }
    }

    /// Overwrites config fields with the flags that were given.
    pub fn apply_overrides(&self, config: &mut ChimeConfig) {
        if let Some(ref output) = self.output {
            config.output = output.clone();
        }
        if let Some(duration) = self.duration {
            config.tone.duration = duration;
        }
        if let Some(frequency) = self.frequency {
            config.tone.frequency = frequency;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.tone.sample_rate = sample_rate;
        }
    }
}
