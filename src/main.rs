//! timer-chime: writes the timer completion bell to a WAV file.

use timer_chime::cli::Cli;
use timer_chime::error::Result;
use timer_chime::generation::generate_chime;
use timer_chime::logging::init_logging;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.resolve_config()?;
    config.validate()?;

    tracing::debug!(
        "Generating {}s tone at {} Hz, {} Hz sample rate",
        config.tone.duration,
        config.tone.frequency,
        config.tone.sample_rate
    );

    let chime = generate_chime(&config.output, &config.tone, &config.envelope)?;

    if cli.json {
        println!("{}", chime.to_json()?);
    } else {
        println!("{}", chime);
    }

    Ok(())
}
