//! tonegen: renders a sine-wave tone to a mono 16-bit PCM WAV file.
//!
//! With no arguments this writes the stock beep (440 Hz, 0.25 s, half
//! amplitude, 44.1 kHz) to `assets/beep.wav`, creating the directory if
//! needed. On success the output path is confirmed on stdout; all other
//! status detail goes to stderr.

use tonegen::cli::Cli;
use tonegen::error::Result;
use tonegen::generator::generate_tone_file;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let params = cli.params();
    let output_path = cli.output_path();

    if let Some(warning) = params.validate() {
        eprintln!("Warning: {}", warning);
    }

    eprintln!("Frequency: {} Hz", params.frequency_hz);
    eprintln!("Duration: {}s", params.duration_sec);
    eprintln!("Sample rate: {} Hz", params.sample_rate);
    eprintln!("Amplitude: {}", params.amplitude);
    eprintln!("Output: {}", output_path.display());

    let tone = generate_tone_file(&params, &output_path)?;

    eprintln!(
        "Wrote {} samples ({:.2}s at {} Hz)",
        tone.sample_count, tone.duration_sec, tone.sample_rate
    );
    println!("Generated {}", tone.path.display());

    Ok(())
}
