//! CLI argument parser.
//!
//! Every option defaults to the stock beep constant, so running the binary
//! with no arguments writes the stock beep exactly.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    ToneParams, DEFAULT_AMPLITUDE, DEFAULT_DURATION_SEC, DEFAULT_FREQUENCY_HZ, DEFAULT_OUTPUT,
    DEFAULT_SAMPLE_RATE,
};

/// tonegen: render a sine-wave tone to a mono 16-bit PCM WAV file
#[derive(Parser, Debug)]
#[command(name = "tonegen")]
#[command(about = "Renders a sine-wave tone to a mono 16-bit PCM WAV file")]
#[command(version)]
pub struct Cli {
    /// Output sample rate in Hz
    #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Tone duration in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SEC)]
    pub duration: f64,

    /// Tone frequency in Hz
    #[arg(short, long, default_value_t = DEFAULT_FREQUENCY_HZ)]
    pub frequency: f64,

    /// Peak amplitude as a fraction of full scale, 0.0 to 1.0
    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE)]
    pub amplitude: f64,

    /// Output WAV file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the tone parameters described by the arguments.
    pub fn params(&self) -> ToneParams {
        ToneParams {
            sample_rate: self.sample_rate,
            duration_sec: self.duration,
            frequency_hz: self.frequency,
            amplitude: self.amplitude,
        }
    }

    /// Returns the effective output path.
    ///
    /// Defaults to `assets/beep.wav` relative to the working directory.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_stock_beep() {
        let cli = Cli::parse_from(["tonegen"]);
        assert_eq!(cli.params(), ToneParams::default());
        assert_eq!(cli.output_path(), PathBuf::from("assets/beep.wav"));
    }

    #[test]
    fn params_from_arguments() {
        let cli = Cli {
            sample_rate: 22_050,
            duration: 1.0,
            frequency: 880.0,
            amplitude: 0.25,
            output: None,
        };
        let params = cli.params();
        assert_eq!(params.sample_rate, 22_050);
        assert_eq!(params.duration_sec, 1.0);
        assert_eq!(params.frequency_hz, 880.0);
        assert_eq!(params.amplitude, 0.25);
    }

    #[test]
    fn output_path_override() {
        let cli = Cli {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: DEFAULT_DURATION_SEC,
            frequency: DEFAULT_FREQUENCY_HZ,
            amplitude: DEFAULT_AMPLITUDE,
            output: Some(PathBuf::from("out/tone.wav")),
        };
        assert_eq!(cli.output_path(), PathBuf::from("out/tone.wav"));
    }

    #[test]
    fn option_overrides_parse() {
        let cli = Cli::parse_from([
            "tonegen",
            "--frequency",
            "880",
            "--duration",
            "0.5",
            "--output",
            "tone.wav",
        ]);
        assert_eq!(cli.params().frequency_hz, 880.0);
        assert_eq!(cli.params().duration_sec, 0.5);
        assert_eq!(cli.output_path(), PathBuf::from("tone.wav"));
    }
}
