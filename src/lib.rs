//! tonegen: sine-wave tone file generator.
//!
//! This library renders a pure sine tone as signed 16-bit PCM samples and
//! writes it to a mono WAV file, creating the output directory first.
//!
//! # Modules
//!
//! - [`config`]: Tone parameters and the stock beep defaults (ToneParams)
//! - [`synth`]: Sample buffer computation
//! - [`audio`]: WAV serialization via hound
//! - [`generator`]: The end-to-end render-and-write operation
//! - [`error`]: Error types and codes (ToneError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! use tonegen::config::ToneParams;
//! use tonegen::generator::generate_tone_file;
//!
//! // Write the stock beep: 440 Hz, 0.25 s, half amplitude, 44.1 kHz
//! let tone = generate_tone_file(&ToneParams::default(), Path::new("assets/beep.wav"))?;
//! assert_eq!(tone.sample_count, 11_025);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod synth;

// Re-export commonly used types at crate root for convenience
pub use config::ToneParams;
pub use error::{ErrorCode, Result, ToneError};
pub use generator::{generate_tone_file, RenderedTone};
