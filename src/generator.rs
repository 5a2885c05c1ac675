//! Tone file generation.
//!
//! Orchestrates the full run: ensure the output directory exists, render
//! the sample buffer, and serialize it to a WAV file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio;
use crate::config::ToneParams;
use crate::error::{Result, ToneError};
use crate::synth;

/// Summary of a successfully written tone file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTone {
    /// Path of the written WAV file.
    pub path: PathBuf,

    /// Number of samples in the file.
    pub sample_count: usize,

    /// Sample rate declared in the file header, in Hz.
    pub sample_rate: u32,

    /// Realized audio duration in seconds (`sample_count / sample_rate`).
    pub duration_sec: f64,
}

/// Creates the missing parent directories of `path`.
///
/// No-op if they already exist or if `path` has no parent component.
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ToneError::dir_create_failed(parent, e))?;
        }
    }
    Ok(())
}

/// Renders a tone and writes it to `path` as a mono 16-bit PCM WAV file.
///
/// Any existing file at `path` is replaced. A failure mid-write may leave
/// a truncated file behind; there is no cleanup pass. Parameters the WAV
/// container cannot encode (a zero sample rate, more samples than the
/// header's size fields can count) fail before anything is rendered.
///
/// # Arguments
///
/// * `params` - The tone to render
/// * `path` - Output WAV file path; missing parent directories are created
///
/// # Returns
///
/// A [`RenderedTone`] summary of the written file.
///
/// # Example
///
/// ```ignore
/// use tonegen::config::ToneParams;
/// use tonegen::generator::generate_tone_file;
///
/// let tone = generate_tone_file(&ToneParams::default(), Path::new("assets/beep.wav"))?;
/// println!("{} samples", tone.sample_count);
/// ```
pub fn generate_tone_file(params: &ToneParams, path: &Path) -> Result<RenderedTone> {
    ensure_output_dir(path)?;
    audio::check_encodable(
        synth::sample_count(params.sample_rate, params.duration_sec),
        params.sample_rate,
    )?;

    let samples = synth::render(params);
    audio::write_wav(&samples, path, params.sample_rate)?;

    Ok(RenderedTone {
        path: path.to_path_buf(),
        sample_count: samples.len(),
        sample_rate: params.sample_rate,
        duration_sec: audio::samples_to_duration(samples.len(), params.sample_rate),
    })
}
