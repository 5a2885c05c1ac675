//! WAV file writer for rendered tones.
//!
//! Writes 16-bit PCM samples to WAV format using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, ToneError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (16-bit PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per audio frame (one mono 16-bit sample).
const BYTES_PER_FRAME: u32 = CHANNELS as u32 * (BITS_PER_SAMPLE as u32 / 8);

/// Maximum number of samples a mono 16-bit WAV file can hold.
///
/// The RIFF chunk size field is 32 bits and covers 36 bytes of header
/// plus the data section, two bytes per sample.
pub const MAX_SAMPLES: usize = ((u32::MAX - 36) / BYTES_PER_FRAME) as usize;

/// Returns the WAV spec for a mono 16-bit PCM stream at the given rate.
fn wav_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Rejects parameters that have no valid WAV encoding.
///
/// The header stores the frame rate, byte rate, and data size in 32-bit
/// fields: a zero rate cannot be encoded, and a rate or sample count
/// that overflows its field would corrupt the header.
pub fn check_encodable(sample_count: usize, sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(ToneError::file_write_failed(
            "Failed to encode WAV header: sample rate is 0 Hz",
        ));
    }

    if sample_rate.checked_mul(BYTES_PER_FRAME).is_none() {
        return Err(ToneError::file_write_failed(format!(
            "Failed to encode WAV header: byte rate at {} Hz overflows the 32-bit field",
            sample_rate
        )));
    }

    if sample_count > MAX_SAMPLES {
        return Err(ToneError::file_write_failed(format!(
            "Failed to encode WAV data: {} samples exceed the format limit of {}",
            sample_count, MAX_SAMPLES
        )));
    }

    Ok(())
}

/// Writes the sample buffer to a WAV file.
///
/// Samples are written in order as little-endian signed 16-bit integers
/// under a header declaring 1 channel, 2 bytes per sample, and a frame
/// rate of `sample_rate`. Any existing file at `path` is replaced. An
/// empty buffer produces a valid header-only file. Rates and counts the
/// header cannot represent are rejected before the file is created.
///
/// # Example
///
/// ```ignore
/// use tonegen::audio::write_wav;
///
/// let samples = vec![0i16, 16_383, 0, -16_383];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 44_100)?;
/// ```
pub fn write_wav(samples: &[i16], path: &Path, sample_rate: u32) -> Result<()> {
    check_encodable(samples.len(), sample_rate)?;

    let mut writer = WavWriter::create(path, wav_spec(sample_rate)).map_err(|e| {
        ToneError::file_write_failed(format!(
            "Failed to create WAV file {}: {}",
            path.display(),
            e
        ))
    })?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| ToneError::file_write_failed(format!("Failed to write sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| ToneError::file_write_failed(format!("Failed to finalize WAV file: {}", e)))?;

    Ok(())
}

/// Writes the sample buffer to an in-memory WAV byte buffer.
///
/// Returns the complete WAV file contents, byte-identical to what
/// [`write_wav`] puts on disk for the same input.
pub fn write_wav_to_buffer(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    check_encodable(samples.len(), sample_rate)?;

    let mut buffer = Vec::new();

    {
        let cursor = std::io::Cursor::new(&mut buffer);
        let mut writer = WavWriter::new(cursor, wav_spec(sample_rate)).map_err(|e| {
            ToneError::file_write_failed(format!("Failed to create WAV writer: {}", e))
        })?;

        for &sample in samples {
            writer.write_sample(sample).map_err(|e| {
                ToneError::file_write_failed(format!("Failed to write sample: {}", e))
            })?;
        }

        writer.finalize().map_err(|e| {
            ToneError::file_write_failed(format!("Failed to finalize WAV buffer: {}", e))
        })?;
    }

    Ok(buffer)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f64 {
    if sample_rate == 0 {
        return 0.0;
    }
    sample_count as f64 / sample_rate as f64
}
