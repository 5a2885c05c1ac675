//! Audio output module.
//!
//! Provides WAV file writing for rendered tones.

pub mod wav;

// Re-export commonly used items
pub use wav::{
    check_encodable, samples_to_duration, write_wav, write_wav_to_buffer, BITS_PER_SAMPLE,
    CHANNELS, MAX_SAMPLES,
};
