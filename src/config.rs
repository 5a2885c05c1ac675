//! Tone parameter configuration.
//!
//! Contains the immutable parameter tuple describing the tone to render,
//! plus the canonical defaults for the stock beep asset.

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default tone duration in seconds.
pub const DEFAULT_DURATION_SEC: f64 = 0.25;

/// Default tone frequency in Hz (A4).
pub const DEFAULT_FREQUENCY_HZ: f64 = 440.0;

/// Default amplitude as a fraction of full scale, 0.0 to 1.0.
pub const DEFAULT_AMPLITUDE: f64 = 0.5;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "assets/beep.wav";

/// Parameters for a single rendered tone.
///
/// Created once at startup and never mutated. The defaults describe the
/// stock beep: a quarter-second 440 Hz sine at half amplitude, 44.1 kHz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    /// Output sample rate in Hz.
    pub sample_rate: u32,

    /// Tone duration in seconds.
    pub duration_sec: f64,

    /// Tone frequency in Hz.
    pub frequency_hz: f64,

    /// Peak amplitude as a fraction of full scale.
    /// Values above 1.0 saturate at the 16-bit range during rendering.
    pub amplitude: f64,
}

impl ToneParams {
    /// Creates a ToneParams with the default beep values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the parameters.
    ///
    /// Returns a warning message for the first out-of-range value, None
    /// otherwise. Validation is advisory: the generator accepts any
    /// parameters and renders what they describe (an over-range amplitude
    /// saturates, a zero duration yields an empty file); parameters the
    /// WAV container cannot encode fail at the write boundary with a
    /// clean error instead of here.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample rate is 0 Hz, no WAV header can be encoded".to_string());
        }

        if !self.duration_sec.is_finite() || self.duration_sec < 0.0 {
            return Some(format!(
                "duration {} is not a finite non-negative number, output will contain no samples",
                self.duration_sec
            ));
        }

        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Some(format!(
                "frequency {} Hz is not a positive number",
                self.frequency_hz
            ));
        }

        if !(0.0..=1.0).contains(&self.amplitude) {
            return Some(format!(
                "amplitude {} is outside 0.0..=1.0, samples will be clipped",
                self.amplitude
            ));
        }

        None
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_sec: DEFAULT_DURATION_SEC,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }
}
