//! Sine-wave sample synthesis.
//!
//! Computes the 16-bit PCM sample buffer for a tone described by
//! [`ToneParams`]. All phase math is f64 so the rendered samples stay
//! within one unit of the ideal waveform.

use std::f64::consts::PI;

use crate::config::ToneParams;

/// Full-scale factor for signed 16-bit samples.
const I16_FULL_SCALE: f64 = 32767.0;

/// Returns the number of samples for a tone of the given length.
///
/// The count is `floor(sample_rate * duration_sec)`: truncation, not
/// rounding. Zero, negative, and non-finite durations all yield zero
/// samples.
pub fn sample_count(sample_rate: u32, duration_sec: f64) -> usize {
    if !duration_sec.is_finite() {
        return 0;
    }
    (sample_rate as f64 * duration_sec) as usize
}

/// Renders the complete sample buffer for the given tone.
///
/// Sample `n` holds `amplitude * sin(2π * frequency * n / sample_rate)`
/// scaled to the signed 16-bit range. The float-to-int cast truncates
/// toward zero and saturates at the i16 bounds, so an over-range amplitude
/// clips instead of wrapping.
///
/// The buffer is allocated up front, two bytes per sample; the generator
/// rejects counts beyond the WAV format limit before rendering.
pub fn render(params: &ToneParams) -> Vec<i16> {
    let n_samples = sample_count(params.sample_rate, params.duration_sec);
    let mut samples = Vec::with_capacity(n_samples);

    for n in 0..n_samples {
        let t = n as f64 / params.sample_rate as f64;
        let a = params.amplitude * (2.0 * PI * params.frequency_hz * t).sin();
        samples.push((a * I16_FULL_SCALE) as i16);
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_truncates() {
        assert_eq!(sample_count(44_100, 0.25), 11_025);
        assert_eq!(sample_count(8_000, 0.12345), 987);
        assert_eq!(sample_count(3, 0.5), 1);
    }

    #[test]
    fn sample_count_zero_duration() {
        assert_eq!(sample_count(44_100, 0.0), 0);
    }

    #[test]
    fn sample_count_negative_duration_saturates_to_zero() {
        assert_eq!(sample_count(44_100, -1.0), 0);
    }

    #[test]
    fn sample_count_non_finite_duration_is_zero() {
        assert_eq!(sample_count(44_100, f64::INFINITY), 0);
        assert_eq!(sample_count(44_100, f64::NEG_INFINITY), 0);
        assert_eq!(sample_count(44_100, f64::NAN), 0);
    }

    #[test]
    fn render_zero_duration_is_empty() {
        let params = ToneParams {
            duration_sec: 0.0,
            ..ToneParams::default()
        };
        assert!(render(&params).is_empty());
    }

    #[test]
    fn render_infinite_duration_is_empty() {
        let params = ToneParams {
            duration_sec: f64::INFINITY,
            ..ToneParams::default()
        };
        assert!(render(&params).is_empty());
    }

    #[test]
    fn render_starts_at_zero() {
        let samples = render(&ToneParams::default());
        assert_eq!(samples[0], 0);
    }

    #[test]
    fn render_quarter_period_values() {
        // 1 Hz tone sampled at 4 Hz lands exactly on 0, peak, 0, trough.
        let params = ToneParams {
            sample_rate: 4,
            duration_sec: 1.0,
            frequency_hz: 1.0,
            amplitude: 1.0,
        };
        assert_eq!(render(&params), vec![0, 32_767, 0, -32_767]);
    }

    #[test]
    fn render_over_range_amplitude_saturates() {
        // Amplitude 2.0 would reach ±65534; the cast must clip, not wrap.
        let params = ToneParams {
            sample_rate: 4,
            duration_sec: 1.0,
            frequency_hz: 1.0,
            amplitude: 2.0,
        };
        assert_eq!(render(&params), vec![0, 32_767, 0, -32_768]);
    }

    #[test]
    fn render_matches_ideal_within_one_unit() {
        let params = ToneParams::default();
        let samples = render(&params);
        assert_eq!(samples.len(), 11_025);

        for (n, &sample) in samples.iter().enumerate() {
            let t = n as f64 / params.sample_rate as f64;
            let ideal = (params.amplitude * (2.0 * PI * params.frequency_hz * t).sin()
                * I16_FULL_SCALE)
                .round();
            assert!(
                (sample as f64 - ideal).abs() <= 1.0,
                "sample {} is {} (ideal {})",
                n,
                sample,
                ideal
            );
        }
    }

    #[test]
    fn render_peak_reaches_half_scale() {
        // Default amplitude 0.5 peaks at floor(0.5 * 32767) = 16383.
        let samples = render(&ToneParams::default());
        let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!((16_380..=16_383).contains(&peak), "peak was {}", peak);
    }
}
