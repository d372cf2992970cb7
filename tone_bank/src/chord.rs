use log::{debug, info};

use crate::compressor::Compressor;
use crate::envelope::Envelope;
use crate::error::ToneError;
use crate::oscillator_bank::OscillatorBank;

/// Longest chord in samples, the most a wav data chunk can address
pub const MAX_SAMPLES: f64 = u32::MAX as f64;

/// Settings for rendering a set of frequencies as one sustained chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordSettings {
    pub sample_rate: u32,
    /// Length of the whole chord in seconds, fades included
    pub duration: f64,
    /// Peak amplitude of each individual tone, kept low since dozens of tones are summed
    pub tone_gain: f64,
    pub envelope: Envelope,
    pub compressor: Compressor,
}

impl Default for ChordSettings {
    fn default() -> Self {
        Self {
            sample_rate: 48_000,
            duration: 10.0,
            tone_gain: 0.05,
            envelope: Envelope::default(),
            compressor: Compressor::default(),
        }
    }
}

impl ChordSettings {
    pub fn validate(&self) -> Result<(), ToneError> {
        if self.sample_rate == 0 {
            return Err(ToneError::InvalidSettings("sample rate must be positive"));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(ToneError::InvalidSettings("duration must be a positive number of seconds"));
        }
        if (self.duration * f64::from(self.sample_rate)).round() > MAX_SAMPLES {
            return Err(ToneError::InvalidSettings("duration is too long to render at this sample rate"));
        }
        if !self.tone_gain.is_finite() {
            return Err(ToneError::InvalidSettings("tone gain must be finite"));
        }
        self.envelope.validate()?;
        self.compressor.validate()
    }

    /// Number of samples in the rendered chord
    #[inline]
    pub fn sample_count(&self) -> usize {
        (self.duration * f64::from(self.sample_rate)).round() as usize
    }
}

/// Renders a sine tone for every frequency, summed, faded in and out, then compressed.
/// An empty frequency list renders silence.
pub fn render_chord(frequencies: &[f64], settings: &ChordSettings) -> Result<Vec<f64>, ToneError> {
    settings.validate()?;
    let sample_rate = f64::from(settings.sample_rate);
    let mut bank = OscillatorBank::new(sample_rate, frequencies.len());
    for freq in frequencies {
        bank.add_tone(*freq, settings.tone_gain)?;
    }
    let mut buf = vec![0_f64; settings.sample_count()];
    bank.process_buf(&mut buf);
    settings.envelope.apply(&mut buf, sample_rate);
    settings.compressor.process_buf(&mut buf, sample_rate);
    debug!("rendered {} samples", buf.len());
    info!(
        "rendered {} tones for {}s at {} Hz",
        bank.len(),
        settings.duration,
        settings.sample_rate
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::{peak_frequency, window::{BlackmanHarris, WindowFunction}};

    fn short_settings() -> ChordSettings {
        ChordSettings {
            sample_rate: 8_000,
            duration: 2.0,
            envelope: Envelope { fade_in: 0.5, fade_out: 0.5 },
            ..ChordSettings::default()
        }
    }

    #[test]
    fn test_length_and_fades() {
        let settings = short_settings();
        let buf = render_chord(&[100.0, 250.0], &settings).unwrap();
        assert_eq!(buf.len(), 16_000);
        assert_eq!(buf[0], 0.0);
        assert!(buf[buf.len() - 1].abs() < 0.001);
        assert!(buf.iter().all(|v| v.abs() <= 2.0 * settings.tone_gain));
    }

    #[test]
    fn test_single_tone_peak() {
        let settings = short_settings();
        let buf = render_chord(&[563.0], &settings).unwrap();
        let peak = peak_frequency(&buf, 8_000.0, BlackmanHarris::real_window).unwrap();
        assert!((peak - 563.0).abs() < 1.0);
    }

    #[test]
    fn test_empty_chord_is_silent() {
        let buf = render_chord(&[], &short_settings()).unwrap();
        assert!(buf.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_rejects_tone_above_nyquist() {
        let err = render_chord(&[100.0, 4_500.0], &short_settings()).unwrap_err();
        assert!(matches!(err, ToneError::AboveNyquist { .. }));
    }

    #[test]
    fn test_rejects_overlong_duration() {
        let settings = ChordSettings { duration: 1e20, ..ChordSettings::default() };
        assert_eq!(
            render_chord(&[100.0], &settings),
            Err(ToneError::InvalidSettings("duration is too long to render at this sample rate"))
        );
        // just under the limit still validates without allocating
        let settings = ChordSettings { duration: MAX_SAMPLES / 48_000.0 - 1.0, ..ChordSettings::default() };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_settings() {
        let settings = ChordSettings { duration: 0.0, ..short_settings() };
        assert!(render_chord(&[100.0], &settings).is_err());
        let settings = ChordSettings { sample_rate: 0, ..short_settings() };
        assert!(render_chord(&[100.0], &settings).is_err());
    }
}
