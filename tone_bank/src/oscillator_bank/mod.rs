//! This module contains a bank of sine oscillators summed into one signal.

use std::f64::consts::PI;

use log::trace;

use crate::error::ToneError;
use crate::oscillator::SineOscillator;

// used to keep track of the state of oscillators so process_buf continues where the last call stopped
#[derive(Debug, Clone, Default)]
struct OscillatorState {
    y_1: f64,
    y_2: f64,
}

#[derive(Debug, Clone)]
pub struct OscillatorBank {
    sample_rate: f64,
    oscillators: Vec<(OscillatorState, SineOscillator)>,
}

impl OscillatorBank {
    #[inline]
    pub fn new(sample_rate: f64, capacity: usize) -> Self {
        Self {
            sample_rate,
            oscillators: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// Adds a sine tone starting at phase zero.
    /// # Arguments
    /// * `freq` - The frequency in Hz (must be positive and at most half the sample rate)
    /// * `gain` - The peak amplitude of the tone
    pub fn add_tone(&mut self, freq: f64, gain: f64) -> Result<(), ToneError> {
        if !(freq.is_finite() && freq > 0.0) {
            return Err(ToneError::InvalidFrequency(freq));
        }
        let nyquist = self.sample_rate / 2.0;
        if freq > nyquist {
            return Err(ToneError::AboveNyquist { freq, nyquist });
        }
        let arg = 2.0 * PI * freq / self.sample_rate;
        let oscillator = SineOscillator::new(arg, gain);
        let (y_1, y_2) = oscillator.initial_history();
        trace!("tone at {} Hz ({} rad/sample), gain {}", freq, arg, gain);
        self.oscillators.push((OscillatorState { y_1, y_2 }, oscillator));
        Ok(())
    }

    /// Adds the output of every oscillator into `buf`.
    /// Consecutive calls produce a continuous signal.
    #[inline]
    pub fn process_buf(&mut self, buf: &mut [f64]) {
        for (state, osc) in &mut self.oscillators {
            for sample in buf.iter_mut() {
                let y = osc.process_single(state.y_1, state.y_2);
                *sample += y;
                state.y_2 = state.y_1;
                state.y_1 = y;
            }
        }
    }

    /// Restarts every oscillator from phase zero
    #[inline]
    pub fn reset_state(&mut self) {
        for (state, osc) in &mut self.oscillators {
            let (y_1, y_2) = osc.initial_history();
            *state = OscillatorState { y_1, y_2 };
        }
    }
}
