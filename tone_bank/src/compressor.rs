use log::trace;

use crate::error::ToneError;

// below this the level is treated as silence
const MIN_LEVEL_DB: f64 = -120.0;

/// A feed-forward dynamics compressor with a soft knee and one-pole attack/release smoothing.
/// The defaults are the browser `DynamicsCompressorNode` settings used for playing many tones at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compressor {
    /// Level in dB above which gain is reduced
    pub threshold_db: f64,
    /// Width in dB of the region around the threshold where the ratio fades in
    pub knee_db: f64,
    /// Input dB change needed for 1 dB of output change above the threshold
    pub ratio: f64,
    /// Seconds to react to rising levels
    pub attack: f64,
    /// Seconds to recover after levels drop
    pub release: f64,
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            threshold_db: -24.0,
            knee_db: 30.0,
            ratio: 12.0,
            attack: 0.003,
            release: 0.25,
        }
    }
}

#[inline]
fn to_db(amplitude: f64) -> f64 {
    if amplitude <= 0.0 {
        MIN_LEVEL_DB
    } else {
        (20.0 * amplitude.log10()).max(MIN_LEVEL_DB)
    }
}

#[inline]
fn from_db(db: f64) -> f64 {
    10_f64.powf(db / 20.0)
}

impl Compressor {
    pub fn validate(&self) -> Result<(), ToneError> {
        if !(self.ratio.is_finite() && self.ratio >= 1.0) {
            return Err(ToneError::InvalidSettings("compressor ratio must be at least 1"));
        }
        if !(self.knee_db.is_finite() && self.knee_db >= 0.0) {
            return Err(ToneError::InvalidSettings("compressor knee must be non-negative"));
        }
        if !(self.attack > 0.0 && self.release > 0.0) {
            return Err(ToneError::InvalidSettings("compressor attack and release must be positive"));
        }
        if !self.threshold_db.is_finite() {
            return Err(ToneError::InvalidSettings("compressor threshold must be finite"));
        }
        Ok(())
    }

    /// The static curve: output level in dB for a steady input level in dB
    pub fn output_level(&self, input_db: f64) -> f64 {
        let over = input_db - self.threshold_db;
        if 2.0 * over < -self.knee_db {
            input_db
        } else if self.knee_db > 0.0 && 2.0 * over.abs() <= self.knee_db {
            let knee_pos = over + self.knee_db / 2.0;
            input_db + (1.0 / self.ratio - 1.0) * knee_pos * knee_pos / (2.0 * self.knee_db)
        } else {
            self.threshold_db + over / self.ratio
        }
    }

    /// Compresses `buf` in place, with the gain envelope starting at unity
    pub fn process_buf(&self, buf: &mut [f64], sample_rate: f64) {
        let attack_coeff = (-1.0 / (self.attack * sample_rate)).exp();
        let release_coeff = (-1.0 / (self.release * sample_rate)).exp();
        // smoothed gain change in dB, always <= 0
        let mut gain_db = 0_f64;
        let mut max_reduction = 0_f64;
        for sample in buf.iter_mut() {
            let input_db = to_db(sample.abs());
            let target = self.output_level(input_db) - input_db;
            // more reduction means attacking
            let coeff = if target < gain_db { attack_coeff } else { release_coeff };
            gain_db = coeff * gain_db + (1.0 - coeff) * target;
            max_reduction = max_reduction.min(gain_db);
            *sample *= from_db(gain_db);
        }
        trace!("compressor peak gain reduction {:.2} dB over {} samples", max_reduction, buf.len());
    }
}
