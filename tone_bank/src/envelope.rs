use crate::error::ToneError;

/// Level the fade-out decays to by the last sample
pub const FADE_OUT_FLOOR: f64 = 0.001;

/// A linear fade-in followed, at the end of the buffer, by an exponential fade-out to [`FADE_OUT_FLOOR`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Fade-in length in seconds
    pub fade_in: f64,
    /// Fade-out length in seconds
    pub fade_out: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            fade_in: 2.0,
            fade_out: 2.0,
        }
    }
}

impl Envelope {
    pub fn validate(&self) -> Result<(), ToneError> {
        if !(self.fade_in.is_finite() && self.fade_in >= 0.0) {
            return Err(ToneError::InvalidSettings("fade-in must be a non-negative number of seconds"));
        }
        if !(self.fade_out.is_finite() && self.fade_out >= 0.0) {
            return Err(ToneError::InvalidSettings("fade-out must be a non-negative number of seconds"));
        }
        Ok(())
    }

    /// Gain of the envelope at sample `n` of a buffer `len` samples long
    pub fn gain_at(&self, n: usize, len: usize, sample_rate: f64) -> f64 {
        let fade_in_len = (self.fade_in * sample_rate) as usize;
        let fade_out_len = ((self.fade_out * sample_rate) as usize).min(len);
        let mut gain = 1.0;
        if n < fade_in_len {
            gain *= n as f64 / fade_in_len as f64;
        }
        let fade_out_start = len - fade_out_len;
        if n >= fade_out_start && fade_out_len > 0 {
            let progress = (n - fade_out_start + 1) as f64 / fade_out_len as f64;
            gain *= FADE_OUT_FLOOR.powf(progress);
        }
        gain
    }

    /// Applies the envelope to the whole of `buf` in place
    pub fn apply(&self, buf: &mut [f64], sample_rate: f64) {
        let len = buf.len();
        for (n, sample) in buf.iter_mut().enumerate() {
            *sample *= self.gain_at(n, len, sample_rate);
        }
    }
}
