use serde::Serialize;

use crate::error::ModeError;
use crate::search::{compute, ModeSearch};

/// A rigid rectangular cavity. Units are up to the caller, but must agree with the wave speed
/// used to search it (the chamber presets are in feet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cavity {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl Cavity {
    /// Create a new [`Cavity`]. The dimensions are not checked until the cavity is searched,
    /// see [`Self::validate`].
    #[inline]
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Fails with [`ModeError::InvalidDimension`] on the first dimension that is zero, negative or not finite.
    pub fn validate(&self) -> Result<(), ModeError> {
        for (axis, value) in [("length", self.length), ("width", self.width), ("height", self.height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ModeError::InvalidDimension { axis, value });
            }
        }
        Ok(())
    }

    /// Resonant frequencies of this cavity with the default [`ModeSearch`]
    /// (speed of sound 1126 ft/s, mode indices up to 5, frequencies up to 100).
    pub fn resonant_frequencies(&self) -> Result<Vec<f64>, ModeError> {
        compute(self, &ModeSearch::default())
    }
}
