//! A recursive sine oscillator.
//! You are probably looking for [`crate::oscillator_bank::OscillatorBank`] rather than using this directly.

use std::f64::consts::PI;

use num_complex::Complex;

/// A two pole filter with its conjugate poles on the unit circle of the Z-plane.
/// Seeded with the right history it rings forever as a sine wave at the argument of the poles:
/// `y[n] = 2cos(w) * y[n-1] - y[n-2]`
#[derive(Debug, Clone)]
pub struct SineOscillator {
    /// The real part of the pole location doubled
    re_2: f64,
    /// The angle of the pole location in radians per sample
    arg: f64,
    /// The peak amplitude of the generated sine
    amplitude: f64,
}

impl SineOscillator {
    /// Create a new [`SineOscillator`].
    /// # Arguments
    /// * `arg` - The angular frequency in radians per sample (must be in range (0, π])
    /// * `amplitude` - The peak amplitude of the output
    #[inline]
    pub fn new(arg: f64, amplitude: f64) -> Self {
        debug_assert!(arg > 0.0 && arg <= PI);
        Self {
            re_2: arg.cos() * 2.0,
            arg,
            amplitude,
        }
    }

    /// The frequency of the oscillator in Hz at the given sample rate
    #[inline]
    pub fn frequency(&self, sample_rate: f64) -> f64 {
        self.arg * sample_rate / (2.0 * PI)
    }

    /// The values of `(y[-1], y[-2])` that make `y[0]` the start of `amplitude * sin(arg * n)`
    #[inline]
    pub fn initial_history(&self) -> (f64, f64) {
        (-self.amplitude * self.arg.sin(), -self.amplitude * (2.0 * self.arg).sin())
    }

    /// Process a single data point given the required values from the difference equation
    /// and returns `y[n]`.
    /// # Arguments
    /// * `y_1` - value of `y[n-1]`
    /// * `y_2` - value of `y[n-2]`
    #[inline]
    pub fn process_single(&self, y_1: f64, y_2: f64) -> f64 {
        self.re_2 * y_1 - y_2
    }

    /// Returns the locations of the two poles in the filter
    /// The first returned pole will have a positive imaginary component.
    #[inline]
    pub fn get_pole_locs(&self) -> (Complex<f64>, Complex<f64>) {
        (Complex::from_polar(1.0, self.arg), Complex::from_polar(1.0, -self.arg))
    }
}
