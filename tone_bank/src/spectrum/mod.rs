//! FFT helpers for checking what frequencies a rendered signal contains.

use log::debug;
use rustfft::algorithm::Radix4;
use rustfft::num_complex::Complex;
use rustfft::{Fft, FftDirection};
use window::RealWindowFn;

use crate::error::ToneError;

pub mod window;

/// A structure for calculating FFTs
pub struct FftCalculator {
    fft_planner: Radix4<f64>,
    // the size passed to create the fft planner
    pub size: usize,
    pub zero_pad_length: usize,
    internal_buf: Vec<f64>,
}

impl std::fmt::Debug for FftCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftCalculator")
            .field("size", &self.size)
            .field("zero_pad_length", &self.zero_pad_length)
            .finish()
    }
}

impl FftCalculator {
    /// Construct a new Fft calculator with given size and zero pad length
    /// # Arguments
    /// * `size` - the size of the fft to calculate
    /// * `zero_pad_length` - the amount of zero padding to add to end of an input signal
    /// # Note: `size` + `zero_pad_length` should be a power of 2.
    pub fn new(size: usize, zero_pad_length: usize) -> Result<Self, ToneError> {
        if !(size + zero_pad_length).is_power_of_two() {
            return Err(ToneError::InvalidSettings("fft size plus zero padding must be a power of 2"));
        }
        Ok(Self {
            fft_planner: Radix4::new(size + zero_pad_length, FftDirection::Forward),
            size,
            zero_pad_length,
            internal_buf: vec![0_f64; size],
        })
    }

    /// Smallest calculator that fits `size` samples
    pub fn padded_for(size: usize) -> Result<Self, ToneError> {
        let total = size.max(1).next_power_of_two();
        Self::new(size, total - size)
    }

    #[inline]
    pub fn total_len(&self) -> usize {
        self.size + self.zero_pad_length
    }

    /// Computes the fft of the given real-valued signal
    pub fn real_fft(&mut self, samples: &[f64], window_fn: RealWindowFn) -> Vec<Complex<f64>> {
        assert!(samples.len() == self.size);
        self.internal_buf.copy_from_slice(samples);
        window_fn(&mut self.internal_buf[..]);
        let mut out = Vec::with_capacity(self.total_len());
        out.extend(self.internal_buf.iter().map(|v| Complex::<f64>::new(*v, 0.0)));
        out.resize(self.total_len(), Complex::<f64>::new(0.0, 0.0));
        self.fft_planner.process(&mut out[..]);
        out
    }
}

/// Magnitudes of the non-negative frequency bins of `samples`, windowed with `window_fn`.
/// Bin `k` is centred on `k * sample_rate / calc.total_len()`.
pub fn magnitude_spectrum(calc: &mut FftCalculator, samples: &[f64], window_fn: RealWindowFn) -> Vec<f64> {
    let half = calc.total_len() / 2;
    calc.real_fft(samples, window_fn).into_iter().take(half + 1).map(|v| v.norm()).collect()
}

/// Frequency in Hz of the loudest bin of `samples`, ignoring DC
pub fn peak_frequency(samples: &[f64], sample_rate: f64, window_fn: RealWindowFn) -> Result<f64, ToneError> {
    if samples.is_empty() {
        return Err(ToneError::InvalidSettings("cannot take the spectrum of an empty signal"));
    }
    let mut calc = FftCalculator::padded_for(samples.len())?;
    let spectrum = magnitude_spectrum(&mut calc, samples, window_fn);
    let (bin, _) = spectrum
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, 0_f64), |best, (i, v)| if *v > best.1 { (i, *v) } else { best });
    let freq = bin as f64 * sample_rate / calc.total_len() as f64;
    debug!("spectral peak in bin {} of {} ({} Hz)", bin, calc.total_len(), freq);
    Ok(freq)
}
