use std::f64::consts::PI;

pub type RealWindowFn = fn(&mut [f64]);

pub trait WindowFunction {
    // applies window function to the buffer
    fn real_window(buffer: &mut [f64]);
}

/// Four term Blackman-Harris window, for good sidelobe rejection between nearby tones
pub struct BlackmanHarris;

impl WindowFunction for BlackmanHarris {
    fn real_window(buffer: &mut [f64]) {
        let size = buffer.len() as f64;
        for (i, v) in buffer.iter_mut().enumerate() {
            let x = i as f64 * PI / size;
            *v *= 0.35875 - 0.48829 * (2.0 * x).cos() + 0.14128 * (4.0 * x).cos() - 0.01168 * (6.0 * x).cos();
        }
    }
}

pub struct Rectangular;

impl WindowFunction for Rectangular {
    fn real_window(_buffer: &mut [f64]) {}
}
