use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToneError {
    #[error("invalid tone frequency: {0}")]
    InvalidFrequency(f64),

    #[error("frequency {freq} exceeds the nyquist limit {nyquist}")]
    AboveNyquist { freq: f64, nyquist: f64 },

    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
}
