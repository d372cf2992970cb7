use thiserror::Error;

/// Errors raised when a cavity or search bound falls outside the domain of the mode formula.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModeError {
    #[error("invalid cavity {axis}: {value} (dimensions must be positive and finite)")]
    InvalidDimension { axis: &'static str, value: f64 },

    #[error("invalid wave speed: {0} (must be positive and finite)")]
    InvalidSpeed(f64),

    #[error("invalid frequency cutoff: {0}")]
    InvalidCutoff(f64),
}
