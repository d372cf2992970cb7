//! This crate computes the acoustic resonant frequencies (room modes) of rigid rectangular cavities.
//! Start with [`compute`], or [`Cavity::resonant_frequencies`] for the default search bounds.
//!
//! ```
//! use cavity_modes::{compute, Cavity, ModeSearch};
//!
//! let cube = Cavity::new(1.0, 1.0, 1.0);
//! let search = ModeSearch { speed: 1126.0, max_mode: 1, max_freq: 1000.0 };
//! assert_eq!(compute(&cube, &search).unwrap(), vec![563.0, 796.2, 975.14]);
//! ```

mod cavity;
mod error;
mod mode;
mod search;
pub mod chambers;

pub use cavity::Cavity;
pub use error::ModeError;
pub use mode::{Mode, ModeIndex, ModeKind};
pub use search::{compute, modes, round_centi, ModeSearch, DEFAULT_MAX_FREQ, DEFAULT_MAX_MODE, SPEED_OF_SOUND_FT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_centi() {
        assert_eq!(round_centi(975.1382), 975.14);
        assert_eq!(round_centi(16.3853), 16.39);
        assert_eq!(round_centi(1.0), 1.0);
        // exact binary ties go to the even neighbour
        assert_eq!(round_centi(0.125), 0.12);
        assert_eq!(round_centi(0.375), 0.38);
    }
}
