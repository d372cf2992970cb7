use log::{debug, trace};

use crate::cavity::Cavity;
use crate::error::ModeError;
use crate::mode::{Mode, ModeIndex};

/// Speed of sound in air in feet per second
pub const SPEED_OF_SOUND_FT: f64 = 1126.0;
pub const DEFAULT_MAX_MODE: u32 = 5;
pub const DEFAULT_MAX_FREQ: f64 = 100.0;

/// Bounds for enumerating the modes of a cavity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeSearch {
    /// The propagation speed of the wave, in cavity units per second
    pub speed: f64,
    /// Inclusive upper bound on each of `nx`, `ny` and `nz`
    pub max_mode: u32,
    /// Inclusive cutoff applied to the rounded frequency
    pub max_freq: f64,
}

impl Default for ModeSearch {
    fn default() -> Self {
        Self {
            speed: SPEED_OF_SOUND_FT,
            max_mode: DEFAULT_MAX_MODE,
            max_freq: DEFAULT_MAX_FREQ,
        }
    }
}

impl ModeSearch {
    pub fn validate(&self) -> Result<(), ModeError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ModeError::InvalidSpeed(self.speed));
        }
        if self.max_freq.is_nan() {
            return Err(ModeError::InvalidCutoff(self.max_freq));
        }
        Ok(())
    }

    /// Every non-trivial triple with components in `[0, max_mode]`, in lexicographic order.
    pub fn indices(&self) -> impl Iterator<Item = ModeIndex> {
        let max = self.max_mode;
        (0..=max)
            .flat_map(move |nx| (0..=max).flat_map(move |ny| (0..=max).map(move |nz| ModeIndex::new(nx, ny, nz))))
            .filter(|index| !index.is_trivial())
    }
}

/// Rounds to 2 decimal places, breaking exact ties on the scaled value towards the even neighbour.
#[inline]
pub fn round_centi(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Finds the distinct resonant frequencies of `cavity` at or below `search.max_freq`.
///
/// Each frequency is rounded with [`round_centi`] before the cutoff is applied, and two modes
/// whose frequencies round to the same value are reported once. The result is ascending.
pub fn compute(cavity: &Cavity, search: &ModeSearch) -> Result<Vec<f64>, ModeError> {
    cavity.validate()?;
    search.validate()?;

    let mut frequencies = Vec::new();
    for index in search.indices() {
        let f = round_centi(index.frequency(cavity, search.speed));
        if f <= search.max_freq {
            frequencies.push(f);
        }
    }
    let kept = frequencies.len();
    frequencies.sort_by(f64::total_cmp);
    frequencies.dedup();
    debug!(
        "{} distinct frequencies from {} modes at or below {} (max mode {})",
        frequencies.len(),
        kept,
        search.max_freq,
        search.max_mode
    );
    Ok(frequencies)
}

/// Lists every mode of `cavity` whose rounded frequency is at or below `search.max_freq`,
/// ordered by frequency and then by index. Unlike [`compute`], modes sharing a frequency are all kept.
pub fn modes(cavity: &Cavity, search: &ModeSearch) -> Result<Vec<Mode>, ModeError> {
    cavity.validate()?;
    search.validate()?;

    let mut found = search
        .indices()
        .filter_map(|index| Mode::new(index, cavity, search.speed))
        .filter(|mode| mode.rounded_frequency() <= search.max_freq)
        .inspect(|mode| trace!("mode {} ({}) at {}", mode.index, mode.kind, mode.frequency()))
        .collect::<Vec<Mode>>();
    found.sort_by(|a, b| a.frequency().total_cmp(&b.frequency()).then(a.index.cmp(&b.index)));
    debug!("{} modes at or below {}", found.len(), search.max_freq);
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chambers;
    use crate::mode::ModeKind;
    use rand::prelude::*;

    fn unit_cube_search() -> ModeSearch {
        ModeSearch {
            speed: 1126.0,
            max_mode: 1,
            max_freq: 1000.0,
        }
    }

    #[test]
    fn test_unit_cube() {
        let cube = Cavity::new(1.0, 1.0, 1.0);
        let freqs = compute(&cube, &unit_cube_search()).unwrap();
        assert_eq!(freqs, vec![563.0, 796.2, 975.14]);
    }

    #[test]
    fn test_max_mode_zero_is_empty() {
        let search = ModeSearch {
            max_mode: 0,
            ..ModeSearch::default()
        };
        assert_eq!(search.indices().count(), 0);
        assert!(compute(&chambers::KHUFU.cavity, &search).unwrap().is_empty());
        assert!(modes(&chambers::KHUFU.cavity, &search).unwrap().is_empty());
    }

    #[test]
    fn test_indices_skip_trivial() {
        let search = ModeSearch::default();
        let indices = search.indices().collect::<Vec<ModeIndex>>();
        assert_eq!(indices.len(), 6 * 6 * 6 - 1);
        assert_eq!(indices[0], ModeIndex::new(0, 0, 1));
        assert_eq!(indices[indices.len() - 1], ModeIndex::new(5, 5, 5));
    }

    #[test]
    fn test_khufu_defaults() {
        let freqs = compute(&chambers::KHUFU.cavity, &ModeSearch::default()).unwrap();
        assert!(!freqs.is_empty());
        assert_eq!(freqs[0], 16.39);
        assert!(freqs.windows(2).all(|w| w[0] < w[1]));
        assert!(freqs.iter().all(|f| *f > 0.0 && *f <= 100.0));
    }

    #[test]
    fn test_cutoff_applies_to_rounded_value() {
        // (1, 0, 0) lands at 100.004 before rounding
        let cavity = Cavity::new(563.0 / 100.004, 1.0, 1.0);
        let search = ModeSearch {
            max_mode: 1,
            ..ModeSearch::default()
        };
        assert_eq!(compute(&cavity, &search).unwrap(), vec![100.0]);
    }

    #[test]
    fn test_rounding_collapses_close_modes() {
        // L and W differ by less than one part in a million so (1,0,0) and (0,1,0) collide
        let cavity = Cavity::new(10.0, 10.000001, 1.0);
        let search = ModeSearch {
            max_mode: 1,
            max_freq: 100.0,
            ..ModeSearch::default()
        };
        assert_eq!(compute(&cavity, &search).unwrap(), vec![56.3, 79.62]);
        assert_eq!(modes(&cavity, &search).unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_inputs() {
        let search = ModeSearch::default();
        assert!(matches!(
            compute(&Cavity::new(0.0, 1.0, 1.0), &search),
            Err(ModeError::InvalidDimension { axis: "length", .. })
        ));
        assert!(matches!(
            compute(&Cavity::new(1.0, -1.0, 1.0), &search),
            Err(ModeError::InvalidDimension { axis: "width", .. })
        ));
        let cube = Cavity::new(1.0, 1.0, 1.0);
        let bad_speed = ModeSearch { speed: 0.0, ..search };
        assert_eq!(compute(&cube, &bad_speed), Err(ModeError::InvalidSpeed(0.0)));
        let bad_cutoff = ModeSearch { max_freq: f64::NAN, ..search };
        assert!(matches!(modes(&cube, &bad_cutoff), Err(ModeError::InvalidCutoff(_))));
    }

    #[test]
    fn test_negative_cutoff_is_empty() {
        let search = ModeSearch {
            max_freq: -1.0,
            ..ModeSearch::default()
        };
        assert!(compute(&chambers::KHAFRE.cavity, &search).unwrap().is_empty());
    }

    #[test]
    fn test_compute_is_projection_of_modes() {
        for chamber in chambers::ALL.iter() {
            let search = ModeSearch::default();
            let mut projected = modes(&chamber.cavity, &search)
                .unwrap()
                .iter()
                .map(Mode::rounded_frequency)
                .collect::<Vec<f64>>();
            projected.dedup();
            assert_eq!(projected, compute(&chamber.cavity, &search).unwrap());
        }
    }

    #[test]
    fn test_modes_sorted_and_classified() {
        let found = modes(&chambers::MENKAURE.cavity, &ModeSearch::default()).unwrap();
        assert!(found.windows(2).all(|w| w[0].frequency() <= w[1].frequency()));
        // lowest mode runs along the longest wall
        assert_eq!(found[0].index, ModeIndex::new(1, 0, 0));
        assert_eq!(found[0].kind, ModeKind::Axial);
        assert!(found.iter().any(|m| m.kind == ModeKind::Oblique));
    }

    #[test]
    fn test_random_cavities() {
        let mut rng = thread_rng();
        for _ in 0..200 {
            let cavity = Cavity::new(rng.gen_range(0.5..60.0), rng.gen_range(0.5..60.0), rng.gen_range(0.5..60.0));
            let search = ModeSearch {
                speed: rng.gen_range(100.0..5000.0),
                max_mode: rng.gen_range(0..7),
                max_freq: rng.gen_range(10.0..2000.0),
            };
            let freqs = compute(&cavity, &search).unwrap();
            assert!(freqs.windows(2).all(|w| w[0] < w[1]));
            assert!(freqs.iter().all(|f| *f > 0.0 && *f <= search.max_freq));
            assert_eq!(freqs, compute(&cavity, &search).unwrap());

            let wider = ModeSearch {
                max_freq: search.max_freq * 2.0,
                ..search
            };
            let superset = compute(&cavity, &wider).unwrap();
            assert!(freqs.iter().all(|f| superset.contains(f)));
            assert_eq!(&superset[..freqs.len()], &freqs[..]);
        }
    }
}
