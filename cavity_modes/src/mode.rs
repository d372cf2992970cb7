use std::fmt;

use serde::Serialize;

use crate::cavity::Cavity;
use crate::search::round_centi;

/// The integer triple `(nx, ny, nz)` indexing a standing wave along the length, width and height of a cavity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ModeIndex {
    pub nx: u32,
    pub ny: u32,
    pub nz: u32,
}

/// Classification of a mode by how many of its indices are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// One non-zero index, a wave bouncing between two opposite walls
    Axial,
    /// Two non-zero indices
    Tangential,
    /// All three indices non-zero
    Oblique,
}

impl ModeIndex {
    #[inline]
    pub const fn new(nx: u32, ny: u32, nz: u32) -> Self {
        Self { nx, ny, nz }
    }

    /// `(0, 0, 0)` has zero frequency and is not a physical mode
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.nx == 0 && self.ny == 0 && self.nz == 0
    }

    /// Returns `None` for the trivial triple.
    pub fn kind(&self) -> Option<ModeKind> {
        let non_zero = [self.nx, self.ny, self.nz].iter().filter(|n| **n != 0).count();
        match non_zero {
            1 => Some(ModeKind::Axial),
            2 => Some(ModeKind::Tangential),
            3 => Some(ModeKind::Oblique),
            _ => None,
        }
    }

    /// Computes the unrounded frequency of this mode in a rigid rectangular cavity:
    /// `f = (v / 2) * sqrt((nx / L)^2 + (ny / W)^2 + (nz / H)^2)`
    /// # Arguments
    /// * `cavity` - The cavity, assumed to be valid (see [`Cavity::validate`])
    /// * `speed` - The propagation speed of the wave, in cavity units per second
    #[inline]
    pub fn frequency(&self, cavity: &Cavity, speed: f64) -> f64 {
        let x = f64::from(self.nx) / cavity.length;
        let y = f64::from(self.ny) / cavity.width;
        let z = f64::from(self.nz) / cavity.height;
        (speed / 2.0) * (x.powi(2) + y.powi(2) + z.powi(2)).sqrt()
    }
}

impl fmt::Display for ModeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.nx, self.ny, self.nz)
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModeKind::Axial => "axial",
            ModeKind::Tangential => "tangential",
            ModeKind::Oblique => "oblique",
        };
        f.write_str(name)
    }
}

/// A non-trivial resonance of a cavity together with its unrounded frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mode {
    pub index: ModeIndex,
    pub kind: ModeKind,
    frequency: f64,
}

impl Mode {
    /// Returns `None` if `index` is the trivial triple.
    pub fn new(index: ModeIndex, cavity: &Cavity, speed: f64) -> Option<Self> {
        let kind = index.kind()?;
        Some(Self {
            index,
            kind,
            frequency: index.frequency(cavity, speed),
        })
    }

    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// The frequency rounded to 2 decimal places, see [`round_centi`]
    #[inline]
    pub fn rounded_frequency(&self) -> f64 {
        round_centi(self.frequency)
    }
}
