use std::path::PathBuf;

use cavity_modes::{chambers, Cavity, ModeSearch, DEFAULT_MAX_FREQ, DEFAULT_MAX_MODE, SPEED_OF_SOUND_FT};
use clap::{Parser, ValueEnum};
use tone_bank::ChordSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print the resonant frequencies of the Giza burial chambers, or of any rectangular room.
#[derive(Debug, Parser)]
#[command(name = "chamber_tones", version, about)]
pub struct Cli {
    /// Only this chamber (khufu, khafre or menkaure)
    #[arg(long, value_name = "NAME", conflicts_with = "dims")]
    pub chamber: Option<String>,

    /// A custom cavity instead of the chambers
    #[arg(long, num_args = 3, value_names = ["LENGTH", "WIDTH", "HEIGHT"], allow_negative_numbers = true)]
    pub dims: Option<Vec<f64>>,

    /// Wave speed in cavity units per second
    #[arg(long, default_value_t = SPEED_OF_SOUND_FT, allow_negative_numbers = true)]
    pub speed: f64,

    /// Largest mode index searched along each axis
    #[arg(long, default_value_t = DEFAULT_MAX_MODE)]
    pub max_mode: u32,

    /// Highest frequency reported
    #[arg(long, default_value_t = DEFAULT_MAX_FREQ, allow_negative_numbers = true)]
    pub max_freq: f64,

    /// List every mode with its indices instead of the distinct frequencies
    #[arg(long)]
    pub modes: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the frequencies of the first selected cavity as a chord to this wav file
    #[arg(long, value_name = "PATH")]
    pub render: Option<PathBuf>,

    /// Chord length in seconds
    #[arg(long, default_value_t = 10.0, requires = "render")]
    pub duration: f64,

    #[arg(long, default_value_t = 48_000, requires = "render")]
    pub sample_rate: u32,
}

/// A labelled cavity selected on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    pub cavity: Cavity,
}

impl Cli {
    pub fn search(&self) -> ModeSearch {
        ModeSearch {
            speed: self.speed,
            max_mode: self.max_mode,
            max_freq: self.max_freq,
        }
    }

    pub fn chord_settings(&self) -> ChordSettings {
        ChordSettings {
            sample_rate: self.sample_rate,
            duration: self.duration,
            ..ChordSettings::default()
        }
    }

    pub fn targets(&self) -> Result<Vec<Target>, String> {
        if let Some([length, width, height]) = self.dims.as_deref() {
            return Ok(vec![Target {
                name: "Custom cavity".to_string(),
                cavity: Cavity::new(*length, *width, *height),
            }]);
        }
        let to_target = |chamber: &chambers::Chamber| Target {
            name: chamber.name.to_string(),
            cavity: chamber.cavity,
        };
        match &self.chamber {
            Some(key) => chambers::find(key)
                .map(|chamber| vec![to_target(chamber)])
                .ok_or_else(|| format!("unknown chamber '{}', expected one of khufu, khafre, menkaure", key)),
            None => Ok(chambers::ALL.iter().map(to_target).collect()),
        }
    }
}
