use std::error::Error;
use std::path::Path;

use log::info;
use tone_bank::{render_chord, ChordSettings};

/// Renders `frequencies` as a chord and writes it as a mono wav file
pub fn render_to_wav<P: AsRef<Path>>(
    frequencies: &[f64],
    path: P,
    settings: &ChordSettings,
) -> Result<(), Box<dyn Error>> {
    let audio = render_chord(frequencies, settings)?;
    wav_util::write_mono(audio, path.as_ref(), settings.sample_rate)?;
    info!("wrote {} tones to {}", frequencies.len(), path.as_ref().display());
    Ok(())
}
