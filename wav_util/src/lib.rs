//! Small helpers for moving `f64` audio buffers in and out of 32-bit float wav files.

use std::path::Path;

use log::{debug, warn};
use statrs::statistics::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WavError {
    #[error(transparent)]
    Hound(#[from] hound::Error),

    #[error("channel {channel} has {len} samples, expected {expected}")]
    ChannelMismatch { channel: usize, len: usize, expected: usize },

    #[error("no audio channels given")]
    NoChannels,
}

/// Read a wav file into one vector per channel
pub fn read_wave<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<f64>>, u32), WavError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channel_count = usize::from(spec.channels);
    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, hound::Error>>()?,
        hound::SampleFormat::Int => {
            let scale = f64::from(1_u32 << (spec.bits_per_sample - 1));
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / scale))
                .collect::<Result<Vec<f64>, hound::Error>>()?
        }
    };
    let mut channels = vec![Vec::with_capacity(samples.len() / channel_count); channel_count];
    for (i, sample) in samples.into_iter().enumerate() {
        channels[i % channel_count].push(sample);
    }
    Ok((channels, spec.sample_rate))
}

/// Writes the given channels to a wav file, interleaving them frame by frame.
/// The audio is normalized first if it would clip (see [`scale_audio`]).
pub fn write_wave<P: AsRef<Path>>(mut audio: Vec<Vec<f64>>, path: P, sample_rate: u32) -> Result<(), WavError> {
    let expected = audio.first().ok_or(WavError::NoChannels)?.len();
    for (channel, samples) in audio.iter().enumerate() {
        if samples.len() != expected {
            return Err(WavError::ChannelMismatch { channel, len: samples.len(), expected });
        }
    }
    let spec = hound::WavSpec {
        channels: u16::try_from(audio.len()).map_err(|_| hound::Error::Unsupported)?,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    scale_audio(&mut audio);
    let mut writer = hound::WavWriter::create(path, spec)?;
    for i in 0..expected {
        for channel in &audio {
            writer.write_sample(channel[i] as f32)?;
        }
    }
    writer.finalize()?;
    debug!("wrote {} frames of {} channel audio at {} Hz", expected, audio.len(), sample_rate);
    Ok(())
}

/// Writes a single channel to a wav file
pub fn write_mono<P: AsRef<Path>>(audio: Vec<f64>, path: P, sample_rate: u32) -> Result<(), WavError> {
    write_wave(vec![audio], path, sample_rate)
}

/// Normalizes the signal if the maximum amplitude is greater than 1.0 (uses the absolute value of the amplitude)
pub fn scale_audio(audio: &mut [Vec<f64>]) {
    let max = audio.iter().map(|channel| channel.abs_max()).fold(0_f64, f64::max);
    if max <= 1.0 {
        return;
    }
    warn!("audio peaks at {:.3}, normalizing", max);
    for channel in audio.iter_mut() {
        for v in channel.iter_mut() {
            *v /= max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_wav(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wav_util_{}_{}.wav", name, std::process::id()))
    }

    #[test]
    fn test_scale_audio() {
        let mut audio = vec![vec![0.5, -4.0], vec![2.0, 1.0]];
        scale_audio(&mut audio);
        assert_eq!(audio, vec![vec![0.125, -1.0], vec![0.5, 0.25]]);

        let mut quiet = vec![vec![0.5, -0.25]];
        scale_audio(&mut quiet);
        assert_eq!(quiet, vec![vec![0.5, -0.25]]);
    }

    #[test]
    fn test_write_then_read_stereo() {
        let path = temp_wav("stereo");
        let left = vec![0.0, 0.25, -0.5, 0.75];
        let right = vec![1.0, -1.0, 0.5, 0.0];
        write_wave(vec![left.clone(), right.clone()], &path, 48_000).unwrap();

        let (channels, sample_rate) = read_wave(&path).unwrap();
        assert_eq!(sample_rate, 48_000);
        assert_eq!(channels, vec![left, right]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_write_mono_normalizes() {
        let path = temp_wav("mono");
        write_mono(vec![0.0, 2.0, -1.0], &path, 22_050).unwrap();
        let (channels, _) = read_wave(&path).unwrap();
        assert_eq!(channels, vec![vec![0.0, 1.0, -0.5]]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_channel_mismatch() {
        let err = write_wave(vec![vec![0.0; 4], vec![0.0; 3]], temp_wav("mismatch"), 48_000).unwrap_err();
        assert!(matches!(err, WavError::ChannelMismatch { channel: 1, len: 3, expected: 4 }));
        assert!(matches!(write_wave(Vec::new(), temp_wav("empty"), 48_000), Err(WavError::NoChannels)));
    }
}
