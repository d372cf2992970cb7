//! This crate turns a set of frequencies into audio: a bank of recursive sine oscillators,
//! a fade envelope and a compressor, put together by [`render_chord`].

pub mod compressor;
pub mod envelope;
pub mod oscillator;
pub mod oscillator_bank;
pub mod spectrum;
mod chord;
mod error;

pub use chord::{render_chord, ChordSettings, MAX_SAMPLES};
pub use compressor::Compressor;
pub use envelope::Envelope;
pub use error::ToneError;
pub use oscillator::SineOscillator;
pub use oscillator_bank::OscillatorBank;
