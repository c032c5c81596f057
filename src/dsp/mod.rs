//! Low-level DSP primitives used by the graph nodes.
//!
//! Allocation-free and realtime-safe, so they can live directly inside the
//! voices the audio thread renders.

/// Attack/decay/sustain/release envelope generator.
pub mod envelope;
/// Oscillator waveforms.
pub mod oscillator;

pub use envelope::EnvelopeState;
pub use oscillator::OscillatorWaveform;
