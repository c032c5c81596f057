//! Real-world scenario benchmarks.
//!
//! The tone voice on its own, and the voice pool as the audio callback
//! drives it during a game.

mod synth;
mod voices;

pub use synth::bench_synth;
pub use voices::bench_voices;
