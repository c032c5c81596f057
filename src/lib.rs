//! # Simon Says
//!
//! The memory game: the machine plays a growing sequence of colored flashes
//! with tones, the player repeats it, and the first wrong pick ends the game.
//!
//! ## Modules
//!
//! - [`game`] : colors, sequence generator, playback controller, input judge, view model
//! - [`engine`] : virtual-time scheduler driving playback cues
//! - [`tone`] : the tone emitter seam between the game and the audio thread
//! - [`synth`], [`graph`], [`dsp`], [`voices`] : the small synthesizer behind the tones
//! - [`sequencing`] : note names and musical durations
//! - [`config`] : TOML configuration loading and validation
//! - [`error`] : structured error types

pub mod config;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod game;
pub mod graph; // Composable audio graph nodes
pub mod sequencing; // Note names and musical durations
pub mod synth; // Voice pool fed by the game's tone triggers
pub mod tone;
pub mod voices;

pub const MAX_BLOCK_SIZE: usize = 2048;
pub(crate) const MIN_TIME: f32 = 1.0 / 48_000.0;
