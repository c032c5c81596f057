//! Core game logic: colors, sequence generator, playback controller, input
//! judge and the view model the front end renders.

pub mod color;
pub mod controller;
pub mod observer;
pub mod playback;
pub mod sequence;
pub mod state;
pub mod view;

pub use color::{Color, ColorSpec};
pub use controller::Game;
pub use observer::Observer;
pub use playback::{Cue, Playback};
pub use sequence::{next_sequence, Sequence};
pub use state::{GameStatus, Judgement, Snapshot};
pub use view::{ButtonView, ViewModel};
