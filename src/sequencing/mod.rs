pub mod duration;
pub mod notes;

pub use duration::Duration;
pub use notes::{midi_note_to_freq, note_name};
