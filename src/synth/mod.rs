// Voice management for the game's tones
// The audio thread owns a PolySynth; the game reaches it only through
// SynthMessage triggers and reads time back from the shared FrameClock.

pub mod clock;
pub mod factory;
pub mod message;
pub mod poly;
pub mod voice;

pub use clock::FrameClock;
pub use factory::VoiceFactory;
pub use message::{MessageReceiver, SynthMessage};
pub use poly::PolySynth;
