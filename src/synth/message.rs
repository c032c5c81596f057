use std::collections::VecDeque;

use rtrb::Consumer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SynthMessage {
    /// Play `note` from `start_frame` for `length_frames`, then release.
    Trigger {
        note: u8,
        velocity: u8,
        start_frame: u64,
        length_frames: u64,
    },
    AllNotesOff,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthMessage>;
}

impl MessageReceiver for Consumer<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        Consumer::pop(self).ok()
    }
}

/// Offline rendering: feed a prepared queue instead of a ring buffer.
impl MessageReceiver for VecDeque<SynthMessage> {
    fn pop(&mut self) -> Option<SynthMessage> {
        self.pop_front()
    }
}
