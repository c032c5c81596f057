//! Playback - replays the sequence one pulse at a time
//!
//! One cue is outstanding at any moment. Each cue's effects are applied
//! before the next cue is scheduled, so a pulse always re-opens input before
//! the following pulse starts, whatever the timing constants are.
//!
//! ```text
//!   Step(0) ──reopen_after──▶ ReopenInput(0) ──rest──▶ Step(1) ─ … ─▶ Step(N) = done
//!   light 0, tone, close      input open                light 1, tone
//! ```
//!
//! `rest` is `step_interval - reopen_after`, so pulses start exactly one
//! `step_interval` apart.

use std::time::Duration;

/// A scheduled playback event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Start pulse `i` (or finish, when `i` equals the sequence length)
    Step(usize),
    /// Re-open input partway through pulse `i`
    ReopenInput(usize),
}

/// The next cue and how long after the current one it is due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub delay: Duration,
    pub cue: Cue,
}

/// What the controller must do in response to a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Highlight `index`, sound its tone, then schedule `next`.
    Pulse { index: usize, next: Scheduled },
    /// Input is open again; schedule `next`.
    Reopen { next: Scheduled },
    /// Every index has been shown.
    Finished,
    /// Cue arrived out of order and was not applied.
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Playback {
    len: usize,
    expected: Cue,
    cursor: Option<usize>,
    input_open: bool,
    finished: bool,
    step_interval: Duration,
    reopen_after: Duration,
}

impl Playback {
    pub fn new(len: usize, step_interval: Duration, reopen_after: Duration) -> Self {
        debug_assert!(reopen_after < step_interval);
        Self {
            len,
            expected: Cue::Step(0),
            cursor: None,
            input_open: false,
            finished: false,
            step_interval,
            reopen_after,
        }
    }

    /// The first pulse starts one full interval after playback begins.
    pub fn first(&self) -> Scheduled {
        Scheduled {
            delay: self.step_interval,
            cue: Cue::Step(0),
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn input_open(&self) -> bool {
        self.input_open
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn on_cue(&mut self, cue: Cue) -> Advance {
        if self.finished || cue != self.expected {
            return Advance::Rejected;
        }

        match cue {
            Cue::Step(index) if index < self.len => {
                self.cursor = Some(index);
                self.input_open = false;
                self.expected = Cue::ReopenInput(index);
                Advance::Pulse {
                    index,
                    next: Scheduled {
                        delay: self.reopen_after,
                        cue: self.expected,
                    },
                }
            }
            Cue::Step(_) => {
                self.cursor = None;
                self.input_open = false;
                self.finished = true;
                Advance::Finished
            }
            Cue::ReopenInput(index) => {
                self.input_open = true;
                self.expected = Cue::Step(index + 1);
                Advance::Reopen {
                    next: Scheduled {
                        delay: self.step_interval.saturating_sub(self.reopen_after),
                        cue: self.expected,
                    },
                }
            }
        }
    }
}
