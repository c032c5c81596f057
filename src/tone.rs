//! The tone emitter seam.
//!
//! The game only knows how to ask for "pitch P, for duration D, starting at
//! time T" and how to read the emitter's clock. Everything about audio
//! devices stays behind this trait.

use rtrb::Producer;

use crate::{
    error::ToneError,
    sequencing::Duration,
    synth::{FrameClock, SynthMessage},
};

/// Something that can sound a pitch for a musical duration.
pub trait ToneEmitter {
    /// Schedule `note` (MIDI number) for `duration` starting at `at` seconds
    /// on this emitter's clock.
    fn trigger(&mut self, note: u8, duration: Duration, at: f64) -> Result<(), ToneError>;

    /// Current time on the emitter's clock, in seconds.
    fn now(&self) -> f64;

    /// Cut everything that is sounding or scheduled.
    fn silence(&mut self) {}
}

/// Sends triggers to a [`PolySynth`](crate::synth::PolySynth) on the audio thread.
pub struct SynthEmitter {
    tx: Producer<SynthMessage>,
    clock: FrameClock,
    tempo_bpm: f64,
    velocity: u8,
}

impl SynthEmitter {
    pub fn new(tx: Producer<SynthMessage>, clock: FrameClock, tempo_bpm: f64, velocity: u8) -> Self {
        Self {
            tx,
            clock,
            tempo_bpm,
            velocity,
        }
    }
}

impl ToneEmitter for SynthEmitter {
    fn trigger(&mut self, note: u8, duration: Duration, at: f64) -> Result<(), ToneError> {
        if note > 127 {
            return Err(ToneError::NoteOutOfRange(note));
        }
        if !at.is_finite() || at < 0.0 {
            return Err(ToneError::InvalidTime(at));
        }

        let message = SynthMessage::Trigger {
            note,
            velocity: self.velocity,
            start_frame: self.clock.frame_at(at),
            length_frames: self.clock.frame_at(duration.to_seconds(self.tempo_bpm)),
        };
        self.tx
            .push(message)
            .map_err(|_| ToneError::QueueFull { note })
    }

    fn now(&self) -> f64 {
        self.clock.seconds()
    }

    fn silence(&mut self) {
        let _ = self.tx.push(SynthMessage::AllNotesOff);
    }
}

/// Emitter for when no audio device is available: accepts every trigger,
/// plays nothing.
#[derive(Debug, Default)]
pub struct SilentEmitter {
    started: Option<std::time::Instant>,
}

impl SilentEmitter {
    pub fn new() -> Self {
        Self {
            started: Some(std::time::Instant::now()),
        }
    }
}

impl ToneEmitter for SilentEmitter {
    fn trigger(&mut self, _note: u8, _duration: Duration, _at: f64) -> Result<(), ToneError> {
        Ok(())
    }

    fn now(&self) -> f64 {
        self.started
            .map(|started| started.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }
}

impl<E: ToneEmitter + ?Sized> ToneEmitter for Box<E> {
    fn trigger(&mut self, note: u8, duration: Duration, at: f64) -> Result<(), ToneError> {
        (**self).trigger(note, duration, at)
    }

    fn now(&self) -> f64 {
        (**self).now()
    }

    fn silence(&mut self) {
        (**self).silence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtrb::RingBuffer;

    #[test]
    fn eighth_note_becomes_frames() {
        let (tx, mut rx) = RingBuffer::<SynthMessage>::new(4);
        let clock = FrameClock::new(48_000.0);
        let mut emitter = SynthEmitter::new(tx, clock.clone(), 120.0, 100);

        clock.advance(4_800);
        emitter
            .trigger(64, Duration::EIGHTH, emitter.now())
            .unwrap();

        assert_eq!(
            rx.pop().unwrap(),
            SynthMessage::Trigger {
                note: 64,
                velocity: 100,
                start_frame: 4_800,
                length_frames: 12_000,
            }
        );
    }

    #[test]
    fn full_queue_is_reported() {
        let (tx, _rx) = RingBuffer::<SynthMessage>::new(1);
        let mut emitter = SynthEmitter::new(tx, FrameClock::new(48_000.0), 120.0, 100);

        assert!(emitter.trigger(60, Duration::EIGHTH, 0.0).is_ok());
        assert_eq!(
            emitter.trigger(60, Duration::EIGHTH, 0.0),
            Err(ToneError::QueueFull { note: 60 })
        );
    }

    #[test]
    fn rejects_bad_input() {
        let (tx, _rx) = RingBuffer::<SynthMessage>::new(4);
        let mut emitter = SynthEmitter::new(tx, FrameClock::new(48_000.0), 120.0, 100);

        assert_eq!(
            emitter.trigger(200, Duration::EIGHTH, 0.0),
            Err(ToneError::NoteOutOfRange(200))
        );
        assert!(matches!(
            emitter.trigger(60, Duration::EIGHTH, f64::NAN),
            Err(ToneError::InvalidTime(_))
        ));
    }

    #[test]
    fn silence_sends_all_notes_off() {
        let (tx, mut rx) = RingBuffer::<SynthMessage>::new(4);
        let mut emitter = SynthEmitter::new(tx, FrameClock::new(48_000.0), 120.0, 100);
        emitter.silence();
        assert_eq!(rx.pop().unwrap(), SynthMessage::AllNotesOff);
    }

    #[test]
    fn silent_emitter_accepts_everything() {
        let mut emitter = SilentEmitter::new();
        assert!(emitter.trigger(60, Duration::EIGHTH, emitter.now()).is_ok());
        assert!(emitter.now() >= 0.0);
    }
}
