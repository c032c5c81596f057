use rtrb::Consumer;

use crate::{
    synth::{
        clock::FrameClock,
        factory::VoiceFactory,
        message::{MessageReceiver, SynthMessage},
        voice::Voice,
    },
    MAX_BLOCK_SIZE,
};

/// Triggers waiting for their start frame. Allocated once, never grows.
const PENDING_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy)]
struct PendingNote {
    note: u8,
    velocity: u8,
    start_frame: u64,
    length_frames: u64,
}

/// Small voice pool that plays scheduled tone triggers.
///
/// Timing is block-accurate: a trigger starts in the first block whose end
/// lies past its start frame, and is released at the first block boundary
/// after its end, so every tone sounds for at least one block.
pub struct PolySynth<F: VoiceFactory, R: MessageReceiver = Consumer<SynthMessage>> {
    voices: Vec<Voice<F::Voice>>,
    rx: R,
    pending: Vec<PendingNote>,
    temp_buffer: Vec<f32>,
    clock: FrameClock,
    gain: f32,
}

impl<F: VoiceFactory, R: MessageReceiver> PolySynth<F, R> {
    pub fn new(factory: F, max_voices: usize, rx: R, clock: FrameClock, gain: f32) -> Self {
        let sample_rate = clock.sample_rate();
        let voices = (0..max_voices.max(1))
            .map(|_| Voice::new(factory.create_voice(), sample_rate))
            .collect();

        Self {
            voices,
            rx,
            pending: Vec::with_capacity(PENDING_CAPACITY),
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            clock,
            gain: gain.clamp(0.0, 1.0),
        }
    }

    /// Render one block (at most `MAX_BLOCK_SIZE` frames) and advance the clock.
    pub fn render_block(&mut self, out: &mut [f32]) {
        debug_assert!(out.len() <= MAX_BLOCK_SIZE);

        while let Some(msg) = self.rx.pop() {
            match msg {
                SynthMessage::Trigger {
                    note,
                    velocity,
                    start_frame,
                    length_frames,
                } => {
                    // Dropped when full rather than allocating on the audio thread
                    if self.pending.len() < PENDING_CAPACITY {
                        self.pending.push(PendingNote {
                            note,
                            velocity,
                            start_frame,
                            length_frames,
                        });
                    }
                }
                SynthMessage::AllNotesOff => {
                    self.pending.clear();
                    for voice in &mut self.voices {
                        voice.release();
                    }
                }
            }
        }

        let block_start = self.clock.frames();
        let block_end = block_start + out.len() as u64;

        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].start_frame < block_end {
                let pending = self.pending.swap_remove(i);
                self.start_note(pending, block_start);
            } else {
                i += 1;
            }
        }

        for voice in &mut self.voices {
            if voice.release_at().is_some_and(|at| at <= block_start) {
                voice.release();
            }
        }

        out.fill(0.0);
        for voice in &mut self.voices {
            if voice.is_active() {
                let frames = &mut self.temp_buffer[..out.len()];
                frames.fill(0.0);
                voice.render(frames);

                for (o, v) in out.iter_mut().zip(frames.iter()) {
                    *o += v * self.gain;
                }
            }
        }

        self.clock.advance(out.len());
    }

    fn start_note(&mut self, pending: PendingNote, block_start: u64) {
        let start = pending.start_frame.max(block_start);
        if let Some(voice) = self.allocate_voice() {
            voice.start(
                pending.note,
                pending.velocity,
                start,
                start + pending.length_frames,
            );
        }
    }

    fn allocate_voice(&mut self) -> Option<&mut Voice<F::Voice>> {
        // First pass: find free voice index
        if let Some(idx) = self.voices.iter().position(|v| v.is_free()) {
            return Some(&mut self.voices[idx]);
        }

        // Second pass: steal the oldest voice
        let steal_idx = self
            .voices
            .iter()
            .enumerate()
            .min_by_key(|(_, v)| v.age())
            .map(|(idx, _)| idx);

        steal_idx.map(|idx| &mut self.voices[idx])
    }

    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
