use crate::graph::node::{GraphNode, RenderCtx};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Free,      // Available for allocation
    Active,    // Note held, waiting for its release frame
    Releasing, // Note ended, envelope tail still sounding
}

/// A single voice playing one tone at a time
pub struct Voice<T: GraphNode> {
    note: u8,
    velocity: u8,
    state: VoiceState,
    age: u64,
    release_at: Option<u64>,
    sample_rate: f32,
    graph: T,
}

impl<T: GraphNode> Voice<T> {
    pub fn new(graph: T, sample_rate: f32) -> Self {
        Self {
            note: 0,
            velocity: 0,
            state: VoiceState::Free,
            age: 0,
            release_at: None,
            sample_rate,
            graph,
        }
    }

    pub fn start(&mut self, note: u8, velocity: u8, age: u64, release_at: u64) {
        self.note = note;
        self.velocity = velocity;
        self.state = VoiceState::Active;
        self.age = age;
        self.release_at = Some(release_at);

        self.graph.note_on(&self.ctx());
    }

    pub fn release(&mut self) {
        if self.state == VoiceState::Active {
            self.state = VoiceState::Releasing;
            self.release_at = None;
            self.graph.note_off(&self.ctx());
        }
    }

    pub fn render(&mut self, out: &mut [f32]) {
        let ctx = self.ctx();
        self.graph.render_block(out, &ctx);

        let gain = ctx.gain();
        for sample in out.iter_mut() {
            *sample *= gain;
        }

        if self.state == VoiceState::Releasing && !self.graph.is_active() {
            self.free();
        }
    }

    fn ctx(&self) -> RenderCtx {
        RenderCtx::from_note(self.sample_rate, self.note, self.velocity as f32)
    }

    pub fn is_free(&self) -> bool {
        self.state == VoiceState::Free
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, VoiceState::Active | VoiceState::Releasing)
    }

    pub fn free(&mut self) {
        self.state = VoiceState::Free;
        self.note = 0;
        self.velocity = 0;
        self.release_at = None;
    }

    pub fn note(&self) -> u8 {
        self.note
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    /// Frame at which an active note should be released
    pub fn release_at(&self) -> Option<u64> {
        self.release_at
    }

    pub fn state(&self) -> VoiceState {
        self.state
    }
}
