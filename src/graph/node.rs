use crate::sequencing::midi_note_to_freq;

/// Context passed to graph nodes during rendering
///
/// - sample_rate: Audio sample rate (e.g., 48000.0)
/// - frequency: Pitch to render (Hz)
/// - velocity: Intensity/loudness (0.0-127.0, MIDI-style)
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx {
    pub sample_rate: f32,
    pub frequency: f32,
    pub velocity: f32,
}

impl RenderCtx {
    /// Create context from a MIDI note (button pitches)
    pub fn from_note(sample_rate: f32, note: u8, velocity: f32) -> Self {
        Self {
            sample_rate,
            frequency: midi_note_to_freq(note),
            velocity,
        }
    }

    /// Create context from a direct frequency
    pub fn from_freq(sample_rate: f32, frequency: f32, velocity: f32) -> Self {
        Self {
            sample_rate,
            frequency,
            velocity,
        }
    }

    /// Velocity mapped to a linear gain in [0, 1].
    pub fn gain(&self) -> f32 {
        (self.velocity / 127.0).clamp(0.0, 1.0)
    }
}

/// Core trait for audio processing graph nodes
///
/// Nodes render audio and respond to note events
pub trait GraphNode: Send {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx);

    /// Triggered when a note starts
    fn note_on(&mut self, _ctx: &RenderCtx) {}

    /// Triggered when a note is released
    fn note_off(&mut self, _ctx: &RenderCtx) {}

    /// Check if this node is still producing sound
    ///
    /// Used by the voice pool to know when a voice can be reused.
    fn is_active(&self) -> bool {
        true
    }
}

/// Allow boxed graph nodes to be used as graph nodes (for dynamic dispatch)
impl GraphNode for Box<dyn GraphNode> {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        (**self).render_block(out, ctx)
    }

    fn note_on(&mut self, ctx: &RenderCtx) {
        (**self).note_on(ctx)
    }

    fn note_off(&mut self, ctx: &RenderCtx) {
        (**self).note_off(ctx)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}
