use crate::dsp::oscillator::{OscillatorBlock, OscillatorWaveform};
use crate::graph::node::{GraphNode, RenderCtx};

/// Pitched oscillator node: follows the note frequency from `RenderCtx`.
///
/// Triangle is the default tone: soft odd harmonics, close to a flute, and
/// easy to tell apart across the four button pitches.
pub struct OscNode {
    osc: OscillatorBlock,
}

impl OscNode {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            osc: OscillatorBlock::new(waveform),
        }
    }

    pub fn sine() -> Self {
        Self::new(OscillatorWaveform::Sine)
    }

    pub fn triangle() -> Self {
        Self::new(OscillatorWaveform::Triangle)
    }

    pub fn square() -> Self {
        Self::new(OscillatorWaveform::Square)
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Sawtooth)
    }
}

impl GraphNode for OscNode {
    fn render_block(&mut self, out: &mut [f32], ctx: &RenderCtx) {
        self.osc.render(out, ctx);
    }

    fn note_on(&mut self, _ctx: &RenderCtx) {
        self.osc.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn valid_sine() {
        let sample_rate = 48_000.0;
        let ctx = RenderCtx::from_note(sample_rate, 69, 100.0); // A4 = 440Hz
        let mut node = OscNode::sine();
        node.note_on(&ctx);

        let mut buffer = vec![0.0f32; 128];
        node.render_block(&mut buffer, &ctx);

        let sample_index = 12;
        let expected = (TAU * ctx.frequency * sample_index as f32 / sample_rate).sin();
        let actual = buffer[sample_index];
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }
}
