use crate::graph::node::RenderCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OscillatorWaveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

/// Phase-accumulating oscillator. Phase lives in [0, 1).
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
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

    pub fn waveform(&self) -> OscillatorWaveform {
        self.waveform
    }

    /// Restart the cycle so every note begins at a zero crossing.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    fn sample_at(&self, phase: f32) -> f32 {
        match self.waveform {
            OscillatorWaveform::Sine => (std::f32::consts::TAU * phase).sin(),
            // 0 -> 1 -> 0 -> -1 -> 0 over one cycle
            OscillatorWaveform::Triangle => {
                if phase < 0.25 {
                    4.0 * phase
                } else if phase < 0.75 {
                    2.0 - 4.0 * phase
                } else {
                    4.0 * phase - 4.0
                }
            }
            OscillatorWaveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            OscillatorWaveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }

    pub fn render(&mut self, destination: &mut [f32], ctx: &RenderCtx) {
        let increment = ctx.frequency / ctx.sample_rate;
        for sample in destination.iter_mut() {
            *sample = self.sample_at(self.phase);
            self.phase += increment;
            if self.phase >= 1.0 {
                self.phase -= self.phase.floor();
            }
        }
    }
}
