use crate::{graph::node::RenderCtx, MIN_TIME};

/*
Linear ADSR Envelope
====================

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release

Gate high (note_on) restarts Attack from zero so repeated button presses
sound distinct. Gate low (note_off) starts Release from whatever level the
envelope is at, which avoids clicks when a short tone is cut during Attack.

Per-sample step for a stage:

    increment = change / (stage_seconds * sample_rate)

Release snapshots its start level and length at note_off and interpolates
down to exactly 0.0, after which the envelope goes Idle and the voice that
owns it can be reused.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,
    Attack,
    Decay,
    Sustain,
    Release,
}

pub struct Envelope {
    attack_time: f32,
    decay_time: f32,
    sustain_level: f32,
    release_time: f32,

    stage: EnvelopeState,
    level: f32,

    release_start_level: f32,
    release_total_samples: u32,
    release_elapsed_samples: u32,
}

impl Envelope {
    pub fn adsr(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack_time: attack.max(MIN_TIME),
            decay_time: decay.max(MIN_TIME),
            sustain_level: sustain.clamp(0.0, 1.0),
            release_time: release.max(MIN_TIME),

            stage: EnvelopeState::Idle,
            level: 0.0,
            release_start_level: 0.0,
            release_total_samples: 1,
            release_elapsed_samples: 0,
        }
    }

    pub fn note_on(&mut self, _ctx: &RenderCtx) {
        self.level = 0.0;
        self.stage = EnvelopeState::Attack;
        self.release_elapsed_samples = 0;
    }

    pub fn note_off(&mut self, ctx: &RenderCtx) {
        if matches!(self.stage, EnvelopeState::Idle | EnvelopeState::Release) {
            return;
        }

        self.release_start_level = self.level;
        self.release_total_samples = (self.release_time * ctx.sample_rate).round().max(1.0) as u32;
        self.release_elapsed_samples = 0;
        self.stage = EnvelopeState::Release;
    }

    /// Advance the envelope by one sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) -> f32 {
        match self.stage {
            EnvelopeState::Idle => {
                self.level = 0.0;
            }

            EnvelopeState::Attack => {
                self.level += 1.0 / (self.attack_time * ctx.sample_rate);
                if self.level >= 1.0 {
                    self.level = 1.0;
                    self.stage = EnvelopeState::Decay;
                }
            }

            EnvelopeState::Decay => {
                let target = self.sustain_level;
                self.level -= (1.0 - target) / (self.decay_time * ctx.sample_rate);
                if self.level <= target {
                    self.level = target;
                    self.stage = EnvelopeState::Sustain;
                }
            }

            EnvelopeState::Sustain => {
                self.level = self.sustain_level;
            }

            EnvelopeState::Release => {
                let progress =
                    self.release_elapsed_samples as f32 / self.release_total_samples as f32;
                self.level = (self.release_start_level * (1.0 - progress)).max(0.0);

                self.release_elapsed_samples = self.release_elapsed_samples.saturating_add(1);
                if self.release_elapsed_samples >= self.release_total_samples {
                    self.level = 0.0;
                    self.stage = EnvelopeState::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
        self.level
    }

    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(ctx);
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeState::Idle)
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn render_samples(env: &mut Envelope, samples: usize) {
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0, 1.0);
        for _ in 0..samples {
            env.next_sample(&ctx);
        }
    }

    #[test]
    fn attack_reaches_full_level() {
        let mut env = Envelope::adsr(0.01, 0.1, 0.7, 0.2);
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 220.0, 1.0);

        env.note_on(&ctx);
        render_samples(&mut env, 11);

        assert!(env.level() > 0.99, "expected attack to reach full level");
        assert_eq!(env.state(), EnvelopeState::Decay);
    }

    #[test]
    fn sustain_holds_target_level() {
        let mut env = Envelope::adsr(0.005, 0.1, 0.3, 1.0);
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0, 1.0);

        env.note_on(&ctx);
        render_samples(&mut env, 120);

        assert_eq!(env.state(), EnvelopeState::Sustain);
        assert!((env.level() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn release_falls_back_to_idle() {
        let release = 0.03;
        let mut env = Envelope::adsr(0.01, 0.05, 0.5, release);
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0, 1.0);

        env.note_on(&ctx);
        render_samples(&mut env, 20);

        env.note_off(&ctx);
        render_samples(&mut env, (release * SAMPLE_RATE) as usize + 2);

        assert_eq!(env.level(), 0.0);
        assert_eq!(env.state(), EnvelopeState::Idle);
        assert!(!env.is_active());
    }

    #[test]
    fn note_off_while_idle_stays_idle() {
        let mut env = Envelope::adsr(0.01, 0.05, 0.5, 0.1);
        let ctx = RenderCtx::from_freq(SAMPLE_RATE, 440.0, 1.0);
        env.note_off(&ctx);
        assert_eq!(env.state(), EnvelopeState::Idle);
    }
}
