use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Monotonic audio clock counted in rendered frames.
///
/// The synth advances it after every block; the tone emitter reads it on the
/// game thread to stamp triggers in the same time base.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frames: Arc<AtomicU64>,
    sample_rate: f32,
}

impl FrameClock {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            frames: Arc::new(AtomicU64::new(0)),
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn seconds(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    pub fn advance(&self, frames: usize) {
        self.frames.fetch_add(frames as u64, Ordering::Relaxed);
    }

    /// Frame index for a time on this clock, rounded to the nearest frame.
    pub fn frame_at(&self, seconds: f64) -> u64 {
        (seconds * self.sample_rate as f64).round().max(0.0) as u64
    }
}
