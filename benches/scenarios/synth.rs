//! Benchmarks for the voice pool.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use simon_says::game::Color;
use simon_says::synth::{FrameClock, PolySynth, SynthMessage};
use simon_says::voices;

use crate::BLOCK_SIZES;

pub fn bench_synth(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/synth");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Idle pool: what the callback costs between tones
        let mut idle = PolySynth::new(
            voices::tone,
            4,
            VecDeque::new(),
            FrameClock::new(48_000.0),
            0.3,
        );
        group.bench_with_input(BenchmarkId::new("idle", size), &size, |b, _| {
            b.iter(|| {
                idle.render_block(black_box(&mut buffer));
            })
        });

        // Every voice busy: all four button tones ringing at once
        let triggers: VecDeque<SynthMessage> = Color::ALL
            .iter()
            .map(|color| SynthMessage::Trigger {
                note: color.pitch(),
                velocity: 100,
                start_frame: 0,
                length_frames: u64::MAX / 2,
            })
            .collect();
        let mut busy = PolySynth::new(voices::tone, 4, triggers, FrameClock::new(48_000.0), 0.3);
        group.bench_with_input(BenchmarkId::new("four_tones", size), &size, |b, _| {
            b.iter(|| {
                busy.render_block(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
