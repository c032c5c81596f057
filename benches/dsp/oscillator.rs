//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use simon_says::dsp::oscillator::OscillatorBlock;
use simon_says::graph::node::RenderCtx;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    // Middle C, the red button
    let ctx = RenderCtx::from_note(48_000.0, 60, 100.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let waveforms = [
            ("sine", OscillatorBlock::sine()),
            ("triangle", OscillatorBlock::triangle()),
            ("square", OscillatorBlock::square()),
            ("sawtooth", OscillatorBlock::sawtooth()),
        ];
        for (name, mut osc) in waveforms {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    osc.render(black_box(&mut buffer), black_box(&ctx));
                })
            });
        }
    }

    group.finish();
}
