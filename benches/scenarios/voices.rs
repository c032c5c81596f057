//! Benchmarks for the button tone voice.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use simon_says::graph::node::{GraphNode, RenderCtx};
use simon_says::voices;

use crate::BLOCK_SIZES;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    // G4, the blue button
    let ctx = RenderCtx::from_note(48_000.0, 67, 100.0);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Held tone: triangle through the sustain stage
        let mut held = voices::tone();
        held.note_on(&ctx);
        group.bench_with_input(BenchmarkId::new("tone_held", size), &size, |b, _| {
            b.iter(|| {
                held.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });

        // Releasing tone: the 1s tail after an eighth note
        let mut tail = voices::tone();
        tail.note_on(&ctx);
        tail.note_off(&ctx);
        group.bench_with_input(BenchmarkId::new("tone_release", size), &size, |b, _| {
            b.iter(|| {
                tail.render_block(black_box(&mut buffer), black_box(&ctx));
            })
        });
    }

    group.finish();
}
