use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crossed_lines::core::{points_cross, ScatterParams};
use crossed_lines::{AppController, AppState, FrameInput, LinesOptions, SegmentNetwork};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn build_seeded_network(count: usize) -> SegmentNetwork {
    let mut rng = StdRng::seed_from_u64(17);
    let mut network = SegmentNetwork::new();
    network.populate_random(&mut rng, count, Vec2::ZERO, &ScatterParams::default());
    network
}

fn build_query_segments(count: usize) -> Vec<(Vec2, Vec2)> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 600) as f32 - 300.0;
            let y = ((i * 91) % 600) as f32 - 300.0;
            let start = Vec2::new(x, y);
            (start, start + Vec2::new(20.0, (i % 7) as f32 * 3.0 - 9.0))
        })
        .collect()
}

fn bench_crossing_predicate(c: &mut Criterion) {
    let queries = build_query_segments(1024);

    c.bench_function("points_cross_1024_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for pair in queries.windows(2) {
                let (a0, a1) = pair[0];
                let (b0, b1) = pair[1];
                if points_cross(black_box(a0), black_box(a1), black_box(b0), black_box(b1)) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_admission(c: &mut Criterion) {
    let mut group = c.benchmark_group("admission");

    for &count in &[200usize, 2_000usize] {
        let network = build_seeded_network(count);
        let queries = build_query_segments(256);

        group.bench_with_input(
            BenchmarkId::new("count_crossings_batch", count),
            &network,
            |b, network| {
                b.iter(|| {
                    let mut total = 0usize;
                    for &(start, end) in &queries {
                        total += network.count_crossings(black_box(start), black_box(end));
                    }
                    black_box(total)
                })
            },
        );
    }

    group.finish();
}

fn bench_populate(c: &mut Criterion) {
    c.bench_function("populate_random_200", |b| {
        b.iter(|| black_box(build_seeded_network(200).len()))
    });
}

fn bench_frame_tick(c: &mut Criterion) {
    let mut state = AppState::with_options(LinesOptions {
        rng_seed: Some(3),
        ..LinesOptions::default()
    });
    state.view.viewport.size_px = [1280.0, 720.0];
    crossed_lines::app::use_cases::network::seed_network(&mut state, Vec2::ZERO, 200);
    let mut controller = AppController::new();
    let input = FrameInput::at(Vec2::new(12.0, -7.0));

    c.bench_function("controller_tick_idle", |b| {
        b.iter(|| {
            let scene = controller
                .tick(&mut state, black_box(&input))
                .expect("Frame");
            black_box(scene.len())
        })
    });
}

criterion_group!(
    benches,
    bench_crossing_predicate,
    bench_admission,
    bench_populate,
    bench_frame_tick
);
criterion_main!(benches);
