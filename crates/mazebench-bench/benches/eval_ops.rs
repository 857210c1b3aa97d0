//! Criterion benchmarks for per-step evaluation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mazebench_bench::{ball_positions, reference_maze, solved_path};
use mazebench_core::Vec3;
use mazebench_eval::{
    HoldState, ProgressConfig, ProgressTracker, SuccessCriteria, SuccessDetector,
};
use mazebench_test_utils::MockScene;

/// Benchmark: 1K progress queries against the reference maze path.
fn bench_progress_1k(c: &mut Criterion) {
    let (mapper, path) = solved_path(&reference_maze(42));
    let tracker = ProgressTracker::new(path, ProgressConfig::default()).unwrap();
    let balls = ball_positions(&mapper, 1_000, 7);

    c.bench_function("progress_reference_1k", |b| {
        b.iter(|| {
            for &ball in &balls {
                black_box(tracker.progress(ball));
            }
        });
    });
}

/// Benchmark: One debounced success evaluation on a passing stack.
fn bench_success_step(c: &mut Criterion) {
    let detector = SuccessDetector::new(SuccessCriteria::default()).unwrap();
    let mut scene = MockScene::new();
    scene.set_body("brick_cube_3_main", Vec3::new(0.0, 0.0, 0.85));
    scene.set_body("brick_cube_2_main", Vec3::new(0.0, 0.0, 0.9));
    scene.set_body("brick_cube_1_main", Vec3::new(0.0, 0.0, 0.95));
    scene.add_contact("brick_cube_1_col", "brick_cube_2_col");
    scene.add_contact("brick_cube_2_col", "brick_cube_3_col");

    c.bench_function("success_step_three_bricks", |b| {
        let mut hold = HoldState::new();
        b.iter(|| black_box(detector.evaluate(&scene, &mut hold).unwrap()));
    });
}

criterion_group!(benches, bench_progress_1k, bench_success_step);
criterion_main!(benches);
