/*
 * Swarm Frame Benchmark
 *
 * Benchmarks for the per-frame update cycle: the flocking rule's O(n^2)
 * neighbor scan on its own, and the full frame step including visual sync,
 * swarm rotation, and a no-op render submission.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use std::time::Duration;

use swarm3d::{
    Boid, Camera, Flocking, FrameDriver, MovementRule, RenderTarget, Scene, Settings, WORLD_SIZE,
};

struct NullTarget;

impl RenderTarget for NullTarget {
    fn submit(&mut self, _scene: &Scene, _swarm: &[Boid], _camera: &Camera) {}
}

fn random_swarm(count: usize) -> Vec<Boid> {
    let mut rng = rand::thread_rng();
    let half_world = WORLD_SIZE / 2.0;

    (0..count)
        .map(|_| {
            Boid::new(
                rng.gen_range(-half_world..half_world),
                rng.gen_range(-half_world..half_world),
                rng.gen_range(-half_world..half_world),
            )
        })
        .collect()
}

// Benchmark the flocking rule on its own
fn bench_flocking_rule(c: &mut Criterion) {
    let mut group = c.benchmark_group("flocking_rule");

    for num_boids in [100, 300, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let rule = Flocking::default();
            let swarm = random_swarm(n);

            b.iter(|| {
                for boid in &swarm {
                    black_box(rule.advance(boid, &swarm));
                }
            });
        });
    }

    group.finish();
}

// Benchmark the full frame step
fn bench_frame_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_step");

    for num_boids in [100, 300, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut driver = FrameDriver::new(random_swarm(n), Flocking::default());
            let snapshot = Settings::default().frame_snapshot();
            let camera = Camera::new();
            let mut target = NullTarget;

            b.iter(|| {
                driver.step(&snapshot, &camera, &mut target);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_flocking_rule, bench_frame_step
}

criterion_main!(benches);
