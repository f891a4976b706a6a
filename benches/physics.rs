//! Benchmarks for sprung simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use sprung::*;

fn bench_spring_force(c: &mut Criterion) {
    c.bench_function("spring_force_1000_evals", |b| {
        b.iter(|| {
            let mut acc = Vec3::<f32>::zero();
            let anchor = Vec3::zero();
            for i in 0..1000 {
                let p = Vec3::new(0.0, 0.0, 0.5 + i as f32 * 1e-4);
                acc += spring_force(p, anchor, 0.4, 5.0);
            }
            acc
        });
    });
}

fn bench_cube_drop(c: &mut Criterion) {
    c.bench_function("cube_drop_600_steps", |b| {
        b.iter(|| {
            let mut body: MassSpringSystem<f32> = cube(&CubeConfig::default()).unwrap();
            let config = StepConfig::new();
            for _ in 0..600 {
                body.step(0.01, &config, &mut NoOpStepObserver);
            }
            body.positions()
        });
    });
}

fn bench_long_chain(c: &mut Criterion) {
    c.bench_function("chain_50_links_60_steps", |b| {
        b.iter(|| {
            let mut sys: MassSpringSystem<f32> = chain(
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 10.0, 1.0),
                50,
                &ChainConfig { rest_length: None, ..ChainConfig::default() },
            )
            .unwrap();
            let config = Tuning::new().step_config().unwrap();
            for _ in 0..60 {
                sys.step(0.01, &config, &mut NoOpStepObserver);
            }
            sys.positions()
        });
    });
}

criterion_group!(benches, bench_spring_force, bench_cube_drop, bench_long_chain);
criterion_main!(benches);
