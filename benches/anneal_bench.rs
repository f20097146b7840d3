//! Criterion benchmarks for the annealing demo.
//!
//! Measures closed-tour energy evaluation across instance sizes and
//! full fixed-step annealing runs on seeded random instances.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tsp_anneal::anneal::{AnnealConfig, AnnealRunner};
use tsp_anneal::tsp::{Instance, SwapTsp, Tour};

fn bench_tour_energy(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_energy");

    for &n in &[15usize, 100, 1000] {
        let mut rng = StdRng::seed_from_u64(42);
        let instance = Instance::random(n, &mut rng);
        let tour = Tour::identity(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(&tour).energy(black_box(&instance)))
        });
    }
    group.finish();
}

fn bench_anneal_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_run");
    group.sample_size(10);

    for &(n, steps) in &[(15usize, 2000usize), (50, 5000)] {
        let mut rng = StdRng::seed_from_u64(42);
        let instance = Instance::random(n, &mut rng);
        let config = AnnealConfig::default().with_steps(steps).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new("swap", format!("n{n}_k{steps}")),
            &config,
            |b, config| {
                b.iter(|| {
                    let problem = SwapTsp::new(&instance);
                    black_box(AnnealRunner::run(&problem, config))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_tour_energy, bench_anneal_run);
criterion_main!(benches);
