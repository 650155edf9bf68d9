use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use loopmaze::{
    generators,
    grid::Grid,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn fresh_grid(size: usize) -> Grid {
    Grid::new(Width(size), Height(size)).unwrap()
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter_batched(|| fresh_grid(32),
                       |mut g| generators::recursive_backtracker(&mut g, &mut rng),
                       BatchSize::SmallInput)
    });
}

fn bench_generate_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("generate_maze_32", move |b| {
        b.iter_batched(|| fresh_grid(32),
                       |mut g| generators::generate(&mut g, &mut rng),
                       BatchSize::SmallInput)
    });
}

fn bench_generate_maze_200(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(200);
    c.bench_function("generate_maze_200", move |b| {
        b.iter_batched(|| fresh_grid(200),
                       |mut g| generators::generate(&mut g, &mut rng),
                       BatchSize::LargeInput)
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_generate_maze_32,
    bench_generate_maze_200
);
criterion_main!(benches);
