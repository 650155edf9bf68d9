use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use loopmaze::cells::GridCoordinate;
use loopmaze::generators;
use loopmaze::grid::Grid;
use loopmaze::pathing;
use loopmaze::units::{Height, Width};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn large_maze() -> Grid {
    let mut g = Grid::new(Width(150), Height(150)).unwrap();
    generators::generate(&mut g, &mut XorShiftRng::seed_from_u64(150));
    g
}

fn bench_find_path_entrance_to_exit(c: &mut Criterion) {
    c.bench_function("find_path_entrance_to_exit", |b| {
        let g = large_maze();
        b.iter(|| pathing::find_path(&g, g.entrance(), g.exit()))
    });
}

fn bench_find_path_from_centre(c: &mut Criterion) {
    c.bench_function("find_path_from_centre", |b| {
        let g = large_maze();
        let start_coord = GridCoordinate::new(75, 75);
        b.iter(|| pathing::find_path(&g, start_coord, GridCoordinate::new(0, 0)))
    });
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = large_maze();
        b.iter(|| pathing::Distances::new(&g, g.entrance()))
    });
}

criterion_group!(benches,
    bench_find_path_entrance_to_exit,
    bench_find_path_from_centre,
    bench_distances
);
criterion_main!(benches);
