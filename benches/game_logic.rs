use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_match3::core::{
    apply_gravity, find_all_matches, find_valid_swap, BoardConfig, CascadeEngine, Match3Game,
    SimpleRng, TileGrid,
};
use tui_match3::types::Coordinate;

fn settled_grid(width: u16, height: u16, seed: u32) -> TileGrid {
    let config = BoardConfig::new(width, height, 5, 100).unwrap();
    let mut rng = SimpleRng::new(seed);
    let mut grid = TileGrid::random(width, height, config.kinds(), &mut rng);
    CascadeEngine::new(&config).settle(&mut grid, &mut rng).unwrap();
    grid
}

fn bench_find_all_matches(c: &mut Criterion) {
    let grid = settled_grid(16, 16, 12345);

    c.bench_function("find_all_matches_16x16", |b| {
        b.iter(|| find_all_matches(black_box(&grid)))
    });
}

fn bench_gravity(c: &mut Criterion) {
    let template = settled_grid(16, 16, 12345);

    c.bench_function("gravity_half_empty_16x16", |b| {
        b.iter(|| {
            let mut grid = template.clone();
            // Hollow out every other row.
            for row in (0..16).step_by(2) {
                for column in 0..16 {
                    grid.clear(Coordinate::new(column, row)).unwrap();
                }
            }
            apply_gravity(&mut grid).unwrap()
        })
    });
}

fn bench_seeded_cascade(c: &mut Criterion) {
    let config = BoardConfig::new(8, 8, 5, 100).unwrap();
    let template = TileGrid::random(8, 8, config.kinds(), &mut SimpleRng::new(7));

    c.bench_function("cascade_from_random_8x8", |b| {
        b.iter(|| {
            let mut grid = template.clone();
            let mut rng = SimpleRng::new(99);
            let mut engine = CascadeEngine::new(&config);
            engine.run(&mut grid, &mut rng).unwrap()
        })
    });
}

fn bench_hint(c: &mut Criterion) {
    let grid = settled_grid(8, 8, 4242);

    c.bench_function("find_valid_swap_8x8", |b| {
        b.iter(|| find_valid_swap(black_box(&grid)))
    });
}

fn bench_new_game(c: &mut Criterion) {
    let config = BoardConfig::default();
    let mut seed = 0u32;

    c.bench_function("new_game_5x5", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            Match3Game::new(config, seed).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_find_all_matches,
    bench_gravity,
    bench_seeded_cascade,
    bench_hint,
    bench_new_game
);
criterion_main!(benches);
