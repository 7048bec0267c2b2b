use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgarden::catalog::Catalog;
use hexgarden::core::EngineConfig;
use hexgarden::layout::LayoutGenerator;
use hexgarden::rules::find_move;
use hexgarden::BoardStore;

fn dealt_board(seed: u64) -> BoardStore {
    let catalog = Arc::new(Catalog::standard());
    let mut generator = LayoutGenerator::from_config(Arc::clone(&catalog), &EngineConfig::seeded(seed)).unwrap();
    generator.reset();

    let mut placements = Vec::new();
    while let Some(p) = generator.next_placement() {
        placements.push(p);
    }
    let mut board = BoardStore::new(catalog);
    board.place_all(&placements);
    board
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("enablement");

    group.bench_function("deal_full_board", |b| {
        b.iter(|| dealt_board(black_box(7)));
    });

    let board = dealt_board(7);
    let ids: Vec<_> = board.iter().filter(|p| p.enabled).map(|p| p.id).take(2).collect();

    group.bench_function("remove_and_restore", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            let removed = scratch.remove(black_box(&ids));
            scratch.re_add(&removed);
            scratch
        });
    });

    group.bench_function("find_move", |b| {
        let snapshot = board.snapshot();
        b.iter(|| find_move(black_box(&snapshot), board.catalog()));
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
