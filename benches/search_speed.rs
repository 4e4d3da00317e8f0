use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tictac::{
    board::Board,
    find_best_move,
    search::{Searcher, ALPHA_INIT, BETA_INIT},
};

fn criterion_benchmark(c: &mut Criterion) {
    let empty = Board::new();
    let midgame: Board = "x__/_o_/__x".parse().unwrap();
    let mut group = c.benchmark_group("ttt-search");
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("best-move-empty", |b| {
        b.iter(|| find_best_move(black_box(&empty)))
    });
    group.bench_function("best-move-midgame", |b| {
        b.iter(|| find_best_move(black_box(&midgame)))
    });
    group.sample_size(10);
    group.bench_function("alphabeta-empty", |b| {
        b.iter(|| Searcher::new().search(black_box(&empty), true, ALPHA_INIT, BETA_INIT))
    });
    group.bench_function("minimax-empty", |b| {
        b.iter(|| Searcher::new().minimax(black_box(&empty), true))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
