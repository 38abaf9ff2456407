//! Benchmarks for grid construction and word navigation.
//!
//! # Benchmarks
//!
//! - **`build_grid`**: Builds a 15×15 grid with a fixed filler pattern,
//!   including classification and clue numbering.
//! - **`walk_across`**: Follows `next_tile` in the Across direction from the
//!   first clue until every tile of every Across word has been visited once.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench build
//! ```

use std::{hint, time::Duration};

use criterion::{BatchSize, Criterion, PlottingBackend, criterion_group, criterion_main};
use crossplay_core::{Direction, GridBuilder};

const SIZE: usize = 15;

fn solution() -> String {
    (0..SIZE * SIZE)
        .map(|idx| {
            let (x, y) = (idx % SIZE, idx / SIZE);
            if (x % 5 == 4 && y % 3 != 1) || (y % 5 == 4 && x % 3 == 0) {
                '.'
            } else {
                'A'
            }
        })
        .collect()
}

fn clue_texts() -> Vec<String> {
    (0..SIZE * SIZE * 2).map(|i| format!("clue {i}")).collect()
}

fn bench_build_grid(c: &mut Criterion) {
    let solution = solution();
    let clues = clue_texts();
    c.bench_function("build_grid", |b| {
        b.iter_batched(
            || hint::black_box(solution.as_str()),
            |solution| GridBuilder::new().build(solution, SIZE, SIZE, &clues),
            BatchSize::SmallInput,
        );
    });
}

fn bench_walk_across(c: &mut Criterion) {
    let (grid, _) = GridBuilder::new()
        .build(&solution(), SIZE, SIZE, &clue_texts())
        .unwrap();
    let start = grid.start_of_first_clue(Direction::Across).unwrap();
    let steps: usize = grid
        .word_starts(Direction::Across)
        .filter_map(|tile| tile.slot(Direction::Across))
        .map(|slot| slot.members.len())
        .sum();

    c.bench_function("walk_across", |b| {
        b.iter(|| {
            let mut tile = start;
            for _ in 0..steps {
                tile = grid.next_tile(tile, Direction::Across).unwrap();
            }
            hint::black_box(tile.idx())
        });
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets =
        bench_build_grid,
        bench_walk_across
);
criterion_main!(benches);
