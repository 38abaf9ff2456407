//! Plain-text rendering of a puzzle session.

use std::collections::BTreeMap;

use crossplay_core::{Direction, Grid, Tile};
use crossplay_game::{FillValue, Puzzle};

const FILLER_GLYPH: char = '#';

/// Printed clue numbers: every tile starting a word in either direction gets
/// the next number, in reading order.
pub(crate) fn clue_numbers(grid: &Grid) -> BTreeMap<usize, usize> {
    grid.tiles()
        .iter()
        .filter(|tile| {
            Direction::ALL
                .into_iter()
                .any(|direction| tile.is_start_of_word(direction))
        })
        .zip(1..)
        .map(|(tile, number)| (tile.idx(), number))
        .collect()
}

pub(crate) fn header(puzzle: &Puzzle) -> String {
    let info = puzzle.info();
    let author = if info.author.is_empty() {
        String::new()
    } else {
        format!("by {}", info.author)
    };
    [info.title.as_str(), &author, info.copyright.as_str()]
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| format!("{line}\n"))
        .collect()
}

pub(crate) fn grid(puzzle: &Puzzle, show_solution: bool) -> String {
    let grid = puzzle.grid();
    (0..grid.height())
        .map(|y| {
            let row: Vec<String> = grid
                .row(y)
                .map(|tile| {
                    let glyph = match tile {
                        Tile::Filler { .. } => FILLER_GLYPH,
                        Tile::Letter(letter) if show_solution => letter.solution,
                        Tile::Letter(letter) => puzzle
                            .state()
                            .state(letter.idx)
                            .map_or(crossplay_core::BLANK_CHAR, FillValue::to_char),
                    };
                    glyph.to_string()
                })
                .collect();
            row.join(" ") + "\n"
        })
        .collect()
}

pub(crate) fn clues(puzzle: &Puzzle) -> String {
    let grid = puzzle.grid();
    let numbers = clue_numbers(grid);
    let mut out = String::new();
    for direction in Direction::ALL {
        out.push_str(&format!("\n{direction}\n"));
        // Word starts in reading order carry clue indices 0, 1, 2, ...
        for (tile, clue) in grid.word_starts(direction).zip(puzzle.clues().iter(direction)) {
            let number = numbers.get(&tile.idx()).copied().unwrap_or_default();
            out.push_str(&format!("{number:>4}. {}\n", clue.text));
        }
    }
    out
}

pub(crate) fn status(puzzle: &Puzzle) -> String {
    let mut out = format!(
        "\nfull: {}\ncorrect: {}\n",
        puzzle.is_full(),
        puzzle.check_puzzle()
    );
    let errors = puzzle.errors();
    if !errors.is_empty() {
        let width = puzzle.grid().width();
        let cells: Vec<String> = errors
            .iter()
            .map(|idx| format!("({}, {})", idx % width, idx / width))
            .collect();
        out.push_str(&format!("wrong: {}\n", cells.join(" ")));
    }
    out
}
