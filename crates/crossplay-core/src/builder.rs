//! Grid construction and clue numbering.

use crate::{
    ByDirection, Clues, Dimensions, Direction, Grid, LetterTile, NoopReporter, Tile,
    TileClassifier, WordSlot,
    report::{Diagnostic, Reporter},
};

/// Marker for a filler (blocked) cell in solution and state strings.
pub const FILLER_CHAR: char = '.';

/// Marker for an unfilled letter cell in state strings.
pub const BLANK_CHAR: char = '-';

/// Errors that prevent a grid from being built.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BuildError {
    /// Width or height is zero.
    #[display("grid dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// `width * height` does not fit in `usize`.
    #[display("grid dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The solution does not have one cell per grid position.
    #[display("solution has {actual} cells but a {width}x{height} grid needs {expected}")]
    LengthMismatch {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
        /// `width * height`.
        expected: usize,
        /// Cells in the solution.
        actual: usize,
    },
    /// The solution contains the blank marker.
    #[display("solution cell {idx} holds the blank marker {ch:?}")]
    InvalidSolutionChar {
        /// Offending position.
        idx: usize,
        /// Offending character.
        ch: char,
    },
    /// The clue-text list is shorter than the number of words in the grid.
    #[display("grid has {needed} words but only {available} clue texts were supplied")]
    InsufficientClues {
        /// Word starts detected across both directions.
        needed: usize,
        /// Clue texts supplied.
        available: usize,
    },
}

/// Builds a grid and its clue lists, discarding diagnostics.
///
/// See [`GridBuilder::build`].
///
/// # Errors
///
/// Returns a [`BuildError`] if the inputs do not describe a valid grid.
///
/// # Examples
///
/// ```
/// use crossplay_core::Direction;
///
/// //   C A T
/// //   . . O
/// let (grid, clues) = crossplay_core::build("CAT..O", 3, 2, &["Feline", "Preposition"]).unwrap();
/// assert_eq!(clues.list(Direction::Across), ["Feline"]);
/// assert_eq!(clues.list(Direction::Down), ["Preposition"]);
/// assert!(grid[2].is_start_of_word(Direction::Down));
/// ```
pub fn build<S: AsRef<str>>(
    solution: &str,
    width: usize,
    height: usize,
    clue_texts: &[S],
) -> Result<(Grid, Clues), BuildError> {
    GridBuilder::new().build(solution, width, height, clue_texts)
}

/// Turns a flat solution string into a [`Grid`] and [`Clues`].
///
/// Non-fatal findings, such as clue texts left over after every word has
/// been numbered, go to the builder's [`Reporter`].
#[derive(Debug, Default)]
pub struct GridBuilder<R = NoopReporter> {
    reporter: R,
}

impl GridBuilder {
    /// Creates a builder that discards diagnostics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: Reporter> GridBuilder<R> {
    /// Creates a builder that sends diagnostics to `reporter`.
    #[must_use]
    pub fn with_reporter(reporter: R) -> Self {
        Self { reporter }
    }

    /// Builds the grid for a row-major `solution` of `width`×`height` cells.
    ///
    /// [`FILLER_CHAR`] marks filler cells; any other character is a letter.
    /// `clue_texts` lists clues in tile reading order. When a tile starts
    /// both an Across and a Down word, the Across clue comes first.
    ///
    /// # Errors
    ///
    /// - [`BuildError::ZeroDimension`] if `width` or `height` is zero.
    /// - [`BuildError::TooLarge`] if `width * height` overflows.
    /// - [`BuildError::LengthMismatch`] if `solution` does not have `width * height` cells.
    /// - [`BuildError::InvalidSolutionChar`] if `solution` contains [`BLANK_CHAR`].
    /// - [`BuildError::InsufficientClues`] if there are fewer clue texts than words.
    pub fn build<S: AsRef<str>>(
        &mut self,
        solution: &str,
        width: usize,
        height: usize,
        clue_texts: &[S],
    ) -> Result<(Grid, Clues), BuildError> {
        if width == 0 || height == 0 {
            return Err(BuildError::ZeroDimension { width, height });
        }
        let dims =
            Dimensions::new(width, height).ok_or(BuildError::TooLarge { width, height })?;

        let cells: Vec<char> = solution.chars().collect();
        if cells.len() != dims.len() {
            return Err(BuildError::LengthMismatch {
                width,
                height,
                expected: dims.len(),
                actual: cells.len(),
            });
        }
        if let Some(idx) = cells.iter().position(|&ch| ch == BLANK_CHAR) {
            return Err(BuildError::InvalidSolutionChar {
                idx,
                ch: BLANK_CHAR,
            });
        }

        let filler: Vec<bool> = cells.iter().map(|&ch| ch == FILLER_CHAR).collect();
        let classifier =
            TileClassifier::new(&filler, dims).ok_or(BuildError::LengthMismatch {
                width,
                height,
                expected: dims.len(),
                actual: filler.len(),
            })?;

        let needed = (0..dims.len())
            .map(|idx| {
                Direction::ALL
                    .into_iter()
                    .filter(|&direction| classifier.is_start_of_word(idx, direction))
                    .count()
            })
            .sum();
        let available = clue_texts.len();
        if needed > available {
            return Err(BuildError::InsufficientClues { needed, available });
        }

        let mut indexer = ClueIndexer::new(clue_texts);
        let mut tiles: Vec<Tile> = Vec::with_capacity(dims.len());
        for (idx, &solution) in cells.iter().enumerate() {
            if classifier.is_filler(idx) {
                tiles.push(Tile::Filler { idx });
                continue;
            }

            let mut slots = ByDirection::from_fn(|direction| WordSlot {
                is_start_of_word: classifier.is_start_of_word(idx, direction),
                is_end_of_word: classifier.is_end_of_word(idx, direction),
                clue_index: None,
                members: classifier.word_members(idx, direction),
            });

            // Across is numbered first when both words start here.
            for direction in Direction::ALL {
                let slot = &mut slots[direction];
                slot.clue_index = if slot.is_start_of_word {
                    let index = indexer
                        .assign(direction)
                        .ok_or(BuildError::InsufficientClues { needed, available })?;
                    Some(index)
                } else if slot.is_word() {
                    slot.first()
                        .and_then(|start| tiles.get(start))
                        .and_then(|start| start.clue_index(direction))
                } else {
                    None
                };
            }

            tiles.push(Tile::Letter(LetterTile {
                idx,
                solution,
                slots,
            }));
        }

        let used = indexer.used();
        if used < available {
            self.reporter
                .report(Diagnostic::UnusedClueTexts { used, available });
        }

        let clues = Clues::from_lists(indexer.finish());
        let clue_counts = ByDirection::from_fn(|direction| clues.len(direction));
        let grid = Grid::from_parts(dims, tiles, clue_counts);
        for direction in Direction::ALL {
            debug_assert_eq!(grid.word_starts(direction).count(), clues.len(direction));
        }

        Ok((grid, clues))
    }
}

/// Hands out clue texts in reading order and files them per direction.
#[derive(Debug)]
struct ClueIndexer<'a, S> {
    texts: &'a [S],
    next: usize,
    lists: ByDirection<Vec<String>>,
}

impl<'a, S: AsRef<str>> ClueIndexer<'a, S> {
    fn new(texts: &'a [S]) -> Self {
        Self {
            texts,
            next: 0,
            lists: ByDirection::default(),
        }
    }

    /// Takes the next unused text as a new clue in `direction` and returns
    /// its index in that direction's list.
    fn assign(&mut self, direction: Direction) -> Option<usize> {
        let text = self.texts.get(self.next)?;
        self.next += 1;
        let list = &mut self.lists[direction];
        list.push(text.as_ref().to_owned());
        Some(list.len() - 1)
    }

    fn used(&self) -> usize {
        self.next
    }

    fn finish(self) -> ByDirection<Vec<String>> {
        self.lists
    }
}
