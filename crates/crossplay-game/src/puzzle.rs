use std::collections::BTreeSet;

use crossplay_core::{
    ClueRef, Clues, Direction, Grid, GridBuilder, LogReporter, NavigationError, Reporter, Tile,
};

use crate::{FillValue, PuzzleError, PuzzleInfo, PuzzleRecord, StateTracker};

/// A crossword play session.
///
/// Owns the immutable grid and clues built from a [`PuzzleRecord`] together
/// with the mutable fill state. Grid and clues never change; the fill state
/// changes only through `&mut self`.
///
/// # Example
///
/// ```
/// use crossplay_core::Direction;
/// use crossplay_game::{FillValue, Puzzle, PuzzleRecord};
///
/// let record = PuzzleRecord {
///     solution: "CAT".into(),
///     width: 3,
///     height: 1,
///     clues: vec!["Feline".into()],
///     ..PuzzleRecord::default()
/// };
/// let mut puzzle = Puzzle::from_record(&record).unwrap();
///
/// let clue = puzzle.clue_for_tile(&puzzle.grid()[1], Direction::Across).unwrap();
/// assert_eq!(clue.text, "Feline");
///
/// for (idx, ch) in "CAT".chars().enumerate() {
///     puzzle.set_state_value(idx, FillValue::Letter(ch));
/// }
/// assert!(puzzle.check_puzzle());
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    info: PuzzleInfo,
    grid: Grid,
    clues: Clues,
    state: StateTracker,
}

impl Puzzle {
    /// Builds a session from a record, logging build diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Build`] if the grid cannot be built and
    /// [`PuzzleError::State`] if the record's state does not fit the solution.
    pub fn from_record(record: &PuzzleRecord) -> Result<Self, PuzzleError> {
        Self::from_record_with_reporter(record, LogReporter)
    }

    /// Builds a session from a record, sending build diagnostics to `reporter`.
    ///
    /// An empty `record.state` starts every letter cell blank.
    ///
    /// # Errors
    ///
    /// Same as [`Puzzle::from_record`].
    pub fn from_record_with_reporter<R: Reporter>(
        record: &PuzzleRecord,
        reporter: R,
    ) -> Result<Self, PuzzleError> {
        let (grid, clues) = GridBuilder::with_reporter(reporter).build(
            &record.solution,
            record.width,
            record.height,
            &record.clues,
        )?;
        let state = if record.state.is_empty() {
            StateTracker::blank(&record.solution)?
        } else {
            StateTracker::new(&record.solution, &record.state)?
        };

        log::debug!(
            "built {}x{} puzzle {:?}: {} across, {} down",
            grid.width(),
            grid.height(),
            record.title,
            clues.len(Direction::Across),
            clues.len(Direction::Down),
        );

        Ok(Self {
            info: record.info(),
            grid,
            clues,
            state,
        })
    }

    /// Returns title, author, and copyright.
    #[must_use]
    pub fn info(&self) -> &PuzzleInfo {
        &self.info
    }

    /// Returns the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the clue lists.
    #[must_use]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Returns the fill state.
    #[must_use]
    pub fn state(&self) -> &StateTracker {
        &self.state
    }

    /// Returns the fill state for mutation.
    pub fn state_mut(&mut self) -> &mut StateTracker {
        &mut self.state
    }

    /// Returns the clue of the word through `tile` in `direction`.
    #[must_use]
    pub fn clue_for_tile(&self, tile: &Tile, direction: Direction) -> Option<ClueRef<'_>> {
        self.clues.for_tile(tile, direction)
    }

    /// Returns the tile starting clue `clue_index` of `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::ClueNotFound`] if no tile starts that clue.
    pub fn starting_tile_for_clue(
        &self,
        direction: Direction,
        clue_index: usize,
    ) -> Result<&Tile, NavigationError> {
        self.grid.starting_tile_for_clue(direction, clue_index)
    }

    /// Writes `value` into the fill state; see [`StateTracker::set_state_value`].
    pub fn set_state_value(&mut self, idx: usize, value: FillValue) -> bool {
        let applied = self.state.set_state_value(idx, value);
        if !applied {
            log::trace!("ignored write of {value:?} at {idx}");
        }
        applied
    }

    /// Resets every letter cell to blank.
    pub fn clear_puzzle(&mut self) {
        self.state.clear_puzzle();
        log::debug!("cleared puzzle {:?}", self.info.title);
    }

    /// Returns `true` if no letter cell is blank.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.state.is_full()
    }

    /// Returns `true` if the fill state equals the solution.
    #[must_use]
    pub fn check_puzzle(&self) -> bool {
        self.state.check_puzzle()
    }

    /// Returns the cells holding a wrong letter.
    #[must_use]
    pub fn errors(&self) -> BTreeSet<usize> {
        self.state.errors()
    }

    /// Returns the record for this session with the current fill state.
    #[must_use]
    pub fn to_record(&self) -> PuzzleRecord {
        let solution = self
            .grid
            .tiles()
            .iter()
            .map(|tile| match tile {
                Tile::Filler { .. } => crossplay_core::FILLER_CHAR,
                Tile::Letter(letter) => letter.solution,
            })
            .collect();
        // Reading order with Across first reproduces the interleaved clue list.
        let clues = self
            .grid
            .tiles()
            .iter()
            .flat_map(|tile| {
                Direction::ALL
                    .into_iter()
                    .filter(move |&direction| tile.is_start_of_word(direction))
                    .filter_map(move |direction| self.clue_for_tile(tile, direction))
            })
            .map(|clue| clue.text.to_owned())
            .collect();
        PuzzleRecord {
            solution,
            state: self.state.to_state_string(),
            title: self.info.title.clone(),
            author: self.info.author.clone(),
            copyright: self.info.copyright.clone(),
            width: self.grid.width(),
            height: self.grid.height(),
            clues,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossplay_core::{BuildError, CollectingReporter, Diagnostic};

    use super::*;
    use crate::StateError;

    // C A T
    // O . O
    // W . E
    fn record() -> PuzzleRecord {
        PuzzleRecord {
            solution: "CATO.OW.E".into(),
            state: "C--O.--.-".into(),
            title: "Sample".into(),
            author: "Someone".into(),
            copyright: "(c)".into(),
            width: 3,
            height: 3,
            clues: vec!["Feline".into(), "Farm animal".into(), "Foot digit".into()],
        }
    }

    fn fill_solution(puzzle: &mut Puzzle) {
        for idx in 0..puzzle.grid().len() {
            if let Some(letter) = puzzle.grid()[idx].as_letter() {
                let value = FillValue::Letter(letter.solution);
                puzzle.set_state_value(idx, value);
            }
        }
    }

    #[test]
    fn test_from_record() {
        let puzzle = Puzzle::from_record(&record()).unwrap();
        assert_eq!(puzzle.info().title, "Sample");
        assert_eq!(puzzle.info().author, "Someone");
        assert_eq!(puzzle.info().copyright, "(c)");
        assert_eq!(puzzle.grid().len(), 9);
        assert_eq!(puzzle.state().to_state_string(), "C--O.--.-");
        assert!(!puzzle.is_full());
    }

    #[test]
    fn test_clue_queries() {
        let puzzle = Puzzle::from_record(&record()).unwrap();
        let tile = &puzzle.grid()[5];
        assert_eq!(
            puzzle.clue_for_tile(tile, Direction::Down).map(|c| c.text),
            Some("Foot digit")
        );
        assert!(puzzle.clue_for_tile(tile, Direction::Across).is_none());
        assert!(puzzle.clue_for_tile(&puzzle.grid()[4], Direction::Down).is_none());
        assert_eq!(
            puzzle
                .starting_tile_for_clue(Direction::Down, 1)
                .map(Tile::idx),
            Ok(2)
        );
    }

    #[test]
    fn test_clear_then_solve() {
        let mut puzzle = Puzzle::from_record(&record()).unwrap();
        puzzle.clear_puzzle();
        assert!(!puzzle.is_full());
        assert_eq!(puzzle.state().to_state_string(), "----.--.-");

        fill_solution(&mut puzzle);
        assert!(puzzle.is_full());
        assert!(puzzle.check_puzzle());
        assert!(puzzle.errors().is_empty());
    }

    #[test]
    fn test_errors_after_wrong_entry() {
        let mut puzzle = Puzzle::from_record(&record()).unwrap();
        assert!(puzzle.set_state_value(1, FillValue::Letter('X')));
        assert!(!puzzle.set_state_value(4, FillValue::Letter('X')));
        assert!(!puzzle.set_state_value(99, FillValue::Letter('X')));
        assert_eq!(puzzle.errors().into_iter().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn test_empty_state_starts_blank() {
        let record = PuzzleRecord {
            state: String::new(),
            ..record()
        };
        let puzzle = Puzzle::from_record(&record).unwrap();
        assert_eq!(puzzle.state().to_state_string(), "----.--.-");
    }

    #[test]
    fn test_build_errors_surface() {
        let short = PuzzleRecord {
            clues: vec!["Feline".into()],
            ..record()
        };
        assert_eq!(
            Puzzle::from_record(&short).unwrap_err(),
            PuzzleError::Build(BuildError::InsufficientClues {
                needed: 3,
                available: 1
            })
        );

        let mismatched = PuzzleRecord {
            state: "---------".into(),
            ..record()
        };
        assert_eq!(
            Puzzle::from_record(&mismatched).unwrap_err(),
            PuzzleError::State(StateError::FillerMismatch { idx: 4 })
        );
    }

    #[test]
    fn test_oversized_record_is_rejected() {
        let oversized = PuzzleRecord {
            solution: String::new(),
            state: String::new(),
            width: usize::MAX / 2 + 1,
            height: 2,
            ..record()
        };
        assert_eq!(
            Puzzle::from_record(&oversized).unwrap_err(),
            PuzzleError::Build(BuildError::TooLarge {
                width: usize::MAX / 2 + 1,
                height: 2
            })
        );
    }

    #[test]
    fn test_state_mut_edits_session_state() {
        let mut puzzle = Puzzle::from_record(&record()).unwrap();
        assert!(puzzle.state_mut().set_state_value(1, FillValue::Letter('a')));
        puzzle.state_mut().clear_puzzle();
        assert_eq!(puzzle.state().to_state_string(), "----.--.-");
        assert!(puzzle.state_mut().set_state_value(1, FillValue::Letter('a')));
        assert_eq!(puzzle.to_record().state, "-A--.--.-");
    }

    #[test]
    fn test_reporter_receives_unused_clues() {
        let mut extra = record();
        extra.clues.push("spare".into());
        let mut reporter = CollectingReporter::new();
        Puzzle::from_record_with_reporter(&extra, &mut reporter).unwrap();
        assert_eq!(
            reporter.diagnostics(),
            [Diagnostic::UnusedClueTexts {
                used: 3,
                available: 4
            }]
        );
    }

    #[test]
    fn test_to_record_round_trips_layout() {
        let mut puzzle = Puzzle::from_record(&record()).unwrap();
        puzzle.set_state_value(2, FillValue::Letter('t'));
        let exported = puzzle.to_record();
        assert_eq!(exported.solution, "CATO.OW.E");
        assert_eq!(exported.state, "C-TO.--.-");
        assert_eq!(exported.clues, record().clues);
    }
}
