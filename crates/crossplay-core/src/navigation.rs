//! Cursor movement over a built [`Grid`].
//!
//! Spatial moves (`play_tile_*`) step across the grid and skip filler tiles,
//! without wrapping at edges. Word moves (`next_tile`, `previous_tile`) follow
//! a word's members and continue into the neighboring clue, wrapping from
//! the last clue of a direction to the first and back.

use crate::{Direction, Grid, LetterTile, Tile};

/// Errors from word and clue navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NavigationError {
    /// Word navigation was requested from a filler tile.
    #[display("tile {idx} is a filler tile")]
    FillerTile {
        /// Position of the tile.
        idx: usize,
    },
    /// The letter tile is not part of any word in the requested direction.
    #[display("tile {idx} is not part of a word {direction}")]
    NoWord {
        /// Position of the tile.
        idx: usize,
        /// Requested direction.
        direction: Direction,
    },
    /// No tile carries the start or end flag for the requested clue.
    #[display("no {boundary} tile for {direction} clue {clue_index}")]
    ClueNotFound {
        /// Direction of the clue.
        direction: Direction,
        /// Requested clue index.
        clue_index: usize,
        /// Which end of the word was looked up.
        boundary: Boundary,
    },
    /// The tile does not belong to this grid.
    #[display("tile {idx} is outside a grid of {len} tiles")]
    TileOutOfBounds {
        /// Position of the tile.
        idx: usize,
        /// Number of tiles in the grid.
        len: usize,
    },
}

/// One end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Boundary {
    /// The first tile.
    #[display("start")]
    Start,
    /// The last tile.
    #[display("end")]
    End,
}

impl Grid {
    fn spatial_step(&self, tile: &Tile, direction: Direction, forward: bool) -> Option<&Tile> {
        let dims = self.dimensions();
        let step = |idx| {
            if forward {
                dims.step_forward(idx, direction)
            } else {
                dims.step_back(idx, direction)
            }
        };

        let mut idx = step(tile.idx())?;
        while self.tile(idx)?.is_filler() {
            idx = step(idx)?;
        }
        self.tile(idx)
    }

    /// Returns the nearest letter tile to the left in the same row.
    #[must_use]
    pub fn play_tile_left(&self, tile: &Tile) -> Option<&Tile> {
        self.spatial_step(tile, Direction::Across, false)
    }

    /// Returns the nearest letter tile to the right in the same row.
    #[must_use]
    pub fn play_tile_right(&self, tile: &Tile) -> Option<&Tile> {
        self.spatial_step(tile, Direction::Across, true)
    }

    /// Returns the nearest letter tile above in the same column.
    #[must_use]
    pub fn play_tile_up(&self, tile: &Tile) -> Option<&Tile> {
        self.spatial_step(tile, Direction::Down, false)
    }

    /// Returns the nearest letter tile below in the same column.
    #[must_use]
    pub fn play_tile_down(&self, tile: &Tile) -> Option<&Tile> {
        self.spatial_step(tile, Direction::Down, true)
    }

    fn letter(&self, tile: &Tile) -> Result<&LetterTile, NavigationError> {
        let idx = tile.idx();
        self.tile(idx)
            .ok_or(NavigationError::TileOutOfBounds {
                idx,
                len: self.len(),
            })?
            .as_letter()
            .ok_or(NavigationError::FillerTile { idx })
    }

    fn clue_of(&self, tile: &Tile, direction: Direction) -> Result<usize, NavigationError> {
        let letter = self.letter(tile)?;
        letter
            .slot(direction)
            .clue_index
            .ok_or(NavigationError::NoWord {
                idx: letter.idx,
                direction,
            })
    }

    /// Returns the tile after `tile` in its word along `direction`.
    ///
    /// From the last tile of a word this moves to the start of the next clue.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::FillerTile`] if `tile` is a filler tile.
    /// - [`NavigationError::NoWord`] if `tile` must leave a run that is not a word.
    /// - [`NavigationError::ClueNotFound`] if the next clue has no start tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossplay_core::Direction;
    ///
    /// // A B
    /// // C D
    /// let (grid, _) = crossplay_core::build("ABCD", 2, 2, &["a1", "d1", "d2", "a2"]).unwrap();
    /// assert_eq!(grid.next_tile(&grid[0], Direction::Across).unwrap().idx(), 1);
    /// assert_eq!(grid.next_tile(&grid[1], Direction::Across).unwrap().idx(), 2);
    /// assert_eq!(grid.next_tile(&grid[3], Direction::Across).unwrap().idx(), 0);
    /// ```
    pub fn next_tile(&self, tile: &Tile, direction: Direction) -> Result<&Tile, NavigationError> {
        let letter = self.letter(tile)?;
        let members = &letter.slot(direction).members;
        let next = members
            .iter()
            .position(|&member| member == letter.idx)
            .and_then(|pos| members.get(pos + 1));
        match next {
            Some(&next) => Ok(&self[next]),
            None => self.start_of_next_clue_tile(tile, direction),
        }
    }

    /// Returns the tile before `tile` in its word along `direction`.
    ///
    /// From the first tile of a word this moves to the end of the previous clue.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::next_tile`], with [`NavigationError::ClueNotFound`]
    /// raised when the previous clue has no end tile.
    pub fn previous_tile(
        &self,
        tile: &Tile,
        direction: Direction,
    ) -> Result<&Tile, NavigationError> {
        let letter = self.letter(tile)?;
        let members = &letter.slot(direction).members;
        let prev = members
            .iter()
            .position(|&member| member == letter.idx)
            .and_then(|pos| pos.checked_sub(1))
            .and_then(|pos| members.get(pos));
        match prev {
            Some(&prev) => Ok(&self[prev]),
            None => self.end_of_prev_clue_tile(tile, direction),
        }
    }

    /// Returns the start tile of the clue after the one through `tile`.
    ///
    /// The last clue of a direction is followed by the first.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::FillerTile`] if `tile` is a filler tile.
    /// - [`NavigationError::NoWord`] if `tile` has no clue in `direction`.
    /// - [`NavigationError::ClueNotFound`] if no tile starts the next clue.
    pub fn start_of_next_clue_tile(
        &self,
        tile: &Tile,
        direction: Direction,
    ) -> Result<&Tile, NavigationError> {
        let clue_index = self.clue_of(tile, direction)?;
        let target = (clue_index + 1) % self.clue_count(direction);
        self.clue_tile(direction, target, Boundary::Start)
    }

    /// Returns the end tile of the clue before the one through `tile`.
    ///
    /// The first clue of a direction is preceded by the last.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::FillerTile`] if `tile` is a filler tile.
    /// - [`NavigationError::NoWord`] if `tile` has no clue in `direction`.
    /// - [`NavigationError::ClueNotFound`] if no tile ends the previous clue.
    pub fn end_of_prev_clue_tile(
        &self,
        tile: &Tile,
        direction: Direction,
    ) -> Result<&Tile, NavigationError> {
        let clue_index = self.clue_of(tile, direction)?;
        let count = self.clue_count(direction);
        let target = (clue_index + count - 1) % count;
        self.clue_tile(direction, target, Boundary::End)
    }

    /// Returns the tile that starts clue `clue_index` of `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::ClueNotFound`] if no tile starts that clue.
    pub fn starting_tile_for_clue(
        &self,
        direction: Direction,
        clue_index: usize,
    ) -> Result<&Tile, NavigationError> {
        self.clue_tile(direction, clue_index, Boundary::Start)
    }

    /// Returns the tile that ends clue `clue_index` of `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::ClueNotFound`] if no tile ends that clue.
    pub fn end_tile_for_clue(
        &self,
        direction: Direction,
        clue_index: usize,
    ) -> Result<&Tile, NavigationError> {
        self.clue_tile(direction, clue_index, Boundary::End)
    }

    /// Returns the start tile of the first clue of `direction`, if there is one.
    #[must_use]
    pub fn start_of_first_clue(&self, direction: Direction) -> Option<&Tile> {
        self.starting_tile_for_clue(direction, 0).ok()
    }

    // Linear scan: clue starts need not be monotonic in grid position.
    fn clue_tile(
        &self,
        direction: Direction,
        clue_index: usize,
        boundary: Boundary,
    ) -> Result<&Tile, NavigationError> {
        self.tiles()
            .iter()
            .find(|tile| {
                let on_boundary = match boundary {
                    Boundary::Start => tile.is_start_of_word(direction),
                    Boundary::End => tile.is_end_of_word(direction),
                };
                on_boundary && tile.clue_index(direction) == Some(clue_index)
            })
            .ok_or(NavigationError::ClueNotFound {
                direction,
                clue_index,
                boundary,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build;

    // A B C .
    // D . E F
    // G H I J
    fn sample_grid() -> Grid {
        let (grid, _) = build(
            "ABC.D.EFGHIJ",
            4,
            3,
            &["a0", "d0", "d1", "a1", "d2", "a2"],
        )
        .unwrap();
        grid
    }

    fn idx(tile: Option<&Tile>) -> Option<usize> {
        tile.map(Tile::idx)
    }

    #[test]
    fn test_spatial_moves_skip_filler() {
        let grid = sample_grid();
        assert_eq!(idx(grid.play_tile_right(&grid[4])), Some(6));
        assert_eq!(idx(grid.play_tile_left(&grid[6])), Some(4));
        assert_eq!(idx(grid.play_tile_down(&grid[1])), Some(9));
        assert_eq!(idx(grid.play_tile_up(&grid[9])), Some(1));
        assert_eq!(idx(grid.play_tile_up(&grid[11])), Some(7));
        assert_eq!(idx(grid.play_tile_down(&grid[3])), Some(7));
    }

    #[test]
    fn test_spatial_moves_stop_at_edges() {
        let grid = sample_grid();
        assert_eq!(idx(grid.play_tile_left(&grid[0])), None);
        assert_eq!(idx(grid.play_tile_left(&grid[4])), None);
        assert_eq!(idx(grid.play_tile_right(&grid[11])), None);
        assert_eq!(idx(grid.play_tile_up(&grid[2])), None);
        assert_eq!(idx(grid.play_tile_down(&grid[10])), None);
    }

    #[test]
    fn test_spatial_moves_none_when_only_filler_remains() {
        let grid = sample_grid();
        assert_eq!(idx(grid.play_tile_right(&grid[2])), None);
        assert_eq!(idx(grid.play_tile_up(&grid[7])), None);
    }

    #[test]
    fn test_next_tile_within_and_across_words() {
        let grid = sample_grid();
        let next = |i, d| grid.next_tile(&grid[i], d).map(Tile::idx);

        assert_eq!(next(1, Direction::Across), Ok(2));
        assert_eq!(next(2, Direction::Across), Ok(6));
        assert_eq!(next(7, Direction::Across), Ok(8));
        assert_eq!(next(11, Direction::Across), Ok(0));

        assert_eq!(next(4, Direction::Down), Ok(8));
        assert_eq!(next(8, Direction::Down), Ok(2));
        assert_eq!(next(10, Direction::Down), Ok(7));
        assert_eq!(next(11, Direction::Down), Ok(0));
    }

    #[test]
    fn test_previous_tile_within_and_across_words() {
        let grid = sample_grid();
        let prev = |i, d| grid.previous_tile(&grid[i], d).map(Tile::idx);

        assert_eq!(prev(2, Direction::Across), Ok(1));
        assert_eq!(prev(6, Direction::Across), Ok(2));
        assert_eq!(prev(0, Direction::Across), Ok(11));

        assert_eq!(prev(8, Direction::Down), Ok(4));
        assert_eq!(prev(2, Direction::Down), Ok(8));
        assert_eq!(prev(0, Direction::Down), Ok(11));
    }

    #[test]
    fn test_single_word_wraps_onto_itself() {
        let (grid, _) = build("CAT", 3, 1, &["Feline"]).unwrap();
        assert_eq!(grid.next_tile(&grid[2], Direction::Across).map(Tile::idx), Ok(0));
        assert_eq!(
            grid.previous_tile(&grid[0], Direction::Across).map(Tile::idx),
            Ok(2)
        );
    }

    #[test]
    fn test_filler_tile_is_an_error() {
        let grid = sample_grid();
        let filler = &grid[3];
        let expected = Err(NavigationError::FillerTile { idx: 3 });
        for direction in Direction::ALL {
            assert_eq!(grid.next_tile(filler, direction), expected);
            assert_eq!(grid.previous_tile(filler, direction), expected);
            assert_eq!(grid.start_of_next_clue_tile(filler, direction), expected);
            assert_eq!(grid.end_of_prev_clue_tile(filler, direction), expected);
        }
    }

    #[test]
    fn test_isolated_letter_has_no_word() {
        let grid = sample_grid();
        assert_eq!(
            grid.next_tile(&grid[4], Direction::Across),
            Err(NavigationError::NoWord {
                idx: 4,
                direction: Direction::Across
            })
        );
        assert_eq!(
            grid.previous_tile(&grid[9], Direction::Down),
            Err(NavigationError::NoWord {
                idx: 9,
                direction: Direction::Down
            })
        );
    }

    #[test]
    fn test_foreign_tile_is_out_of_bounds() {
        let grid = sample_grid();
        let foreign = Tile::Filler { idx: 99 };
        assert_eq!(
            grid.next_tile(&foreign, Direction::Across),
            Err(NavigationError::TileOutOfBounds { idx: 99, len: 12 })
        );
        assert!(grid.play_tile_left(&foreign).is_none());
    }

    #[test]
    fn test_clue_lookup() {
        let grid = sample_grid();
        assert_eq!(
            grid.starting_tile_for_clue(Direction::Down, 2).map(Tile::idx),
            Ok(7)
        );
        assert_eq!(
            grid.end_tile_for_clue(Direction::Across, 1).map(Tile::idx),
            Ok(7)
        );
        assert_eq!(idx(grid.start_of_first_clue(Direction::Across)), Some(0));
        assert_eq!(
            grid.starting_tile_for_clue(Direction::Down, 3),
            Err(NavigationError::ClueNotFound {
                direction: Direction::Down,
                clue_index: 3,
                boundary: Boundary::Start
            })
        );
    }

    #[test]
    fn test_next_clue_cycles() {
        let grid = sample_grid();
        for direction in Direction::ALL {
            let first = grid.start_of_first_clue(direction).unwrap();
            let mut tile = first;
            for _ in 0..grid.clue_count(direction) {
                tile = grid.start_of_next_clue_tile(tile, direction).unwrap();
            }
            assert_eq!(tile.idx(), first.idx());
        }
    }

    #[test]
    fn test_start_of_first_clue_on_empty_direction() {
        let (grid, _) = build("CAT", 3, 1, &["Feline"]).unwrap();
        assert!(grid.start_of_first_clue(Direction::Down).is_none());
    }
}
