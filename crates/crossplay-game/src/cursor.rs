use crossplay_core::{Direction, Grid, NavigationError, Tile};

use crate::{FillValue, GameError, Puzzle};

/// The selected tile and the direction input flows in.
///
/// A cursor only ever rests on letter tiles. Spatial moves that would leave
/// the grid keep it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    tile: usize,
    direction: Direction,
}

impl Cursor {
    /// Places a cursor at the start of the first Across clue, falling back to
    /// the first Down clue and then to the first letter tile.
    ///
    /// Returns `None` if the grid has no letter tiles.
    #[must_use]
    pub fn new(grid: &Grid) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find_map(|direction| {
                grid.start_of_first_clue(direction)
                    .map(|tile| Self::on(tile, direction))
            })
            .or_else(|| {
                grid.tiles()
                    .iter()
                    .find(|tile| tile.is_letter())
                    .map(|tile| Self::on(tile, Direction::Across))
            })
    }

    /// Places a cursor on tile `idx`, if it is a letter tile.
    #[must_use]
    pub fn at(grid: &Grid, idx: usize, direction: Direction) -> Option<Self> {
        grid.tile(idx)
            .filter(|tile| tile.is_letter())
            .map(|tile| Self::on(tile, direction))
    }

    fn on(tile: &Tile, direction: Direction) -> Self {
        Self {
            tile: tile.idx(),
            direction,
        }
    }

    /// Returns the selected tile index.
    #[must_use]
    pub fn tile(&self) -> usize {
        self.tile
    }

    /// Returns the active direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn current<'g>(&self, grid: &'g Grid) -> Result<&'g Tile, NavigationError> {
        grid.tile(self.tile).ok_or(NavigationError::TileOutOfBounds {
            idx: self.tile,
            len: grid.len(),
        })
    }

    fn has_word(&self, grid: &Grid, direction: Direction) -> bool {
        grid.tile(self.tile)
            .and_then(|tile| tile.clue_index(direction))
            .is_some()
    }

    /// Switches to the other direction if the selected tile has a word there.
    ///
    /// Returns whether the direction changed.
    pub fn toggle_direction(&mut self, grid: &Grid) -> bool {
        let other = self.direction.other();
        if !self.has_word(grid, other) {
            return false;
        }
        self.direction = other;
        true
    }

    // Falls back to the other direction when the tile has no word in the active one.
    fn word_direction(&mut self, grid: &Grid) -> Option<Direction> {
        if !self.has_word(grid, self.direction) && !self.toggle_direction(grid) {
            return None;
        }
        Some(self.direction)
    }

    fn jump(&mut self, target: Option<&Tile>) -> bool {
        match target {
            Some(tile) => {
                self.tile = tile.idx();
                true
            }
            None => false,
        }
    }

    /// Moves to the nearest letter tile on the left.
    pub fn move_left(&mut self, grid: &Grid) -> bool {
        let target = grid.tile(self.tile).and_then(|tile| grid.play_tile_left(tile));
        self.jump(target)
    }

    /// Moves to the nearest letter tile on the right.
    pub fn move_right(&mut self, grid: &Grid) -> bool {
        let target = grid.tile(self.tile).and_then(|tile| grid.play_tile_right(tile));
        self.jump(target)
    }

    /// Moves to the nearest letter tile above.
    pub fn move_up(&mut self, grid: &Grid) -> bool {
        let target = grid.tile(self.tile).and_then(|tile| grid.play_tile_up(tile));
        self.jump(target)
    }

    /// Moves to the nearest letter tile below.
    pub fn move_down(&mut self, grid: &Grid) -> bool {
        let target = grid.tile(self.tile).and_then(|tile| grid.play_tile_down(tile));
        self.jump(target)
    }

    /// Moves to the next tile of the word, continuing into the next clue.
    ///
    /// Returns `Ok(false)` if the tile is not part of any word.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationError`] from the grid.
    pub fn advance(&mut self, grid: &Grid) -> Result<bool, NavigationError> {
        let Some(direction) = self.word_direction(grid) else {
            return Ok(false);
        };
        let next = grid.next_tile(self.current(grid)?, direction)?;
        Ok(self.jump(Some(next)))
    }

    /// Moves to the previous tile of the word, continuing into the previous clue.
    ///
    /// Returns `Ok(false)` if the tile is not part of any word.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationError`] from the grid.
    pub fn retreat(&mut self, grid: &Grid) -> Result<bool, NavigationError> {
        let Some(direction) = self.word_direction(grid) else {
            return Ok(false);
        };
        let prev = grid.previous_tile(self.current(grid)?, direction)?;
        Ok(self.jump(Some(prev)))
    }

    /// Jumps to the start of the next clue.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationError`] from the grid.
    pub fn next_clue(&mut self, grid: &Grid) -> Result<bool, NavigationError> {
        let Some(direction) = self.word_direction(grid) else {
            return Ok(false);
        };
        let next = grid.start_of_next_clue_tile(self.current(grid)?, direction)?;
        Ok(self.jump(Some(next)))
    }

    /// Jumps to the end of the previous clue.
    ///
    /// # Errors
    ///
    /// Propagates [`NavigationError`] from the grid.
    pub fn prev_clue(&mut self, grid: &Grid) -> Result<bool, NavigationError> {
        let Some(direction) = self.word_direction(grid) else {
            return Ok(false);
        };
        let prev = grid.end_of_prev_clue_tile(self.current(grid)?, direction)?;
        Ok(self.jump(Some(prev)))
    }

    /// Enters a letter at the cursor and advances.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLetter`] for anything but ASCII letters and
    /// [`GameError::Navigation`] if advancing fails.
    pub fn input_letter(&mut self, puzzle: &mut Puzzle, ch: char) -> Result<(), GameError> {
        if !ch.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter { ch });
        }
        puzzle.set_state_value(self.tile, FillValue::Letter(ch.to_ascii_uppercase()));
        self.advance(puzzle.grid())?;
        Ok(())
    }

    /// Clears the letter at the cursor, or steps back and clears the
    /// previous tile when the cursor is already on a blank.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Navigation`] if stepping back fails.
    pub fn backspace(&mut self, puzzle: &mut Puzzle) -> Result<(), GameError> {
        if puzzle.state().is_blank_tile(self.tile) {
            self.retreat(puzzle.grid())?;
        }
        puzzle.set_state_value(self.tile, FillValue::Blank);
        Ok(())
    }
}
