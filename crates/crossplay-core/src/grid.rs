//! The built grid and its clue lists.

use std::ops::Index;

use crate::{ByDirection, Dimensions, Direction, Tile};

/// An immutable crossword grid.
///
/// Tiles are stored in row-major order, so `grid[idx].idx() == idx` holds for
/// every index. Grids are produced by [`GridBuilder`](crate::GridBuilder) and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    tiles: Vec<Tile>,
    clue_counts: ByDirection<usize>,
}

impl Grid {
    pub(crate) fn from_parts(
        dims: Dimensions,
        tiles: Vec<Tile>,
        clue_counts: ByDirection<usize>,
    ) -> Self {
        debug_assert_eq!(tiles.len(), dims.len());
        Self {
            dims,
            tiles,
            clue_counts,
        }
    }

    /// Returns the grid dimensions.
    #[must_use]
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.dims.width()
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// Returns the number of tiles (`width * height`).
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`; grids have at least one tile.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns the tile at `idx`, or `None` if out of bounds.
    #[must_use]
    #[inline]
    pub fn tile(&self, idx: usize) -> Option<&Tile> {
        self.tiles.get(idx)
    }

    /// Returns all tiles in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterates over the tiles of row `y`.
    pub fn row(&self, y: usize) -> impl Iterator<Item = &Tile> {
        self.tiles.chunks(self.width()).nth(y).into_iter().flatten()
    }

    /// Returns the number of clues (words) in `direction`.
    #[must_use]
    #[inline]
    pub fn clue_count(&self, direction: Direction) -> usize {
        self.clue_counts[direction]
    }

    /// Iterates over the tiles that start a word in `direction`, in reading order.
    pub fn word_starts(&self, direction: Direction) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(move |tile| tile.is_start_of_word(direction))
    }
}

impl Index<usize> for Grid {
    type Output = Tile;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.tiles[idx]
    }
}

/// A clue text together with its position in a direction's clue list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClueRef<'a> {
    /// Direction of the clue.
    pub direction: Direction,
    /// Index within the direction's clue list.
    pub index: usize,
    /// The clue text.
    pub text: &'a str,
}

/// Clue texts split per direction, each list in grid reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clues {
    lists: ByDirection<Vec<String>>,
}

impl Clues {
    pub(crate) fn from_lists(lists: ByDirection<Vec<String>>) -> Self {
        Self { lists }
    }

    /// Returns the clue list for `direction`.
    #[must_use]
    #[inline]
    pub fn list(&self, direction: Direction) -> &[String] {
        &self.lists[direction]
    }

    /// Returns the number of clues in `direction`.
    #[must_use]
    #[inline]
    pub fn len(&self, direction: Direction) -> usize {
        self.lists[direction].len()
    }

    /// Returns `true` if there are no clues in `direction`.
    #[must_use]
    #[inline]
    pub fn is_empty(&self, direction: Direction) -> bool {
        self.lists[direction].is_empty()
    }

    /// Returns clue `index` of `direction`.
    #[must_use]
    pub fn get(&self, direction: Direction, index: usize) -> Option<ClueRef<'_>> {
        self.lists[direction].get(index).map(|text| ClueRef {
            direction,
            index,
            text,
        })
    }

    /// Iterates over the clues of `direction` in order.
    pub fn iter(&self, direction: Direction) -> impl Iterator<Item = ClueRef<'_>> {
        self.lists[direction]
            .iter()
            .enumerate()
            .map(move |(index, text)| ClueRef {
                direction,
                index,
                text,
            })
    }

    /// Returns the clue of the word through `tile` in `direction`.
    ///
    /// Returns `None` for filler tiles and for letters that are not part of a
    /// word in that direction.
    #[must_use]
    pub fn for_tile(&self, tile: &Tile, direction: Direction) -> Option<ClueRef<'_>> {
        tile.clue_index(direction)
            .and_then(|index| self.get(direction, index))
    }
}
