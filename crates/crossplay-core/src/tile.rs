//! Grid tiles.

use crate::{ByDirection, Direction};

/// One position of a built crossword grid.
///
/// Filler tiles block words and carry no word data. Letter tiles carry one
/// [`WordSlot`] per direction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Tile {
    /// A blocked cell.
    Filler {
        /// Position in row-major order.
        idx: usize,
    },
    /// A cell that takes a letter.
    Letter(LetterTile),
}

impl Tile {
    /// Returns the position of this tile in row-major order.
    #[must_use]
    #[inline]
    pub const fn idx(&self) -> usize {
        match self {
            Self::Filler { idx } => *idx,
            Self::Letter(letter) => letter.idx,
        }
    }

    /// Returns the letter data, or `None` for a filler tile.
    #[must_use]
    #[inline]
    pub const fn as_letter(&self) -> Option<&LetterTile> {
        match self {
            Self::Filler { .. } => None,
            Self::Letter(letter) => Some(letter),
        }
    }

    /// Returns the word slot for `direction`, or `None` for a filler tile.
    #[must_use]
    #[inline]
    pub fn slot(&self, direction: Direction) -> Option<&WordSlot> {
        self.as_letter().map(|letter| letter.slot(direction))
    }

    /// Returns `true` if this tile is a letter tile starting a word in `direction`.
    #[must_use]
    #[inline]
    pub fn is_start_of_word(&self, direction: Direction) -> bool {
        self.slot(direction).is_some_and(|slot| slot.is_start_of_word)
    }

    /// Returns `true` if this tile is a letter tile ending a word in `direction`.
    #[must_use]
    #[inline]
    pub fn is_end_of_word(&self, direction: Direction) -> bool {
        self.slot(direction).is_some_and(|slot| slot.is_end_of_word)
    }

    /// Returns the clue index of this tile's word in `direction`.
    #[must_use]
    #[inline]
    pub fn clue_index(&self, direction: Direction) -> Option<usize> {
        self.slot(direction).and_then(|slot| slot.clue_index)
    }
}

/// Word data for a letter tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterTile {
    /// Position in row-major order.
    pub idx: usize,
    /// The solution letter of this tile.
    pub solution: char,
    /// Word membership for each direction.
    pub slots: ByDirection<WordSlot>,
}

impl LetterTile {
    /// Returns the word slot for `direction`.
    #[must_use]
    #[inline]
    pub fn slot(&self, direction: Direction) -> &WordSlot {
        &self.slots[direction]
    }
}

/// How a letter tile takes part in the word running through it in one direction.
///
/// A tile whose run along the axis is a single cell is not part of a word:
/// it is neither start nor end, has no clue index, and its member list holds
/// only the tile itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSlot {
    /// The tile is the first tile of a word.
    pub is_start_of_word: bool,
    /// The tile is the last tile of a word.
    pub is_end_of_word: bool,
    /// Index of the word's clue in this direction's clue list.
    pub clue_index: Option<usize>,
    /// Indices of all tiles of the run, ascending. Always contains the tile itself.
    pub members: Vec<usize>,
}

impl WordSlot {
    /// Returns `true` if the tile belongs to a word of at least two tiles.
    #[must_use]
    #[inline]
    pub fn is_word(&self) -> bool {
        self.members.len() >= 2
    }

    /// Returns the first tile index of the run.
    #[must_use]
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.members.first().copied()
    }
}
