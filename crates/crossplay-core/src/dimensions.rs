//! Grid geometry: row/column edge tests and single steps along an axis.

use crate::Direction;

/// Width and height of a row-major grid.
///
/// All edge tests use row/column arithmetic, so a step never wraps from the
/// end of one row onto the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
    len: usize,
}

impl Dimensions {
    /// Creates dimensions for a `width`×`height` grid.
    ///
    /// Returns `None` if either side is zero or the tile count overflows
    /// `usize`.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        match width.checked_mul(height) {
            Some(len) => Some(Self { width, height, len }),
            None => None,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    #[inline]
    pub const fn width(self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    #[inline]
    pub const fn height(self) -> usize {
        self.height
    }

    /// Returns the number of tiles.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.len
    }

    /// Always `false`; zero-sized grids cannot be constructed.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` if `idx` addresses a tile of this grid.
    #[must_use]
    #[inline]
    pub const fn contains(self, idx: usize) -> bool {
        idx < self.len()
    }

    /// Returns the `(column, row)` of `idx`.
    #[must_use]
    #[inline]
    pub const fn coords(self, idx: usize) -> (usize, usize) {
        (idx % self.width, idx / self.width)
    }

    /// Leftmost column for Across, top row for Down.
    #[must_use]
    #[inline]
    pub const fn on_starting_edge(self, idx: usize, direction: Direction) -> bool {
        match direction {
            Direction::Across => idx % self.width == 0,
            Direction::Down => idx < self.width,
        }
    }

    /// Rightmost column for Across, bottom row for Down.
    #[must_use]
    #[inline]
    pub const fn on_ending_edge(self, idx: usize, direction: Direction) -> bool {
        match direction {
            Direction::Across => idx % self.width == self.width - 1,
            Direction::Down => idx + self.width >= self.len(),
        }
    }

    /// Index one step backward along `direction`, or `None` at the grid edge.
    #[must_use]
    #[inline]
    pub const fn step_back(self, idx: usize, direction: Direction) -> Option<usize> {
        if !self.contains(idx) || self.on_starting_edge(idx, direction) {
            return None;
        }
        Some(idx - direction.step(self.width))
    }

    /// Index one step forward along `direction`, or `None` at the grid edge.
    #[must_use]
    #[inline]
    pub const fn step_forward(self, idx: usize, direction: Direction) -> Option<usize> {
        if !self.contains(idx) || self.on_ending_edge(idx, direction) {
            return None;
        }
        Some(idx + direction.step(self.width))
    }
}
