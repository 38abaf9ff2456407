//! Per-position word classification.

use crate::{Dimensions, Direction};

/// Answers positional questions about a grid layout before any tile exists.
///
/// The classifier only knows which positions are filler. A run of letters
/// along one axis counts as a word only when it is at least two tiles long.
#[derive(Debug, Clone, Copy)]
pub struct TileClassifier<'a> {
    filler: &'a [bool],
    dims: Dimensions,
}

impl<'a> TileClassifier<'a> {
    /// Creates a classifier over a row-major filler mask.
    ///
    /// Returns `None` if `filler.len()` differs from `dims.len()`.
    #[must_use]
    pub fn new(filler: &'a [bool], dims: Dimensions) -> Option<Self> {
        (filler.len() == dims.len()).then_some(Self { filler, dims })
    }

    /// Out-of-bounds positions count as filler.
    #[must_use]
    #[inline]
    pub fn is_filler(&self, idx: usize) -> bool {
        self.filler.get(idx).copied().unwrap_or(true)
    }

    fn letter_before(&self, idx: usize, direction: Direction) -> bool {
        self.dims
            .step_back(idx, direction)
            .is_some_and(|prev| !self.is_filler(prev))
    }

    fn letter_after(&self, idx: usize, direction: Direction) -> bool {
        self.dims
            .step_forward(idx, direction)
            .is_some_and(|next| !self.is_filler(next))
    }

    /// Returns `true` if a word of at least two tiles starts at `idx`.
    #[must_use]
    pub fn is_start_of_word(&self, idx: usize, direction: Direction) -> bool {
        !self.is_filler(idx)
            && !self.letter_before(idx, direction)
            && self.letter_after(idx, direction)
    }

    /// Returns `true` if a word of at least two tiles ends at `idx`.
    #[must_use]
    pub fn is_end_of_word(&self, idx: usize, direction: Direction) -> bool {
        !self.is_filler(idx)
            && self.letter_before(idx, direction)
            && !self.letter_after(idx, direction)
    }

    /// Returns the run of letter tiles through `idx` along `direction`, ascending.
    ///
    /// The scan stops at filler tiles and at grid edges. A filler `idx`
    /// yields an empty list; an isolated letter yields just `[idx]`.
    #[must_use]
    pub fn word_members(&self, idx: usize, direction: Direction) -> Vec<usize> {
        if self.is_filler(idx) {
            return Vec::new();
        }

        let mut start = idx;
        while let Some(prev) = self.dims.step_back(start, direction) {
            if self.is_filler(prev) {
                break;
            }
            start = prev;
        }

        let mut members = vec![start];
        let mut end = start;
        while let Some(next) = self.dims.step_forward(end, direction) {
            if self.is_filler(next) {
                break;
            }
            members.push(next);
            end = next;
        }

        debug_assert!(members.is_sorted());
        debug_assert!(members.contains(&idx));
        members
    }
}
