use std::collections::BTreeSet;

use crate::{FillValue, StateError};

/// Tracks the player's fill state against the solution.
///
/// There is one entry per grid position. Filler positions are fixed at
/// construction; every other position holds either [`FillValue::Blank`] or
/// an entered letter.
///
/// # Example
///
/// ```
/// use crossplay_game::{FillValue, StateTracker};
///
/// let mut state = StateTracker::blank("CA.T").unwrap();
/// assert!(!state.is_full());
///
/// for (idx, ch) in ['C', 'A', '.', 'T'].into_iter().enumerate() {
///     state.set_state_value(idx, FillValue::from_char(ch));
/// }
/// assert!(state.is_full());
/// assert!(state.check_puzzle());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTracker {
    solution: Vec<FillValue>,
    cells: Vec<FillValue>,
}

impl StateTracker {
    fn parse_solution(solution: &str) -> Result<Vec<FillValue>, StateError> {
        let solution: Vec<FillValue> = solution.chars().map(FillValue::from_char).collect();
        if let Some(idx) = solution.iter().position(|value| value.is_blank()) {
            return Err(StateError::BlankSolution { idx });
        }
        Ok(solution)
    }

    /// Creates a tracker with every letter position blank.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::BlankSolution`] if `solution` contains the blank marker.
    pub fn blank(solution: &str) -> Result<Self, StateError> {
        let solution = Self::parse_solution(solution)?;
        let cells = solution
            .iter()
            .map(|value| {
                if value.is_filler() {
                    FillValue::Filler
                } else {
                    FillValue::Blank
                }
            })
            .collect();
        Ok(Self { solution, cells })
    }

    /// Creates a tracker from a solution and a saved state string.
    ///
    /// # Errors
    ///
    /// - [`StateError::BlankSolution`] if `solution` contains the blank marker.
    /// - [`StateError::LengthMismatch`] if the strings differ in length.
    /// - [`StateError::FillerMismatch`] if their filler positions differ.
    pub fn new(solution: &str, state: &str) -> Result<Self, StateError> {
        let solution = Self::parse_solution(solution)?;
        let cells: Vec<FillValue> = state.chars().map(FillValue::from_char).collect();
        if cells.len() != solution.len() {
            return Err(StateError::LengthMismatch {
                expected: solution.len(),
                actual: cells.len(),
            });
        }
        if let Some(idx) = solution
            .iter()
            .zip(&cells)
            .position(|(sol, cell)| sol.is_filler() != cell.is_filler())
        {
            return Err(StateError::FillerMismatch { idx });
        }
        Ok(Self { solution, cells })
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if there are no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns all fill values in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[FillValue] {
        &self.cells
    }

    /// Returns the fill value at `idx`.
    #[must_use]
    pub fn state(&self, idx: usize) -> Option<FillValue> {
        self.cells.get(idx).copied()
    }

    /// Returns the solution value at `idx`.
    #[must_use]
    pub fn solution(&self, idx: usize) -> Option<FillValue> {
        self.solution.get(idx).copied()
    }

    /// Writes `value` at `idx`.
    ///
    /// Out-of-bounds indices, filler positions, and [`FillValue::Filler`]
    /// values are ignored. Returns whether the write happened.
    pub fn set_state_value(&mut self, idx: usize, value: FillValue) -> bool {
        let value = value.normalized();
        let Some(cell) = self.cells.get_mut(idx) else {
            return false;
        };
        if cell.is_filler() || value.is_filler() {
            return false;
        }
        *cell = value;
        true
    }

    /// Returns `true` if `idx` is a blank letter position.
    #[must_use]
    pub fn is_blank_tile(&self, idx: usize) -> bool {
        self.state(idx).is_some_and(|value| value.is_blank())
    }

    /// Returns `true` if `idx` is a filler position.
    #[must_use]
    pub fn is_filler_tile(&self, idx: usize) -> bool {
        self.state(idx).is_some_and(|value| value.is_filler())
    }

    /// Returns `true` if no position is blank.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_blank())
    }

    /// Returns `true` if every position matches the solution.
    #[must_use]
    pub fn check_puzzle(&self) -> bool {
        self.cells == self.solution
    }

    /// Returns the positions holding a letter that differs from the solution.
    ///
    /// Blank positions are never errors.
    #[must_use]
    pub fn errors(&self) -> BTreeSet<usize> {
        self.cells
            .iter()
            .zip(&self.solution)
            .enumerate()
            .filter(|(_, (cell, sol))| cell.is_letter() && cell != sol)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Resets every letter position to blank.
    pub fn clear_puzzle(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_filler() {
                *cell = FillValue::Blank;
            }
        }
    }

    /// Renders the fill state in state-string form.
    #[must_use]
    pub fn to_state_string(&self) -> String {
        self.cells.iter().map(|cell| cell.to_char()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_solution(state: &mut StateTracker) {
        for idx in 0..state.len() {
            if let Some(value) = state.solution(idx) {
                state.set_state_value(idx, value);
            }
        }
    }

    #[test]
    fn test_blank_initialization() {
        let state = StateTracker::blank("AB.C").unwrap();
        assert_eq!(state.to_state_string(), "--.-");
        assert!(state.is_filler_tile(2));
        assert!(state.is_blank_tile(0));
        assert!(!state.is_blank_tile(2));
    }

    #[test]
    fn test_new_validates_state() {
        assert_eq!(
            StateTracker::new("AB.C", "---").unwrap_err(),
            StateError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(
            StateTracker::new("AB.C", "-.--").unwrap_err(),
            StateError::FillerMismatch { idx: 1 }
        );
        assert_eq!(
            StateTracker::new("A-", "--").unwrap_err(),
            StateError::BlankSolution { idx: 1 }
        );
        let state = StateTracker::new("AB.C", "a-.-").unwrap();
        assert_eq!(state.state(0), Some(FillValue::Letter('A')));
    }

    #[test]
    fn test_set_state_value_is_forgiving() {
        let mut state = StateTracker::blank("AB.C").unwrap();
        assert!(!state.set_state_value(10, FillValue::Letter('X')));
        assert!(!state.set_state_value(2, FillValue::Letter('X')));
        assert!(!state.set_state_value(0, FillValue::Filler));
        assert!(!state.set_state_value(0, FillValue::Letter('.')));
        assert_eq!(state.to_state_string(), "--.-");

        assert!(state.set_state_value(0, FillValue::Letter('x')));
        assert_eq!(state.state(0), Some(FillValue::Letter('X')));
        assert!(state.set_state_value(0, FillValue::Blank));
        assert!(state.is_blank_tile(0));
    }

    #[test]
    fn test_clear_then_fill_solves() {
        let mut state = StateTracker::new("AB.C", "AX.-").unwrap();
        state.clear_puzzle();
        assert!(!state.is_full());
        assert_eq!(state.to_state_string(), "--.-");

        fill_solution(&mut state);
        assert!(state.is_full());
        assert!(state.check_puzzle());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_errors_skip_blanks() {
        let state = StateTracker::new("ABCD", "AX-Y").unwrap();
        assert_eq!(state.errors().into_iter().collect::<Vec<_>>(), [1, 3]);
        assert!(!state.is_full());
        assert!(!state.check_puzzle());
    }

    #[test]
    fn test_full_but_wrong() {
        let state = StateTracker::new("AB", "AC").unwrap();
        assert!(state.is_full());
        assert!(!state.check_puzzle());
        assert_eq!(state.errors().len(), 1);
    }
}
