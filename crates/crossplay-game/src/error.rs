use crossplay_core::{BuildError, NavigationError};

/// Errors from pairing a solution with an initial fill state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    /// The state string does not have one cell per solution cell.
    #[display("state has {actual} cells but the solution has {expected}")]
    LengthMismatch {
        /// Cells in the solution.
        expected: usize,
        /// Cells in the state.
        actual: usize,
    },
    /// Filler cells of the state and solution disagree at `idx`.
    #[display("state and solution disagree on filler at cell {idx}")]
    FillerMismatch {
        /// Offending position.
        idx: usize,
    },
    /// The solution holds the blank marker at `idx`.
    #[display("solution cell {idx} is blank")]
    BlankSolution {
        /// Offending position.
        idx: usize,
    },
}

/// Errors from building a [`Puzzle`](crate::Puzzle) out of a record.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PuzzleError {
    /// The grid could not be built.
    #[display("invalid grid: {_0}")]
    Build(BuildError),
    /// The initial fill state does not fit the grid.
    #[display("invalid state: {_0}")]
    State(StateError),
}

/// Errors from cursor-driven input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// Only ASCII letters can be entered.
    #[display("{ch:?} is not a letter")]
    #[from(ignore)]
    InvalidLetter {
        /// Rejected input.
        ch: char,
    },
    /// Moving the cursor failed.
    #[display("navigation failed: {_0}")]
    Navigation(NavigationError),
}
