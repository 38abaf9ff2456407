//! Crossword play session built on `crossplay-core`.
//!
//! A [`Puzzle`] is built from a [`PuzzleRecord`], the already-decoded form of
//! a `.puz` file. It pairs the immutable grid and clues with a
//! [`StateTracker`], which holds the player's entries. A [`Cursor`] moves over
//! the grid and feeds keyboard-style input into the fill state.
//!
//! # Example
//!
//! ```
//! use crossplay_game::{Cursor, Puzzle, PuzzleRecord};
//!
//! let record = PuzzleRecord {
//!     solution: "CAT".into(),
//!     width: 3,
//!     height: 1,
//!     clues: vec!["Feline".into()],
//!     ..PuzzleRecord::default()
//! };
//! let mut puzzle = Puzzle::from_record(&record).unwrap();
//! let mut cursor = Cursor::new(puzzle.grid()).unwrap();
//!
//! for ch in "cat".chars() {
//!     cursor.input_letter(&mut puzzle, ch).unwrap();
//! }
//! assert!(puzzle.is_full());
//! assert!(puzzle.check_puzzle());
//! ```

pub use self::{cursor::*, error::*, fill::*, puzzle::*, record::*, state::*};

mod cursor;
mod error;
mod fill;
mod puzzle;
mod record;
mod state;
