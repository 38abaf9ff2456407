//! Core crossword grid model.
//!
//! This crate turns a flat solution string, puzzle dimensions, and an ordered
//! clue-text list into an immutable play grid, and provides the navigation
//! algorithms a cursor needs on it.
//!
//! # Overview
//!
//! - [`direction`]: [`Direction`] (Across/Down) and the [`ByDirection`] pair.
//! - [`dimensions`]: row-major geometry and edge tests.
//! - [`classify`]: [`TileClassifier`], the per-position start/end/membership rules.
//! - [`builder`]: [`GridBuilder`], which classifies every position and numbers clues.
//! - [`grid`] and [`tile`]: the built [`Grid`], its [`Tile`]s, and [`Clues`].
//! - [`navigation`]: spatial, in-word, and clue-to-clue movement on a [`Grid`].
//! - [`report`]: the [`Reporter`] through which the builder emits diagnostics.
//!
//! # Examples
//!
//! ```
//! use crossplay_core::{Direction, GridBuilder};
//!
//! // C A T
//! // O . O
//! // W . E
//! let (grid, clues) = GridBuilder::new()
//!     .build("CATO.OW.E", 3, 3, &["Feline", "Farm animal", "Foot digit"])
//!     .unwrap();
//!
//! assert_eq!(clues.list(Direction::Across), ["Feline"]);
//! assert_eq!(clues.list(Direction::Down), ["Farm animal", "Foot digit"]);
//!
//! let tile = grid.next_tile(&grid[6], Direction::Down).unwrap();
//! assert_eq!(tile.idx(), 2);
//! ```

pub mod builder;
pub mod classify;
pub mod dimensions;
pub mod direction;
pub mod grid;
pub mod navigation;
pub mod report;
pub mod tile;

pub use self::{
    builder::{BLANK_CHAR, BuildError, FILLER_CHAR, GridBuilder, build},
    classify::TileClassifier,
    dimensions::Dimensions,
    direction::{ByDirection, Direction},
    grid::{ClueRef, Clues, Grid},
    navigation::{Boundary, NavigationError},
    report::{CollectingReporter, Diagnostic, LogReporter, NoopReporter, Reporter},
    tile::{LetterTile, Tile, WordSlot},
};
