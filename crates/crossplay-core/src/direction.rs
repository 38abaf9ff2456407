//! Word directions and per-direction storage.

use std::ops::{Index, IndexMut};

/// One of the two orthogonal directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum Direction {
    /// Left to right along a row.
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Direction {
    /// Both directions, Across first.
    ///
    /// This is also the order in which clue texts are consumed when one tile
    /// starts a word in both directions.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the orthogonal direction.
    #[must_use]
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the index distance between neighboring tiles of a grid with
    /// the given width, along this direction.
    #[must_use]
    #[inline]
    pub const fn step(self, width: usize) -> usize {
        match self {
            Self::Across => 1,
            Self::Down => width,
        }
    }
}

/// A pair of values, one for each [`Direction`].
///
/// # Examples
///
/// ```
/// use crossplay_core::{ByDirection, Direction};
///
/// let mut counts = ByDirection::new(0, 0);
/// counts[Direction::Down] += 2;
/// assert_eq!(counts[Direction::Across], 0);
/// assert_eq!(counts[Direction::Down], 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByDirection<T> {
    /// Value for [`Direction::Across`].
    pub across: T,
    /// Value for [`Direction::Down`].
    pub down: T,
}

impl<T> ByDirection<T> {
    /// Creates a pair from its Across and Down values.
    #[must_use]
    #[inline]
    pub const fn new(across: T, down: T) -> Self {
        Self { across, down }
    }

    /// Builds a pair by calling `f` once per direction, Across first.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        let across = f(Direction::Across);
        let down = f(Direction::Down);
        Self { across, down }
    }

    /// Returns a reference to the value for `direction`.
    #[must_use]
    #[inline]
    pub const fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Returns a mutable reference to the value for `direction`.
    #[inline]
    pub const fn get_mut(&mut self, direction: Direction) -> &mut T {
        match direction {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        }
    }

    /// Iterates over `(direction, value)` pairs, Across first.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        [
            (Direction::Across, &self.across),
            (Direction::Down, &self.down),
        ]
        .into_iter()
    }
}

impl<T> Index<Direction> for ByDirection<T> {
    type Output = T;

    #[inline]
    fn index(&self, direction: Direction) -> &Self::Output {
        self.get(direction)
    }
}

impl<T> IndexMut<Direction> for ByDirection<T> {
    #[inline]
    fn index_mut(&mut self, direction: Direction) -> &mut Self::Output {
        self.get_mut(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_is_involution() {
        for direction in Direction::ALL {
            assert_ne!(direction.other(), direction);
            assert_eq!(direction.other().other(), direction);
        }
    }

    #[test]
    fn test_step() {
        assert_eq!(Direction::Across.step(15), 1);
        assert_eq!(Direction::Down.step(15), 15);
    }

    #[test]
    fn test_by_direction_from_fn_order() {
        let mut seen = Vec::new();
        let pair = ByDirection::from_fn(|direction| {
            seen.push(direction);
            seen.len()
        });
        assert_eq!(seen, Direction::ALL);
        assert_eq!(pair, ByDirection::new(1, 2));
    }

    #[test]
    fn test_by_direction_iter() {
        let pair = ByDirection::new("a", "d");
        let items: Vec<_> = pair.iter().map(|(d, v)| (d, *v)).collect();
        assert_eq!(
            items,
            vec![(Direction::Across, "a"), (Direction::Down, "d")]
        );
    }
}
