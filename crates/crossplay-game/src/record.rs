use serde::{Deserialize, Serialize};

/// A puzzle as produced by an external `.puz` decoder.
///
/// This is the JSON shape the surrounding application stores. Fields the
/// decoder emits but the game does not use (such as raw binary sections) are
/// ignored when deserializing.
///
/// # Examples
///
/// ```
/// use crossplay_game::PuzzleRecord;
///
/// let record: PuzzleRecord = serde_json::from_str(r#"{
///     "solution": "CAT",
///     "state": "---",
///     "title": "Tiny",
///     "author": "Anon",
///     "copyright": "",
///     "width": 3,
///     "height": 1,
///     "clues": ["Feline"]
/// }"#).unwrap();
/// assert_eq!(record.width, 3);
/// assert_eq!(record.clues, ["Feline"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// Row-major solution letters, `.` for filler cells.
    pub solution: String,
    /// Row-major fill state: letters, `-` for blank, `.` for filler.
    ///
    /// An empty state means every letter cell starts blank.
    #[serde(default)]
    pub state: String,
    /// Puzzle title.
    #[serde(default)]
    pub title: String,
    /// Puzzle author.
    #[serde(default)]
    pub author: String,
    /// Copyright notice.
    #[serde(default)]
    pub copyright: String,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Clue texts in tile reading order, Across before Down on a shared start tile.
    pub clues: Vec<String>,
}

impl PuzzleRecord {
    /// Returns the descriptive metadata of the record.
    #[must_use]
    pub fn info(&self) -> PuzzleInfo {
        PuzzleInfo {
            title: self.title.clone(),
            author: self.author.clone(),
            copyright: self.copyright.clone(),
        }
    }
}

/// Descriptive metadata of a puzzle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleInfo {
    /// Puzzle title.
    pub title: String,
    /// Puzzle author.
    pub author: String,
    /// Copyright notice.
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_decoder_sections_and_defaults_metadata() {
        let record: PuzzleRecord = serde_json::from_str(
            r#"{
                "solution": "AB",
                "width": 2,
                "height": 1,
                "clues": ["x"],
                "sections": [{"title": "GEXT", "data": [0, 1]}]
            }"#,
        )
        .unwrap();
        assert_eq!(record.solution, "AB");
        assert!(record.state.is_empty());
        assert_eq!(record.info(), PuzzleInfo::default());
    }

    #[test]
    fn test_missing_dimensions_fail() {
        let result = serde_json::from_str::<PuzzleRecord>(r#"{"solution": "AB", "clues": []}"#);
        assert!(result.is_err());
    }
}
