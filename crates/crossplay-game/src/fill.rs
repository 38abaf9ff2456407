use crossplay_core::{BLANK_CHAR, FILLER_CHAR};

/// The content of one grid position in the fill state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum FillValue {
    /// A blocked cell; never changes during play.
    Filler,
    /// A letter cell with no input yet.
    Blank,
    /// A letter cell holding an entered letter (uppercase).
    Letter(char),
}

impl FillValue {
    /// Parses a state or solution character.
    ///
    /// [`FILLER_CHAR`] and [`BLANK_CHAR`] map to their sentinels; anything
    /// else is a letter, stored uppercase.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        match ch {
            FILLER_CHAR => Self::Filler,
            BLANK_CHAR => Self::Blank,
            ch => Self::Letter(ch.to_ascii_uppercase()),
        }
    }

    /// Returns the state-string character for this value.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Filler => FILLER_CHAR,
            Self::Blank => BLANK_CHAR,
            Self::Letter(ch) => ch,
        }
    }

    /// Returns the entered letter, if any.
    #[must_use]
    pub fn as_letter(self) -> Option<char> {
        match self {
            Self::Letter(ch) => Some(ch),
            Self::Filler | Self::Blank => None,
        }
    }

    /// Re-parses letters so that sentinel characters and lowercase input
    /// wrapped in [`FillValue::Letter`] take their canonical form.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        match self {
            Self::Letter(ch) => Self::from_char(ch),
            other => other,
        }
    }
}

impl From<char> for FillValue {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(FillValue::from_char('.'), FillValue::Filler);
        assert_eq!(FillValue::from_char('-'), FillValue::Blank);
        assert_eq!(FillValue::from_char('q'), FillValue::Letter('Q'));
        assert_eq!(FillValue::from_char('Z'), FillValue::Letter('Z'));
    }

    #[test]
    fn test_to_char() {
        let chars: String = [FillValue::Filler, FillValue::Blank, FillValue::Letter('K')]
            .into_iter()
            .map(FillValue::to_char)
            .collect();
        assert_eq!(chars, ".-K");
    }

    #[test]
    fn test_normalized() {
        assert_eq!(FillValue::Letter('.').normalized(), FillValue::Filler);
        assert_eq!(FillValue::Letter('a').normalized(), FillValue::Letter('A'));
        assert_eq!(FillValue::Blank.normalized(), FillValue::Blank);
    }
}
