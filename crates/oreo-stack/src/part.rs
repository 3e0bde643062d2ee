//! The two kinds of layer a tower is built from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One layer of the tower.
///
/// Parts carry no payload; a layer's identity is purely its position
/// in the [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// A chocolate cookie layer, added by the "O" button.
    Dark,
    /// A cream filling layer, added by the "RE" button.
    White,
}

impl Part {
    /// Both variants, in button order.
    pub const ALL: [Self; 2] = [Self::Dark, Self::White];

    /// The syllable this part contributes to the tower title.
    #[must_use]
    pub const fn syllable(self) -> &'static str {
        match self {
            Self::Dark => "O",
            Self::White => "RE",
        }
    }

    /// Alternative text for the layer image.
    #[must_use]
    pub const fn alt_text(self) -> &'static str {
        match self {
            Self::Dark => "Oreo cookie part",
            Self::White => "Oreo filling part",
        }
    }

    /// Number of layers in `parts` that are this kind of part.
    #[must_use]
    pub fn count_in(self, parts: &[Self]) -> usize {
        parts.iter().filter(|&&p| p == self).count()
    }

    /// Accessible label for the button that appends this part.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Dark => "Add dark Oreo part",
            Self::White => "Add white Oreo part",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.syllable())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn count_in() {
        let parts = [Part::Dark, Part::White, Part::Dark];
        assert_eq!(Part::Dark.count_in(&parts), 2);
        assert_eq!(Part::White.count_in(&parts), 1);
        assert_eq!(Part::White.count_in(&[]), 0);
    }

    #[test]
    fn syllables() {
        assert_eq!(Part::Dark.syllable(), "O");
        assert_eq!(Part::White.syllable(), "RE");
    }

    #[test]
    fn display_matches_syllable() {
        for part in Part::ALL {
            assert_eq!(part.to_string(), part.syllable());
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Part::Dark).unwrap(), r#""dark""#);
        assert_eq!(serde_json::to_string(&Part::White).unwrap(), r#""white""#);
        let part: Part = serde_json::from_str(r#""white""#).unwrap();
        assert_eq!(part, Part::White);
    }

    #[test]
    fn alt_text_distinguishes_cookie_from_filling() {
        assert_ne!(Part::Dark.alt_text(), Part::White.alt_text());
    }
}
