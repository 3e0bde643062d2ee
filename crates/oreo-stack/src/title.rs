//! Tower title: the tower read out loud.

use crate::part::Part;

/// Build the display title for a sequence of parts.
///
/// Each [`Part::Dark`] contributes `"O"` and each [`Part::White`]
/// contributes `"RE"`, concatenated in order with no separators.
///
/// # Examples
///
/// ```
/// use oreo_stack::{Part, title_for};
///
/// assert_eq!(title_for(&[Part::Dark, Part::White, Part::Dark]), "OREO");
/// assert_eq!(title_for(&[]), "");
/// ```
#[must_use]
pub fn title_for(parts: &[Part]) -> String {
    parts.iter().map(|part| part.syllable()).collect()
}
