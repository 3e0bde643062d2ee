//! The tower under construction.

use serde::{Deserialize, Serialize};

use crate::asset::{AssetRef, images_for};
use crate::part::Part;
use crate::title::title_for;

/// Ordered sequence of parts, top layer first.
///
/// The stack only ever grows by [`append`](Self::append) or empties
/// completely by [`clear`](Self::clear). Its projections
/// ([`images`](Self::images), [`title`](Self::title)) are recomputed on
/// every call and never cached, so they can't go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stack {
    parts: Vec<Part>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Add `part` beneath the current bottom layer.
    pub fn append(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Remove every layer.
    pub fn clear(&mut self) {
        self.parts.clear();
    }

    /// Number of layers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if there are no layers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The layers, top first.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of [`Part::Dark`] layers.
    #[must_use]
    pub fn dark_count(&self) -> usize {
        Part::Dark.count_in(&self.parts)
    }

    /// Number of [`Part::White`] layers.
    #[must_use]
    pub fn white_count(&self) -> usize {
        Part::White.count_in(&self.parts)
    }

    /// The asset drawn at each position, top first.
    #[must_use]
    pub fn images(&self) -> Vec<AssetRef> {
        images_for(&self.parts)
    }

    /// Display title, e.g. `"OREO"`.
    #[must_use]
    pub fn title(&self) -> String {
        title_for(&self.parts)
    }
}

impl From<Vec<Part>> for Stack {
    fn from(parts: Vec<Part>) -> Self {
        Self { parts }
    }
}

impl FromIterator<Part> for Stack {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl Extend<Part> for Stack {
    fn extend<I: IntoIterator<Item = Part>>(&mut self, iter: I) {
        self.parts.extend(iter);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use Part::{Dark, White};

    #[test]
    fn new_is_empty() {
        let stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.title(), "");
        assert!(stack.images().is_empty());
    }

    #[test]
    fn len_tracks_appends() {
        let mut stack = Stack::new();
        for n in 1..=20 {
            stack.append(if n % 3 == 0 { White } else { Dark });
            assert_eq!(stack.len(), n);
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut stack = Stack::new();
        stack.append(White);
        stack.append(Dark);
        stack.append(White);
        assert_eq!(stack.parts(), &[White, Dark, White]);
    }

    #[test]
    fn clear_empties_any_length() {
        for n in [0, 1, 7, 100] {
            let mut stack: Stack = std::iter::repeat_n(Dark, n).collect();
            stack.clear();
            assert_eq!(stack.len(), 0, "n={n}");
        }
    }

    #[test]
    fn clear_is_idempotent() {
        let mut stack = Stack::from(vec![Dark, White]);
        stack.clear();
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn append_after_clear_starts_fresh() {
        let mut stack = Stack::from(vec![White, White]);
        stack.clear();
        stack.append(Dark);
        assert_eq!(stack.parts(), &[Dark]);
        assert_eq!(stack.images(), vec![AssetRef::TopDark]);
    }

    #[test]
    fn five_part_scenario() {
        let mut stack = Stack::new();
        for part in [Dark, White, Dark, White, Dark] {
            stack.append(part);
        }
        assert_eq!(stack.title(), "OREOREO");
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.dark_count(), 3);
        assert_eq!(stack.white_count(), 2);
    }

    #[test]
    fn images_follow_position_policy() {
        let stack = Stack::from(vec![Dark, White, Dark, White, Dark]);
        assert_eq!(
            stack.images(),
            vec![
                AssetRef::TopDark,
                AssetRef::Filling,
                AssetRef::BottomDark,
                AssetRef::Filling,
                AssetRef::BottomDark,
            ]
        );
    }

    #[test]
    fn leading_filling_has_no_top_cookie() {
        let stack = Stack::from(vec![White, Dark]);
        assert_eq!(stack.images(), vec![AssetRef::Filling, AssetRef::BottomDark]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let stack = Stack::from(vec![Dark, White]);
        let json = serde_json::to_string(&stack).unwrap();
        assert_eq!(json, r#"["dark","white"]"#);
        let back: Stack = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stack);
    }
}
