//! Mapping from stack positions to the artwork drawn there.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::part::Part;

/// One of the three pieces of layer artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetRef {
    /// Cookie seen from above, with the embossed face. Only ever used
    /// for the first layer.
    TopDark,
    /// Plain cookie used for every other dark layer.
    BottomDark,
    /// Cream filling.
    Filling,
}

impl AssetRef {
    /// All assets, for preloading or iterating.
    pub const ALL: [Self; 3] = [Self::TopDark, Self::BottomDark, Self::Filling];

    /// Stable file stem of the asset.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::TopDark => "top_oreo",
            Self::BottomDark => "bottom_oreo",
            Self::Filling => "oreo_filling",
        }
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// Choose the asset drawn for `part` at `position` in a stack of
/// `length` parts.
///
/// A dark part at position 0 gets [`AssetRef::TopDark`]; every other
/// dark part gets [`AssetRef::BottomDark`], including the last one.
/// The terminal cookie is intentionally not distinguished from interior
/// cookies. White parts always get [`AssetRef::Filling`].
///
/// `length` is accepted so callers can pass the full context of the
/// position; it does not currently change the result.
///
/// # Examples
///
/// ```
/// use oreo_stack::{AssetRef, Part, image_for};
///
/// assert_eq!(image_for(0, Part::Dark, 3), AssetRef::TopDark);
/// assert_eq!(image_for(2, Part::Dark, 3), AssetRef::BottomDark);
/// assert_eq!(image_for(1, Part::White, 3), AssetRef::Filling);
/// ```
#[must_use]
pub const fn image_for(position: usize, part: Part, length: usize) -> AssetRef {
    let _ = length;
    match part {
        Part::Dark if position == 0 => AssetRef::TopDark,
        Part::Dark => AssetRef::BottomDark,
        Part::White => AssetRef::Filling,
    }
}

/// The asset drawn at each position of `parts`, top first.
#[must_use]
pub fn images_for(parts: &[Part]) -> Vec<AssetRef> {
    let len = parts.len();
    parts
        .iter()
        .enumerate()
        .map(|(i, &part)| image_for(i, part, len))
        .collect()
}
