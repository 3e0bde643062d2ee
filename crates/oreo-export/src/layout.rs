//! Tower and polaroid geometry.
//!
//! Layers overlap vertically: each one is drawn `layer_height - overlap`
//! pixels below the previous one, and earlier layers are painted over
//! later ones so the first part reads as the top of the tower.
//!
//! All coordinates are whole pixels. Totals are `u64` so arbitrarily
//! tall towers cannot overflow.

use serde::{Deserialize, Serialize};

/// Errors from constructing a [`LayoutConfig`] or laying out with an
/// invalid one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Layers must be at least one pixel wide.
    #[error("layer width must be positive")]
    ZeroWidth,

    /// Layers must be at least one pixel tall.
    #[error("layer height must be positive")]
    ZeroHeight,

    /// Every layer must stick out below the previous one.
    #[error("overlap {overlap} must be less than layer height {layer_height}")]
    OverlapTooLarge {
        /// Requested overlap.
        overlap: u32,
        /// Requested layer height.
        layer_height: u32,
    },
}

/// Size of one layer and how much consecutive layers overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Drawn width of every layer.
    pub layer_width: u32,
    /// Drawn height of every layer.
    pub layer_height: u32,
    /// Pixels each layer is pulled up under the one above it.
    pub overlap: u32,
}

impl LayoutConfig {
    /// Full-size tower in the builder view.
    pub const BUILDER: Self = Self {
        layer_width: 160,
        layer_height: 100,
        overlap: 64,
    };

    /// Half-size tower inside the polaroid card.
    pub const POLAROID: Self = Self {
        layer_width: 80,
        layer_height: 50,
        overlap: 32,
    };

    /// Create a validated layout configuration.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub const fn try_new(
        layer_width: u32,
        layer_height: u32,
        overlap: u32,
    ) -> Result<Self, LayoutError> {
        let config = Self {
            layer_width,
            layer_height,
            overlap,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Check the geometry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ZeroWidth`] or [`LayoutError::ZeroHeight`]
    /// for empty layers, and [`LayoutError::OverlapTooLarge`] if
    /// `overlap >= layer_height`.
    pub const fn validate(&self) -> Result<(), LayoutError> {
        if self.layer_width == 0 {
            return Err(LayoutError::ZeroWidth);
        }
        if self.layer_height == 0 {
            return Err(LayoutError::ZeroHeight);
        }
        if self.overlap >= self.layer_height {
            return Err(LayoutError::OverlapTooLarge {
                overlap: self.overlap,
                layer_height: self.layer_height,
            });
        }
        Ok(())
    }

    /// Vertical distance between the tops of consecutive layers.
    #[must_use]
    pub const fn step(&self) -> u32 {
        self.layer_height.saturating_sub(self.overlap)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::BUILDER
    }
}

fn to_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

/// Positions of the layers of a tower with `len` parts.
///
/// Only built from a validated [`LayoutConfig`], so consecutive layers
/// always advance by at least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackLayout {
    len: usize,
    config: LayoutConfig,
}

impl StackLayout {
    /// Lay out `len` layers.
    ///
    /// # Errors
    ///
    /// Returns the [`LayoutError`] from [`LayoutConfig::validate`].
    pub const fn new(len: usize, config: &LayoutConfig) -> Result<Self, LayoutError> {
        match config.validate() {
            Ok(()) => Ok(Self {
                len,
                config: *config,
            }),
            Err(e) => Err(e),
        }
    }

    /// Number of layers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no layers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The configuration this layout was built with.
    #[must_use]
    pub const fn config(&self) -> LayoutConfig {
        self.config
    }

    /// Top edge of layer `index`, relative to the top of the tower.
    #[must_use]
    pub fn layer_y(&self, index: usize) -> u64 {
        to_u64(index).saturating_mul(u64::from(self.config.step()))
    }

    /// Width of the tower.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.config.layer_width
    }

    /// Height of the tower; 0 when empty.
    #[must_use]
    pub fn height(&self) -> u64 {
        if self.len == 0 {
            return 0;
        }
        self.layer_y(self.len - 1)
            .saturating_add(u64::from(self.config.layer_height))
    }

    /// Layer indices in the order they must be painted: last first, so
    /// that layer 0 ends up on top.
    pub fn paint_order(&self) -> impl Iterator<Item = usize> + use<> {
        (0..self.len).rev()
    }
}

/// Break `title` into lines of at most `chars_per_line` characters,
/// breaking anywhere (titles have no spaces), and keep at most
/// `max_lines` lines. When lines are dropped the last kept line ends
/// with `…`.
///
/// # Examples
///
/// ```
/// use oreo_export::wrap_title;
///
/// assert_eq!(wrap_title("OREOREO", 3, 3), vec!["ORE", "ORE", "O"]);
/// assert_eq!(wrap_title("OREOREOREO", 4, 2), vec!["OREO", "REO…"]);
/// ```
#[must_use]
pub fn wrap_title(title: &str, chars_per_line: usize, max_lines: usize) -> Vec<String> {
    if max_lines == 0 {
        return Vec::new();
    }
    let per_line = chars_per_line.max(1);
    let chars: Vec<char> = title.chars().collect();
    let mut lines: Vec<String> = chars
        .chunks(per_line)
        .map(|chunk| chunk.iter().collect())
        .collect();

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = last
                .chars()
                .take(per_line - 1)
                .chain(std::iter::once('…'))
                .collect();
        }
    }
    lines
}

/// Appearance of the polaroid card shown in the summary view and
/// exported as an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolaroidStyle {
    /// Geometry of the tower inside the card.
    pub layers: LayoutConfig,
    /// White border around the panel.
    pub frame_padding: u32,
    /// Gray border between the panel edge and the tower.
    pub panel_padding: u32,
    /// Corner radius of the card and the panel.
    pub corner_radius: u32,
    /// Space between the panel and the first title line.
    pub title_gap: u32,
    /// Width reserved for the title.
    pub title_width: u32,
    /// Title font size.
    pub font_size: u32,
    /// Distance between title baselines.
    pub line_height: u32,
    /// Characters that fit on one title line.
    pub chars_per_line: usize,
    /// Title lines shown before clamping with an ellipsis.
    pub max_title_lines: usize,
    /// CSS font family of the title.
    pub font_family: String,
    /// Card color.
    pub frame_color: String,
    /// Panel color.
    pub panel_color: String,
    /// Title color.
    pub text_color: String,
}

impl Default for PolaroidStyle {
    fn default() -> Self {
        Self {
            layers: LayoutConfig::POLAROID,
            frame_padding: 16,
            panel_padding: 40,
            corner_radius: 8,
            title_gap: 28,
            title_width: 320,
            font_size: 16,
            line_height: 19,
            chars_per_line: 32,
            max_title_lines: 3,
            font_family: "Brush Script MT, cursive".into(),
            frame_color: "#ffffff".into(),
            panel_color: "#e5e7eb".into(),
            text_color: "#4b5563".into(),
        }
    }
}

/// Axis-aligned rectangle in card coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: u64,
    /// Top edge.
    pub y: u64,
    /// Width.
    pub width: u64,
    /// Height.
    pub height: u64,
}

impl Rect {
    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u64 {
        self.y + self.height
    }
}

/// Resolved geometry of a polaroid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolaroidLayout {
    /// Card width.
    pub width: u64,
    /// Card height.
    pub height: u64,
    /// Gray panel holding the tower.
    pub panel: Rect,
    /// Tower geometry.
    pub stack: StackLayout,
    /// Left edge of the tower.
    pub stack_x: u64,
    /// Top edge of the tower.
    pub stack_y: u64,
    /// Wrapped and clamped title lines.
    pub title_lines: Vec<String>,
    /// Horizontal centre of the title.
    pub title_x: u64,
    /// Baseline of each title line.
    pub title_baselines: Vec<u64>,
}

impl PolaroidLayout {
    /// Lay out a card for a tower of `len` parts titled `title`.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if `style.layers` is invalid, which can
    /// happen for a deserialized style.
    pub fn new(len: usize, title: &str, style: &PolaroidStyle) -> Result<Self, LayoutError> {
        let frame = u64::from(style.frame_padding);
        let pad = u64::from(style.panel_padding);
        let layer_width = u64::from(style.layers.layer_width);
        let stack = StackLayout::new(len, &style.layers)?;

        let content_width = (layer_width + 2 * pad).max(u64::from(style.title_width));
        let panel = Rect {
            x: frame,
            y: frame,
            width: content_width,
            height: stack.height().saturating_add(2 * pad),
        };

        let title_lines = wrap_title(title, style.chars_per_line, style.max_title_lines);
        let title_top = panel.bottom().saturating_add(u64::from(style.title_gap));
        let line_height = u64::from(style.line_height);
        let title_baselines = (0..title_lines.len())
            .map(|i| title_top + to_u64(i) * line_height + u64::from(style.font_size))
            .collect();
        let title_block = to_u64(title_lines.len()) * line_height;

        Ok(Self {
            width: content_width + 2 * frame,
            height: title_top.saturating_add(title_block).saturating_add(frame),
            panel,
            stack,
            stack_x: frame + (content_width - layer_width) / 2,
            stack_y: frame + pad,
            title_lines,
            title_x: frame + content_width / 2,
            title_baselines,
        })
    }
}
