//! oreo-export: Pure rendering and export for the oreo builder (sans-IO).
//!
//! Lays out a tower, composes it as SVG (the bare tower for the builder
//! view, or the polaroid card for the summary view), encodes bitmaps as
//! PNG, and drives the export of a rendered card to a downloadable file.
//!
//! Rasterizing a live element and saving a file are browser concerns;
//! they plug in through the [`Rasterizer`] and [`FileSaver`] traits and
//! are implemented in `oreo-io`.

pub mod export;
pub mod layout;
pub mod png;
pub mod svg;

pub use export::{
    EXPORT_FILENAME, ExportError, ExportOutcome, FileSaver, PNG_MIME, Rasterizer, export_png,
};
pub use layout::{LayoutConfig, LayoutError, PolaroidLayout, PolaroidStyle, StackLayout, wrap_title};
pub use png::encode_png;
pub use svg::{polaroid_svg, stack_svg};
