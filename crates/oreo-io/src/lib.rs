//! oreo-io: Browser I/O and Dioxus component library.
//!
//! Plays audio cues, rasterizes the rendered polaroid card through a
//! canvas, triggers Blob downloads, and provides the UI components of
//! the oreo builder web application.

pub mod analytics;
pub mod audio;
pub mod components;
pub mod download;
pub mod raster;

pub use audio::{BrowserTimer, CueBank, CuePlayer, CueTimer, PlaybackError};
pub use components::{Controls, SummaryDialog, TowerView};
pub use download::BrowserSaver;
pub use raster::BrowserRasterizer;
