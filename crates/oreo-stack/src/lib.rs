//! oreo-stack: Pure stack model for the oreo builder (sans-IO).
//!
//! Holds the ordered sequence of cookie and filling layers and derives
//! everything the UI needs from it: the asset drawn at each position,
//! the display title, and the audio cue plan played when the user
//! finishes a tower.
//!
//! This crate has **no I/O dependencies**. Rendering and export live
//! in `oreo-export`; audio playback and all browser interaction live in
//! `oreo-io`.

pub mod asset;
pub mod config;
pub mod feedback;
pub mod part;
pub mod stack;
pub mod title;

pub use asset::{AssetRef, image_for, images_for};
pub use config::{ConfigError, CueSources, FeedbackConfig};
pub use feedback::{Cue, CuePlan, ScheduledCue, plan_finish};
pub use part::Part;
pub use stack::Stack;
pub use title::title_for;
