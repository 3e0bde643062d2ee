//! Dioxus UI components for the oreo builder.
//!
//! Provides the tower view, the bottom control bar, and the summary
//! dialog with the downloadable polaroid card.

mod controls;
mod summary;
mod tower;

pub use controls::Controls;
pub use summary::SummaryDialog;
pub use tower::TowerView;

/// Markup for an inline SVG, or nothing if the layout was rejected.
fn rendered_or_logged(svg: Result<String, oreo_export::LayoutError>) -> String {
    svg.unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("layout rejected: {e}").into());
        String::new()
    })
}
