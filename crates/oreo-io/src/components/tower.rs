//! Builder view of the tower under construction.

use dioxus::prelude::*;
use oreo_export::{LayoutConfig, stack_svg};
use oreo_stack::Part;

/// Props for the [`TowerView`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TowerViewProps {
    /// Layers, top first.
    parts: Vec<Part>,
}

/// Renders the tower at full size as inline SVG, top layer first.
#[component]
pub fn TowerView(props: TowerViewProps) -> Element {
    let svg = super::rendered_or_logged(stack_svg(&props.parts, &LayoutConfig::BUILDER));

    rsx! {
        div { class: "tower",
            dangerous_inner_html: "{svg}",
        }
    }
}
