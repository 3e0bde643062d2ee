//! Bottom control bar: the two part buttons plus finish and clear.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdSave, LdTrash2};
use oreo_stack::Part;

/// Props for the [`Controls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ControlsProps {
    /// Called with the part whose button was pressed.
    on_add: EventHandler<Part>,
    /// Called when "Pronto" is pressed.
    on_finish: EventHandler<()>,
    /// Called when "Limpar" is pressed.
    on_clear: EventHandler<()>,
}

/// The fixed control bar at the bottom of the page.
#[component]
pub fn Controls(props: ControlsProps) -> Element {
    rsx! {
        div { class: "controls",
            div { class: "controls-row",
                for part in Part::ALL {
                    button {
                        key: "{part}",
                        class: if part == Part::Dark { "part-button dark" } else { "part-button white" },
                        aria_label: part.button_label(),
                        onclick: move |_| props.on_add.call(part),
                        "{part}"
                    }
                }
            }
            div { class: "controls-row",
                button {
                    class: "action-button finish",
                    aria_label: "Finish Oreo",
                    onclick: move |_| props.on_finish.call(()),
                    Icon { width: 18, height: 18, icon: LdSave }
                    "Pronto"
                }
                button {
                    class: "action-button clear",
                    aria_label: "Clear Oreo",
                    onclick: move |_| props.on_clear.call(()),
                    Icon { width: 18, height: 18, icon: LdTrash2 }
                    "Limpar"
                }
            }
        }
    }
}
