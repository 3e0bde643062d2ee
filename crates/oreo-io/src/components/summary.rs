//! Summary dialog with the polaroid card and its download button.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdX};
use oreo_export::{ExportOutcome, PolaroidStyle, export_png, polaroid_svg};
use oreo_stack::Part;

use crate::analytics;
use crate::download::BrowserSaver;
use crate::raster::BrowserRasterizer;

/// Props for the [`SummaryDialog`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SummaryDialogProps {
    /// Layers of the finished tower, top first.
    parts: Vec<Part>,
    /// Called when the dialog is dismissed.
    on_close: EventHandler<()>,
}

/// Modal showing the finished tower as a polaroid card.
///
/// The card element is captured when it mounts; "Download" rasterizes
/// that element and saves it as `my-oreo.png`. Clicking the backdrop or
/// the close button dismisses the dialog.
#[component]
pub fn SummaryDialog(props: SummaryDialogProps) -> Element {
    let mut card = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut export_error = use_signal(|| Option::<String>::None);

    let svg = super::rendered_or_logged(polaroid_svg(&props.parts, &PolaroidStyle::default()));

    let download_click = move |_| {
        // Not mounted (or not a DOM element): nothing to capture.
        let target = card
            .peek()
            .as_ref()
            .and_then(|mounted| mounted.downcast::<web_sys::Element>().cloned());

        spawn(async move {
            let rasterizer = BrowserRasterizer::new();
            match export_png(target.as_ref(), &rasterizer, &BrowserSaver).await {
                Ok(ExportOutcome::Saved { .. }) => {
                    export_error.set(None);
                    analytics::track_export("png");
                }
                Ok(ExportOutcome::Skipped) => {}
                Err(e) => {
                    web_sys::console::error_1(&format!("export failed: {e}").into());
                    export_error.set(Some(format!("Download failed: {e}")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| props.on_close.call(()),

            div {
                class: "dialog",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "summary-title",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "dialog-close",
                    aria_label: "Close",
                    onclick: move |_| props.on_close.call(()),
                    Icon { width: 18, height: 18, icon: LdX }
                }

                h2 { id: "summary-title", class: "dialog-title", "Sua Oreo ficou assim" }

                div {
                    class: "polaroid",
                    onmounted: move |evt| card.set(Some(evt.data())),
                    dangerous_inner_html: "{svg}",
                }

                if let Some(ref err) = export_error() {
                    p { class: "error", "{err}" }
                }

                button {
                    class: "download-button",
                    onclick: download_click,
                    Icon { width: 18, height: 18, icon: LdDownload }
                    "Download"
                }
            }
        }
    }
}
