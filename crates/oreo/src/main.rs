use std::rc::Rc;

use dioxus::prelude::*;
use oreo_io::{Controls, CueBank, SummaryDialog, TowerView, analytics};
use oreo_stack::{FeedbackConfig, Part, Stack, plan_finish};

fn main() {
    dioxus::launch(app);
}

/// Feedback settings, falling back to the defaults if they don't
/// validate.
fn feedback_config() -> FeedbackConfig {
    FeedbackConfig::default().validated().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("invalid feedback config, using defaults: {e}").into());
        FeedbackConfig::default()
    })
}

/// Root application component.
///
/// Owns the tower, the audio cues and the dialog state, and wires them
/// to the tower view, the control bar and the summary dialog.
fn app() -> Element {
    // --- Application state ---
    let mut stack = use_signal(Stack::new);
    let mut summary_open = use_signal(|| false);
    let config = use_hook(feedback_config);
    let cues = use_hook(|| Rc::new(CueBank::load(&config.sources)));

    // --- Part buttons: append and play the part's cue ---
    let on_add = {
        let cues = Rc::clone(&cues);
        move |part: Part| {
            stack.write().append(part);
            cues.play_now(part.cue());
        }
    };

    // --- Finish: open the summary and play the tower back ---
    let on_finish = {
        let cues = Rc::clone(&cues);
        move |()| {
            summary_open.set(true);
            let plan = plan_finish(stack.read().parts(), &config);
            cues.play_plan(&plan);
            analytics::track_finish();
        }
    };

    let on_clear = move |()| stack.write().clear();

    let parts = stack.read().parts().to_vec();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/oreo.css") }

        div { class: "page",
            header { class: "header",
                h1 { class: "title", "Monte sua Oreo!" }
                p { class: "credit",
                    "Feito com "
                    span { role: "img", aria_label: "heart", "❤️" }
                    " por "
                    a {
                        href: "https://eduardev.com/",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "EDUARDEV"
                    }
                }
            }

            main { class: "builder",
                TowerView { parts: parts.clone() }
            }

            Controls {
                on_add: on_add,
                on_finish: on_finish,
                on_clear: on_clear,
            }

            if summary_open() {
                SummaryDialog {
                    parts: parts.clone(),
                    on_close: move |()| summary_open.set(false),
                }
            }
        }
    }
}
