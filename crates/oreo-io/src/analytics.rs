//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).
//!
//! Event names follow Simple Analytics conventions: lowercase
//! alphanumeric with underscores, max 200 characters.

use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    debug_assert!(is_valid_event_name(name), "invalid event name: {name:?}");
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

fn is_valid_event_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 200
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}

/// Record that a tower was finished.
pub fn track_finish() {
    track_event("finish_oreo");
}

/// Record a successful download with the given format (e.g., `"png"`).
///
/// Fires an event named `export_<format>` (e.g., `export_png`).
pub fn track_export(format: &str) {
    track_event(&format!("export_{format}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names() {
        assert!(is_valid_event_name("finish_oreo"));
        assert!(is_valid_event_name("export_png"));
        assert!(!is_valid_event_name("export_PNG"));
        assert!(!is_valid_event_name("export-png"));
        assert!(!is_valid_event_name(""));
        assert!(!is_valid_event_name(&"a".repeat(201)));
    }
}
