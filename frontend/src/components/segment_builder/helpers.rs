//! Browser-side collaborators of the segment builder.
//!
//! - **User Feedback**: `ToastSink` renders builder notifications as temporary
//!   "toast" messages injected into the DOM.
//! - **Saving**: `ConsoleSaver` stands in for the segment endpoint and writes
//!   the payload to the browser console.

use common::collaborators::{NotificationLevel, NotificationSink, SegmentSaver};
use common::model::segment::SegmentPayload;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{ERROR_TOAST_BACKGROUND, SUCCESS_TOAST_BACKGROUND, TOAST_DURATION_MS};

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to `<body>` and removes it again after
/// `TOAST_DURATION_MS`. Any missing DOM piece silently skips the toast.
pub fn show_toast(message: &str, level: NotificationLevel) {
    let background = match level {
        NotificationLevel::Error => ERROR_TOAST_BACKGROUND,
        NotificationLevel::Success => SUCCESS_TOAST_BACKGROUND,
    };

    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("top", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Notification sink backed by `show_toast`.
pub struct ToastSink;

impl NotificationSink for ToastSink {
    fn notify(&self, level: NotificationLevel, message: &str) {
        show_toast(message, level);
    }
}

/// Save collaborator that logs the payload as JSON to the browser console.
pub struct ConsoleSaver;

impl SegmentSaver for ConsoleSaver {
    fn save(&self, payload: &SegmentPayload) {
        match serde_json::to_string(payload) {
            Ok(json) => gloo_console::log!("segment saved:", json),
            Err(err) => gloo_console::error!("could not serialize segment:", err.to_string()),
        }
    }
}
