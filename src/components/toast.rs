//! Toast notification
//!
//! Transient message in the bottom corner. Clicking it dismisses early.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn Toast(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "toast",
            role: "status",
            "aria-live": "polite",
            onclick: move |_| on_dismiss.call(()),
            "{message}"
        }
    }
}
