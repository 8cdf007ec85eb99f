//! Dismissible error banner pinned to the top of the viewport.

use dioxus::prelude::*;

/// Shows `message` with a Dismiss button. Renders nothing for `None` or an
/// empty message; the parent owns the message and clears it in `on_dismiss`.
#[component]
pub fn ErrorBanner(
    #[props(!optional)] message: Option<String>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let Some(message) = message.filter(|m| !m.is_empty()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            div {
                class: "error-banner__body",
                span { "{message}" }
                button {
                    class: "error-banner__dismiss",
                    r#type: "button",
                    onclick: move |_| on_dismiss.call(()),
                    "Dismiss"
                }
            }
        }
    }
}
