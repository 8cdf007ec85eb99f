//! Landing point after registration. Sign-in itself is served by the
//! authentication backend; this view only links back to registration.

use dioxus::prelude::*;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { class: "auth-card__title", "Login" }
                p {
                    class: "auth-card__footer",
                    "Need an account? "
                    Link { to: Route::Register {}, class: "auth-card__link", "Register" }
                }
            }
        }
    }
}
