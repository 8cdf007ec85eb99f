use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h2 { class: "auth-card__title", "Welcome" }
                div {
                    class: "home-links",
                    Link { to: Route::Register {}, class: "submit-button", "Create Account" }
                    Link { to: Route::Login {}, class: "auth-card__link", "Login" }
                }
            }
        }
    }
}
