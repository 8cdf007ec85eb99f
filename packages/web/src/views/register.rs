//! Registration page view.

use dioxus::prelude::*;
use ui::RegistrationForm;

use crate::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Register page component. Sends the user to the login page once the
/// account is created.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-card",

                div {
                    class: "auth-card__header",
                    Link {
                        to: Route::Home {},
                        class: "auth-card__logo",
                        img { src: LOGO, alt: "Logo" }
                    }
                    h2 { class: "auth-card__title", "Create Account" }
                }

                RegistrationForm {
                    on_registered: move |_| {
                        tracing::info!("Account created, redirecting to login");
                        nav.push(Route::Login {});
                    },
                }

                p {
                    class: "auth-card__footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, class: "auth-card__link", "Login" }
                }
            }
        }
    }
}
