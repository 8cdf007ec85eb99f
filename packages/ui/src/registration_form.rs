//! The sign-up form component.

use api::Role;
use dioxus::prelude::*;

use crate::backend::use_backend;
use crate::error_banner::ErrorBanner;
use crate::fields::{DepartmentSelect, FormField, RoleSelect, Spinner};
use crate::registration::{
    department_options, load_departments, submit_registration, Field, FormState, Phase,
    SubmissionStatus, SubmitOutcome,
};

/// Registration form bound to the backend from [`crate::BackendProvider`].
///
/// Departments are fetched once on mount. `on_registered` fires after the
/// backend accepts the account; navigation is up to the caller.
#[component]
pub fn RegistrationForm(on_registered: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut form_state = use_signal(FormState::default);
    let mut status = use_signal(SubmissionStatus::default);

    let departments = use_resource({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move { load_departments(&backend).await }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if !form_state.read().is_complete() {
            tracing::debug!("Submit ignored: required fields missing");
            return;
        }
        if !status.write().begin() {
            tracing::debug!("Submit ignored: registration already in flight");
            return;
        }

        let request = form_state.read().to_request();
        let backend = backend.clone();
        spawn(async move {
            let outcome = submit_registration(&backend, request).await;
            status.write().settle(outcome);
            if outcome == SubmitOutcome::Registered {
                on_registered.call(());
            }
        });
    };

    let options = department_options(departments.read().as_deref().unwrap_or(&[]));
    let current = form_state();
    let state = status();
    let submitting = state.phase() == Phase::Submitting;

    rsx! {
        ErrorBanner {
            message: state.error.clone(),
            on_dismiss: move |_| status.write().dismiss(),
        }

        form {
            class: "registration-form",
            onsubmit: handle_submit,

            for field in Field::ALL {
                FormField {
                    field,
                    value: current.get(field).to_string(),
                    oninput: move |value: String| form_state.write().set(field, value),
                }
            }

            RoleSelect {
                value: current.role,
                onchange: move |role: Role| form_state.write().role = role,
            }

            DepartmentSelect {
                value: current.department_id.clone(),
                options,
                onchange: move |id: String| form_state.write().department_id = id,
            }

            button {
                class: "submit-button",
                r#type: "submit",
                disabled: !state.submit_enabled(),
                if submitting {
                    Spinner {}
                } else {
                    "Register"
                }
            }
        }
    }
}
