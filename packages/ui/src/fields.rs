//! Labelled inputs and selects used by the registration form.

use api::Role;
use dioxus::prelude::*;

use crate::registration::{Field, SelectOption};

/// A required text input with its label.
#[component]
pub fn FormField(field: Field, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: field.id(), class: "form-field__label", {field.label()} }
            input {
                id: field.id(),
                class: "form-field__control",
                r#type: field.input_type(),
                value: "{value}",
                required: true,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// Student/Teacher selector.
#[component]
pub fn RoleSelect(value: Role, onchange: EventHandler<Role>) -> Element {
    let handle_change = move |evt: FormEvent| match evt.value().parse::<Role>() {
        Ok(role) => onchange.call(role),
        Err(e) => tracing::warn!("Ignoring role selection: {}", e),
    };

    rsx! {
        div {
            class: "form-field",
            label { r#for: "role", class: "form-field__label", "Role" }
            select {
                id: "role",
                class: "form-field__control",
                required: true,
                value: value.as_str(),
                onchange: handle_change,
                for role in Role::ALL {
                    option {
                        value: role.as_str(),
                        selected: role == value,
                        {role.label()}
                    }
                }
            }
        }
    }
}

/// Department selector. `options` already includes the placeholder.
#[component]
pub fn DepartmentSelect(
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { r#for: "departmentId", class: "form-field__label", "Department" }
            select {
                id: "departmentId",
                class: "form-field__control",
                required: true,
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                for opt in options {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// Circular loading indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
