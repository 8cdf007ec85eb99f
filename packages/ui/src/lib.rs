//! Shared UI for the registration frontend: the framework-independent
//! [`registration`] flow and the Dioxus components that render it.

pub mod registration;
pub use registration::{
    department_options, load_departments, submit_registration, Field, FormState, Phase,
    SelectOption, SubmissionStatus, SubmitOutcome, DEPARTMENT_PLACEHOLDER, REGISTRATION_FAILED,
};

mod backend;
pub use backend::{use_backend, BackendProvider};

mod error_banner;
pub use error_banner::ErrorBanner;

mod fields;
pub use fields::{DepartmentSelect, FormField, RoleSelect, Spinner};

mod registration_form;
pub use registration_form::RegistrationForm;
