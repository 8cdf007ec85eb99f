//! # Registration flow — state and transitions behind the sign-up form
//!
//! Everything here is plain Rust so the flow can be driven without a renderer.
//! [`crate::RegistrationForm`] keeps one [`FormState`] and one
//! [`SubmissionStatus`] in signals and calls into this module on every event.
//!
//! ## Submission state machine
//!
//! ```text
//! Idle --submit--> Submitting --success--> Idle (navigated away)
//!                  Submitting --failure--> Idle (error shown)
//! ```
//!
//! [`SubmissionStatus::begin`] refuses to start while a request is in flight,
//! so a double submit never issues two requests. There is no retry and no
//! cancellation; the user resubmits after a failure.
//!
//! ## Departments
//!
//! [`load_departments`] swallows failures into an empty list (logged only),
//! and [`department_options`] always leads with the "Select Department"
//! placeholder.

use api::{AuthBackend, Department, RegisterRequest, Role};

/// The one message shown for any registration failure.
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Label of the empty leading department option.
pub const DEPARTMENT_PLACEHOLDER: &str = "Select Department";

/// Text inputs of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
    ];

    /// DOM id, also the `for` target of the label.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::FirstName | Field::LastName => "text",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// User-entered values, updated on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub department_id: String,
    pub role: Role,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }

    /// Presence check mirroring the `required` attributes. No format checks.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|field| !self.get(*field).is_empty())
            && !self.department_id.is_empty()
    }

    /// Build the create-account body.
    ///
    /// The role is always [`Role::Student`]; the selector's value is not sent.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: Role::Student,
            department_id: self.department_id.clone(),
        }
    }
}

/// Result of one registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered,
    Failed,
}

/// Coarse view of [`SubmissionStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Failed,
}

/// In-flight flag and the error banner message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SubmissionStatus {
    /// Enter `Submitting`. Returns `false`, changing nothing, if a request is
    /// already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Leave `Submitting`, whatever the outcome.
    pub fn settle(&mut self, outcome: SubmitOutcome) {
        self.is_loading = false;
        if outcome == SubmitOutcome::Failed {
            self.error = Some(REGISTRATION_FAILED.to_string());
        }
    }

    /// Clear the banner.
    pub fn dismiss(&mut self) {
        self.error = None;
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Failed
        } else {
            Phase::Idle
        }
    }
}

/// One `<option>` of a select element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Placeholder followed by `departments` in the order given.
pub fn department_options(departments: &[Department]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: DEPARTMENT_PLACEHOLDER.to_string(),
    })
    .chain(departments.iter().map(|department| SelectOption {
        value: department.id.clone(),
        label: department.name.clone(),
    }))
    .collect()
}

/// Fetch departments, degrading to an empty list on failure.
pub async fn load_departments<B: AuthBackend>(backend: &B) -> Vec<Department> {
    match backend.list_departments().await {
        Ok(departments) => departments,
        Err(e) => {
            tracing::error!("Error fetching departments: {}", e);
            Vec::new()
        }
    }
}

/// Send one registration request. Error details are logged, never surfaced.
pub async fn submit_registration<B: AuthBackend>(
    backend: &B,
    request: RegisterRequest,
) -> SubmitOutcome {
    match backend.register(&request).await {
        Ok(()) => {
            tracing::info!("Registration accepted");
            SubmitOutcome::Registered
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::MemoryBackend;

    fn departments() -> Vec<Department> {
        vec![
            Department::new("d-phy", "Physics"),
            Department::new("d-art", "Art"),
            Department::new("d-bio", "Biology"),
        ]
    }

    fn filled_form() -> FormState {
        FormState {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
            department_id: "d-art".to_string(),
            role: Role::Student,
        }
    }

    /// Runs the same sequence the submit handler does.
    async fn submit(
        backend: &MemoryBackend,
        form: &FormState,
        status: &mut SubmissionStatus,
    ) -> Option<SubmitOutcome> {
        if !form.is_complete() || !status.begin() {
            return None;
        }
        let outcome = submit_registration(backend, form.to_request()).await;
        status.settle(outcome);
        Some(outcome)
    }

    #[tokio::test]
    async fn test_options_follow_server_order_after_placeholder() {
        let backend = MemoryBackend::new(departments());

        let options = department_options(&load_departments(&backend).await);

        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Select Department", "Physics", "Art", "Biology"]);
        assert_eq!(options[0].value, "");
        assert_eq!(options[2].value, "d-art");
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_only_placeholder() {
        let backend = MemoryBackend::new(departments()).fail_departments();

        let loaded = load_departments(&backend).await;
        assert!(loaded.is_empty());

        let options = department_options(&loaded);
        assert_eq!(
            options,
            vec![SelectOption {
                value: String::new(),
                label: DEPARTMENT_PLACEHOLDER.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_submit_posts_once_with_student_role_even_if_teacher_selected() {
        let backend = MemoryBackend::new(departments());
        let form = FormState {
            role: Role::Teacher,
            ..filled_form()
        };
        let mut status = SubmissionStatus::default();

        submit(&backend, &form, &mut status).await;

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].role, Role::Student);
        assert_eq!(requests[0].first_name, "Ada");
        assert_eq!(requests[0].department_id, "d-art");
        assert_eq!(form.role, Role::Teacher);
    }

    #[tokio::test]
    async fn test_success_clears_loading() {
        let backend = MemoryBackend::new(departments());
        let mut status = SubmissionStatus::default();

        let outcome = submit(&backend, &filled_form(), &mut status).await;

        assert_eq!(outcome, Some(SubmitOutcome::Registered));
        assert!(!status.is_loading);
        assert!(status.submit_enabled());
        assert_eq!(status.error, None);
        assert_eq!(status.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_failure_shows_generic_message() {
        let backend = MemoryBackend::new(departments()).reject_registrations("duplicate email");
        let mut status = SubmissionStatus::default();

        let outcome = submit(&backend, &filled_form(), &mut status).await;

        assert_eq!(outcome, Some(SubmitOutcome::Failed));
        assert!(!status.is_loading);
        assert_eq!(status.error.as_deref(), Some(REGISTRATION_FAILED));
        assert_eq!(status.phase(), Phase::Failed);
    }

    #[tokio::test]
    async fn test_dismiss_keeps_form_values() {
        let backend = MemoryBackend::default().reject_registrations("down");
        let form = filled_form();
        let before = form.clone();
        let mut status = SubmissionStatus::default();

        submit(&backend, &form, &mut status).await;
        assert!(status.error.is_some());

        status.dismiss();

        assert_eq!(status.error, None);
        assert_eq!(form, before);
    }

    #[test]
    fn test_resubmit_after_failure_clears_banner_first() {
        let mut status = SubmissionStatus {
            is_loading: false,
            error: Some(REGISTRATION_FAILED.to_string()),
        };

        assert!(status.begin());
        assert_eq!(status.error, None);
        assert_eq!(status.phase(), Phase::Submitting);
    }

    #[tokio::test]
    async fn test_incomplete_form_sends_nothing() {
        let backend = MemoryBackend::new(departments());
        let mut status = SubmissionStatus::default();
        let form = FormState {
            department_id: String::new(),
            ..filled_form()
        };

        assert_eq!(submit(&backend, &form, &mut status).await, None);
        assert!(backend.requests().is_empty());
        assert!(!status.is_loading);
    }

    #[test]
    fn test_begin_refuses_while_in_flight() {
        let mut status = SubmissionStatus::default();
        assert!(status.begin());
        assert!(!status.submit_enabled());

        assert!(!status.begin());
        assert!(status.is_loading);
    }

    #[test]
    fn test_loading_and_enabled_are_exclusive() {
        let mut status = SubmissionStatus::default();
        assert_ne!(status.is_loading, status.submit_enabled());
        status.begin();
        assert_ne!(status.is_loading, status.submit_enabled());
        status.settle(SubmitOutcome::Failed);
        assert_ne!(status.is_loading, status.submit_enabled());
    }

    #[test]
    fn test_set_routes_to_matching_field() {
        let mut form = FormState::default();
        for field in Field::ALL {
            form.set(field, field.id().to_string());
        }

        assert_eq!(form.first_name, "firstName");
        assert_eq!(form.last_name, "lastName");
        assert_eq!(form.email, "email");
        assert_eq!(form.password, "password");
        assert!(!form.is_complete());
    }
}
