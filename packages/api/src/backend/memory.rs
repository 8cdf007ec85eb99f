use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::AuthBackend;
use crate::error::ApiError;
use crate::models::{Department, RegisterRequest};

#[derive(Debug, Default)]
struct State {
    /// `None` makes `list_departments` fail.
    departments: Option<Vec<Department>>,
    register_failure: Option<String>,
    requests: Vec<RegisterRequest>,
}

/// In-memory [`AuthBackend`] for tests and offline previews.
///
/// Responses are scripted up front; every registration request is recorded,
/// whether it succeeds or not.
#[derive(Clone, Debug)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    /// Backend that serves `departments` and accepts every registration.
    pub fn new(departments: Vec<Department>) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                departments: Some(departments),
                ..State::default()
            })),
        }
    }

    /// Make `list_departments` fail from now on.
    pub fn fail_departments(self) -> Self {
        self.lock().departments = None;
        self
    }

    /// Make `register` fail with `reason` from now on.
    pub fn reject_registrations(self, reason: &str) -> Self {
        self.lock().register_failure = Some(reason.to_string());
        self
    }

    /// Every registration request received so far, oldest first.
    pub fn requests(&self) -> Vec<RegisterRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for MemoryBackend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl AuthBackend for MemoryBackend {
    async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.lock()
            .departments
            .clone()
            .ok_or_else(|| ApiError::Rejected("department listing unavailable".to_string()))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        match &state.register_failure {
            Some(reason) => Err(ApiError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn request(email: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: email.to_string(),
            password: "cobol".to_string(),
            role: Role::Student,
            department_id: "cs".to_string(),
        }
    }

    #[tokio::test]
    async fn test_serves_departments_in_order() {
        let backend = MemoryBackend::new(vec![
            Department::new("b", "Biology"),
            Department::new("a", "Art"),
        ]);

        let departments = backend.list_departments().await.unwrap();
        assert_eq!(departments[0].name, "Biology");
        assert_eq!(departments[1].name, "Art");
    }

    #[tokio::test]
    async fn test_failing_departments() {
        let backend = MemoryBackend::default().fail_departments();
        assert!(matches!(
            backend.list_departments().await,
            Err(ApiError::Rejected(_))
        ));
    }

    #[tokio::test]
    async fn test_records_requests_even_when_rejected() {
        let backend = MemoryBackend::default();
        backend.register(&request("one@example.com")).await.unwrap();

        let backend = backend.reject_registrations("email taken");
        let err = backend.register(&request("two@example.com")).await.unwrap_err();
        assert_eq!(err.to_string(), "rejected: email taken");

        let emails: Vec<_> = backend.requests().into_iter().map(|r| r.email).collect();
        assert_eq!(emails, vec!["one@example.com", "two@example.com"]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let backend = MemoryBackend::default();
        let clone = backend.clone();
        clone.register(&request("shared@example.com")).await.unwrap();

        assert_eq!(backend.requests().len(), 1);
        assert_eq!(backend, clone);
    }
}
