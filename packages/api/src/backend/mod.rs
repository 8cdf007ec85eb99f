//! # Backend seam
//!
//! [`AuthBackend`] is the async interface the registration flow is written
//! against. Two implementations live in sibling modules:
//!
//! - [`HttpBackend`] — talks to the real service with `reqwest` (native and WASM).
//! - [`MemoryBackend`] — scripted in-memory responses that record every request.

mod http;
mod memory;

pub use http::HttpBackend;
pub use memory::MemoryBackend;

use crate::error::ApiError;
use crate::models::{Department, RegisterRequest};

/// Async operations the registration page needs from the service.
pub trait AuthBackend {
    /// Fetch every selectable department, in server order.
    fn list_departments(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Department>, ApiError>>;

    /// Create an account. Any non-success response is an error.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
