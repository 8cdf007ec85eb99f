//! # API crate — client side of the registration backend
//!
//! Everything the registration frontend needs to talk to the external
//! authentication service lives here, independent of any UI framework.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`AuthBackend`] trait plus its HTTP ([`HttpBackend`]) and in-memory ([`MemoryBackend`]) implementations |
//! | [`config`] | [`ApiConfig`]: resolves `API_BASE_URL` and builds endpoint URLs |
//! | [`error`] | [`ApiError`], the single error type returned by this crate |
//! | [`models`] | Wire types: [`Department`], [`RegisterRequest`], [`Role`] |
//!
//! ## Endpoints consumed
//!
//! - `GET {API_BASE_URL}/api/department` — list of departments
//! - `POST {API_BASE_URL}/api/auth/register` — create an account

pub mod backend;
pub mod config;
pub mod error;
pub mod models;

pub use backend::{AuthBackend, HttpBackend, MemoryBackend};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Department, RegisterRequest, Role};
