//! Backend location, resolved from the `API_BASE_URL` environment variable.

use reqwest::Url;

use crate::error::ApiError;

/// Name of the environment variable holding the backend base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Used on native targets when `API_BASE_URL` is unset or invalid.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the registration backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate `base_url` as an absolute URL without query or fragment.
    /// Trailing slashes are dropped so endpoint paths can be appended verbatim.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "query strings and fragments are not allowed".to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Resolve the configuration for the current platform.
    ///
    /// Native builds read `.env` and the process environment first, then the
    /// value baked in at build time. Browser builds only have the build-time
    /// value and otherwise talk to the page's own origin.
    pub fn from_env() -> Self {
        let candidate = Self::env_value().unwrap_or_else(Self::fallback_base_url);

        match Self::new(&candidate) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}; using {}", e, Self::fallback_base_url());
                Self {
                    base_url: Self::fallback_base_url(),
                }
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn env_value() -> Option<String> {
        dotenvy::dotenv().ok();

        std::env::var(API_BASE_URL_VAR)
            .ok()
            .or_else(|| option_env!("API_BASE_URL").map(str::to_string))
            .filter(|v| !v.trim().is_empty())
    }

    #[cfg(target_arch = "wasm32")]
    fn env_value() -> Option<String> {
        option_env!("API_BASE_URL")
            .map(str::to_string)
            .filter(|v| !v.trim().is_empty())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn fallback_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    #[cfg(target_arch = "wasm32")]
    fn fallback_base_url() -> String {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` endpoint listing departments.
    pub fn departments_url(&self) -> String {
        format!("{}/api/department", self.base_url)
    }

    /// `POST` endpoint creating an account.
    pub fn register_url(&self) -> String {
        format!("{}/api/auth/register", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
