use reqwest::Client;

use super::AuthBackend;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Department, RegisterRequest};

/// [`AuthBackend`] over HTTP. Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: ApiConfig,
}

impl HttpBackend {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build a backend from `API_BASE_URL`, see [`ApiConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl AuthBackend for HttpBackend {
    async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        let url = self.config.departments_url();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<Vec<Department>>().await?)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.config.register_url();
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(())
    }
}
