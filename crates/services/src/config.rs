use std::env;

use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";
pub const BASE_URL_ENV: &str = "QUIZZO_API_BASE_URL";

/// Where the backend REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalise a base URL (trailing slashes are dropped).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` unless the value is an absolute
    /// http(s) URL.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let parsed = Url::parse(trimmed).map_err(|err| ConfigError::InvalidBaseUrl {
            raw: raw.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                raw: raw.to_string(),
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    /// Read `QUIZZO_API_BASE_URL`, falling back to the local development backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set to an invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BASE_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}{path}`; `path` must start with `/`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
