//! Runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! the client, rather than read from the environment at request time. The
//! only knob is the base URL of the remote explanation service.

use crate::constants::{DEFAULT_SERVICE_URL, EXPLAIN_PATH, UPLOAD_PATH};
use crate::{PrescriptionError, PrescriptionResult};

/// Service configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// Create a new `ServiceConfig` from a base URL.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended
    /// verbatim. A blank URL is rejected.
    pub fn new(base_url: impl AsRef<str>) -> PrescriptionResult<Self> {
        let trimmed = base_url.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PrescriptionError::InvalidConfig(
                "service base URL cannot be empty".into(),
            ));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_owned(),
        })
    }

    /// Resolve the configuration from an optional environment value.
    ///
    /// `None` or a blank value falls back to [`DEFAULT_SERVICE_URL`].
    pub fn from_env_value(value: Option<String>) -> PrescriptionResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match value {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_SERVICE_URL),
        }
    }

    /// Base URL of the explanation service, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the explanation endpoint.
    pub fn explain_url(&self) -> String {
        format!("{}{}", self.base_url, EXPLAIN_PATH)
    }

    /// Full URL of the image upload endpoint.
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// URL of the service info endpoint (the service root).
    pub fn info_url(&self) -> String {
        format!("{}/", self.base_url)
    }
}
