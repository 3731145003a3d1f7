//! # Configuration
//!
//! Settings of the headless content source. Values come from outside the
//! code (build environment for the browser bundle); this module only holds
//! and validates them.

use crate::models::{ConfigKey, ContentError};

/// Endpoint and access key of the photo-works list.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ContentSourceConfig {
    /// List endpoint, e.g. `https://<service>.microcms.io/api/v1/photoworks`.
    pub endpoint: Option<String>,
    /// Value of the `X-API-KEY` header.
    pub api_key: Option<String>,
}

impl ContentSourceConfig {
    /// Creates a configuration from optional values.
    pub fn new(endpoint: Option<impl Into<String>>, api_key: Option<impl Into<String>>) -> Self {
        Self {
            endpoint: endpoint.map(Into::into),
            api_key: api_key.map(Into::into),
        }
    }

    /// Returns `(endpoint, api_key)` once both are present.
    ///
    /// # Errors
    /// Returns [`ContentError::ConfigurationMissing`] naming the first absent
    /// setting; blank values count as absent and the endpoint is checked first.
    pub fn validate(&self) -> Result<(&str, &str), ContentError> {
        let endpoint = present(self.endpoint.as_deref()).ok_or(ContentError::ConfigurationMissing {
            key: ConfigKey::Endpoint,
        })?;
        let api_key = present(self.api_key.as_deref()).ok_or(ContentError::ConfigurationMissing {
            key: ConfigKey::ApiKey,
        })?;
        Ok((endpoint, api_key))
    }

    /// Whether [`Self::validate`] would succeed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

impl std::fmt::Debug for ContentSourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentSourceConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
