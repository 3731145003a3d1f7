use thiserror::Error;

/// Message shown for every fetch failure, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch photo works";

/// A required setting of the content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Endpoint,
    ApiKey,
}

impl ConfigKey {
    /// Name of the environment variable supplying this setting.
    #[must_use]
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Endpoint => "CONTENT_ENDPOINT",
            Self::ApiKey => "CONTENT_API_KEY",
        }
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::Endpoint => "Content endpoint",
            Self::ApiKey => "Content API key",
        }
    }
}

/// Errors raised while reading photo works. Both kinds are recoverable: they
/// end up as a message in the gallery section and nowhere else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A required setting is absent or blank. Raised before any network call.
    #[error("{} is not set ({})", .key.describe(), .key.env_var())]
    ConfigurationMissing { key: ConfigKey },

    /// The request failed, returned a non-success status, or carried a body
    /// without a `contents` list. `detail` is for the log only.
    #[error("{}", FETCH_FAILED_MESSAGE)]
    FetchFailed { status: Option<u16>, detail: String },
}

impl ContentError {
    /// Shorthand for a transport or decode failure with no HTTP status.
    pub fn fetch(detail: impl Into<String>) -> Self {
        Self::FetchFailed {
            status: None,
            detail: detail.into(),
        }
    }

    /// Shorthand for a non-success HTTP status.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::FetchFailed {
            status: Some(status),
            detail: format!("unexpected status {status}"),
        }
    }
}

impl From<reqwest::Error> for ContentError {
    fn from(error: reqwest::Error) -> Self {
        Self::FetchFailed {
            status: error.status().map(|status| status.as_u16()),
            detail: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(error: serde_json::Error) -> Self {
        Self::fetch(format!("invalid response body: {error}"))
    }
}
