//! Frontend configuration module
//!
//! Values are read when the bundle is built (`trunk build`), since a browser
//! bundle has no process environment at run time.

use log::LevelFilter;
use shared::config::ContentSourceConfig;
use std::str::FromStr;

/// Frontend configuration for the content source and logging
#[derive(Clone)]
pub struct FrontendConfig {
    /// Photo-works list endpoint (`CONTENT_ENDPOINT`)
    pub content_endpoint: Option<String>,
    /// Access key for the endpoint (`CONTENT_API_KEY`)
    pub content_api_key: Option<String>,
    /// Console log level (`LINKBIO_LOG_LEVEL`)
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            content_endpoint: option_env!("CONTENT_ENDPOINT").map(str::to_string),
            content_api_key: option_env!("CONTENT_API_KEY").map(str::to_string),
            log_level: option_env!("LINKBIO_LOG_LEVEL")
                .unwrap_or("info")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings handed to the photo-works client
    pub fn content_source(&self) -> ContentSourceConfig {
        ContentSourceConfig::new(
            self.content_endpoint.clone(),
            self.content_api_key.clone(),
        )
    }

    /// Parsed log level; unknown values fall back to `info`
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

impl std::fmt::Debug for FrontendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrontendConfig")
            .field("content_endpoint", &self.content_endpoint)
            .field(
                "content_api_key",
                &self.content_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: Option<&str>, key: Option<&str>, level: &str) -> FrontendConfig {
        FrontendConfig {
            content_endpoint: endpoint.map(str::to_string),
            content_api_key: key.map(str::to_string),
            log_level: level.to_string(),
        }
    }

    #[test]
    fn test_frontend_config_content_source() {
        let complete = config(Some("https://demo.microcms.io/api/v1/photoworks"), Some("k"), "info");
        assert!(complete.content_source().is_complete());

        let missing = config(Some("https://demo.microcms.io/api/v1/photoworks"), None, "info");
        assert!(!missing.content_source().is_complete());
    }

    #[test]
    fn test_frontend_config_log_level() {
        assert_eq!(config(None, None, "debug").log_level_filter(), LevelFilter::Debug);
        assert_eq!(config(None, None, " WARN ").log_level_filter(), LevelFilter::Warn);
        assert_eq!(config(None, None, "loud").log_level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.content_endpoint, config2.content_endpoint);
        assert_eq!(config1.log_level, config2.log_level);
    }

    #[test]
    fn test_frontend_config_debug() {
        let config = config(Some("https://x"), Some("secret"), "info");
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("content_endpoint"));
        assert!(!debug_str.contains("secret"));
    }
}
