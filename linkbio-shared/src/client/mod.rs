//! # Photo-works client
//!
//! Reads the photo-works list from the headless content API: one GET with the
//! access key in `X-API-KEY`, caches bypassed, `contents` taken from the JSON
//! body.

mod transport;

#[cfg(test)]
mod client_tests;

pub use transport::{
    API_KEY_HEADER, ContentRequest, ContentTransport, ReqwestTransport, TransportResponse,
};

use std::cell::Cell;
use tracing::{debug, info, warn};

use crate::config::ContentSourceConfig;
use crate::models::{ContentError, PhotoWork, PhotoWorksResponse};

/// Client for the photo-works list.
#[derive(Debug)]
pub struct PhotoWorksClient<T = ReqwestTransport> {
    config: ContentSourceConfig,
    transport: T,
    issued: Cell<bool>,
}

impl PhotoWorksClient {
    /// Client using the default `reqwest` transport.
    #[must_use]
    pub fn new(config: ContentSourceConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }
}

impl<T: ContentTransport> PhotoWorksClient<T> {
    /// Client using a custom transport.
    pub fn with_transport(config: ContentSourceConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            issued: Cell::new(false),
        }
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Whether [`Self::fetch_once`] has already been called.
    pub fn is_issued(&self) -> bool {
        self.issued.get()
    }

    /// Builds the GET request for the configured endpoint.
    ///
    /// # Errors
    /// Returns [`ContentError::ConfigurationMissing`] if the endpoint or the
    /// key is absent.
    pub fn request(&self) -> Result<ContentRequest, ContentError> {
        let (endpoint, api_key) = self.config.validate()?;
        Ok(ContentRequest {
            url: endpoint.to_string(),
            headers: vec![
                (API_KEY_HEADER, api_key.to_string()),
                ("Accept", "application/json".to_string()),
                ("Cache-Control", "no-store".to_string()),
                ("Pragma", "no-cache".to_string()),
            ],
        })
    }

    /// Reads the photo-works list.
    ///
    /// Configuration is checked before anything is sent.
    ///
    /// # Errors
    /// [`ContentError::ConfigurationMissing`] for absent settings,
    /// [`ContentError::FetchFailed`] for transport errors, non-2xx statuses and
    /// bodies without a `contents` list.
    pub async fn fetch_photo_works(&self) -> Result<Vec<PhotoWork>, ContentError> {
        let request = self.request().inspect_err(|error| {
            warn!(error = %error, "photo works not requested");
        })?;
        debug!(url = %request.url, "requesting photo works");

        let response = self.transport.send(request).await.inspect_err(|error| {
            log_failure(error);
        })?;
        if !response.is_success() {
            let error = ContentError::status(response.status);
            log_failure(&error);
            return Err(error);
        }

        let body: PhotoWorksResponse = serde_json::from_str(&response.body)
            .map_err(ContentError::from)
            .inspect_err(log_failure)?;
        info!(
            count = body.contents.len(),
            total = ?body.total_count,
            offset = ?body.offset,
            limit = ?body.limit,
            "photo works received"
        );
        Ok(body.contents)
    }

    /// Like [`Self::fetch_photo_works`], but only the first call does
    /// anything. Later calls return `None` without touching the transport.
    pub async fn fetch_once(&self) -> Option<Result<Vec<PhotoWork>, ContentError>> {
        if self.issued.replace(true) {
            warn!("photo works already requested for this page");
            return None;
        }
        Some(self.fetch_photo_works().await)
    }
}

fn log_failure(error: &ContentError) {
    if let ContentError::FetchFailed { status, detail } = error {
        warn!(status = ?status, detail = %detail, "photo works fetch failed");
    }
}
