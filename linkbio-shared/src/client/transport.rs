use async_trait::async_trait;
use reqwest::Client;
use std::fmt;

use crate::models::ContentError;

/// Header carrying the access key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// A fully built read request against the content API.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl ContentRequest {
    /// Value of the first header named `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for ContentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<_> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case(API_KEY_HEADER) {
                    (*name, "<redacted>")
                } else {
                    (*name, value.as_str())
                }
            })
            .collect();
        f.debug_struct("ContentRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .finish()
    }
}

/// Status and raw body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a GET for a [`ContentRequest`].
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait ContentTransport {
    /// Sends the request and returns the response, whatever its status.
    ///
    /// # Errors
    /// Returns [`ContentError::FetchFailed`] if no response could be obtained.
    async fn send(&self, request: ContentRequest) -> Result<TransportResponse, ContentError>;
}

/// [`ContentTransport`] backed by `reqwest`, which uses the browser's `fetch`
/// on wasm and hyper elsewhere.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ContentTransport for ReqwestTransport {
    async fn send(&self, request: ContentRequest) -> Result<TransportResponse, ContentError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
