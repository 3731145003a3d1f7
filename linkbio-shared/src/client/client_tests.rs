//! # Photo-works client tests
//!
//! Exercises the fetch contract against a recording transport: request
//! shape, configuration short-circuit, status handling, and the
//! once-per-page guard.

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::cell::RefCell;

    use crate::client::{
        API_KEY_HEADER, ContentRequest, ContentTransport, PhotoWorksClient, TransportResponse,
    };
    use crate::config::ContentSourceConfig;
    use crate::models::errors::FETCH_FAILED_MESSAGE;
    use crate::models::{
        ConfigKey, ContentError, FetchState, PhotoWorkId, ProfileAction, ProfileState,
    };

    const ENDPOINT: &str = "https://demo.microcms.io/api/v1/photoworks";
    const SINGLE_WORK: &str = r#"{"contents": [{"id":"1","title":"A","URL":"http://x","photo":{"url":"http://img"}}]}"#;

    /// Returns a canned response and records every request it is given.
    struct RecordingTransport {
        response: Result<TransportResponse, ContentError>,
        requests: RefCell<Vec<ContentRequest>>,
    }

    impl RecordingTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                response: Ok(TransportResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn failing(detail: &str) -> Self {
            Self {
                response: Err(ContentError::fetch(detail)),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ContentTransport for RecordingTransport {
        async fn send(&self, request: ContentRequest) -> Result<TransportResponse, ContentError> {
            self.requests.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn configured(transport: RecordingTransport) -> PhotoWorksClient<RecordingTransport> {
        PhotoWorksClient::with_transport(
            ContentSourceConfig::new(Some(ENDPOINT), Some("secret-key")),
            transport,
        )
    }

    #[test]
    fn test_request_shape() {
        let client = configured(RecordingTransport::replying(200, SINGLE_WORK));
        let request = client.request().unwrap();

        assert_eq!(request.url, ENDPOINT);
        assert_eq!(request.header(API_KEY_HEADER), Some("secret-key"));
        assert_eq!(request.header("x-api-key"), Some("secret-key"));
        assert_eq!(request.header("Cache-Control"), Some("no-store"));
        assert_eq!(request.header("Pragma"), Some("no-cache"));
    }

    #[test]
    fn test_request_debug_hides_key() {
        let client = configured(RecordingTransport::replying(200, SINGLE_WORK));
        let debug = format!("{:?}", client.request().unwrap());
        assert!(debug.contains(ENDPOINT));
        assert!(!debug.contains("secret-key"));
    }

    #[tokio::test]
    async fn test_success_yields_contents() {
        let client = configured(RecordingTransport::replying(200, SINGLE_WORK));
        let works = client.fetch_photo_works().await.unwrap();

        assert_eq!(client.transport().calls(), 1);
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].id, Some(PhotoWorkId::Text("1".to_string())));
        assert_eq!(works[0].title, "A");
        assert_eq!(works[0].url, "http://x");
        assert_eq!(works[0].image_url(), Some("http://img"));
        assert_eq!(works[0].subtitle(), None);
    }

    #[tokio::test]
    async fn test_list_envelope_metadata_is_accepted() {
        let body = r#"{"contents": [{"id":"1","title":"A","URL":"http://x","photo":{}}], "totalCount": 1, "offset": 0, "limit": 10}"#;
        let client = configured(RecordingTransport::replying(200, body));
        let works = client.fetch_photo_works().await.unwrap();

        assert_eq!(works.len(), 1);
        assert_eq!(works[0].image_url(), None);
    }

    #[tokio::test]
    async fn test_missing_configuration_never_sends() {
        let configs = [
            ContentSourceConfig::default(),
            ContentSourceConfig::new(Some(ENDPOINT), None::<String>),
            ContentSourceConfig::new(None::<String>, Some("secret-key")),
            ContentSourceConfig::new(Some(""), Some("")),
        ];

        for config in configs {
            let client = PhotoWorksClient::with_transport(
                config,
                RecordingTransport::replying(200, SINGLE_WORK),
            );
            let error = client.fetch_photo_works().await.unwrap_err();

            assert!(matches!(error, ContentError::ConfigurationMissing { .. }));
            assert_eq!(client.transport().calls(), 0);

            let state = FetchState::Loading.settle(Err(error));
            assert!(state.error().is_some());
        }
    }

    #[tokio::test]
    async fn test_missing_key_message() {
        let client = PhotoWorksClient::with_transport(
            ContentSourceConfig::new(Some(ENDPOINT), None::<String>),
            RecordingTransport::replying(200, SINGLE_WORK),
        );
        assert_eq!(
            client.fetch_photo_works().await,
            Err(ContentError::ConfigurationMissing {
                key: ConfigKey::ApiKey
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        for status in [301, 401, 404, 500, 503] {
            let client = configured(RecordingTransport::replying(status, SINGLE_WORK));
            let error = client.fetch_photo_works().await.unwrap_err();

            assert!(matches!(
                error,
                ContentError::FetchFailed { status: Some(code), .. } if code == status
            ));
            let state = FetchState::Loading.settle(Err(error));
            assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
            assert!(state.photo_works().is_empty());
        }
    }

    #[tokio::test]
    async fn test_network_failure() {
        let client = configured(RecordingTransport::failing("connection refused"));
        let error = client.fetch_photo_works().await.unwrap_err();

        assert_eq!(client.transport().calls(), 1);
        assert_eq!(error.to_string(), FETCH_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_body_without_contents_fails() {
        let client = configured(RecordingTransport::replying(200, r#"{"items": []}"#));
        assert!(matches!(
            client.fetch_photo_works().await,
            Err(ContentError::FetchFailed { status: None, .. })
        ));

        let client = configured(RecordingTransport::replying(200, "<html></html>"));
        assert!(client.fetch_photo_works().await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_once_ignores_repeats_and_toggles() {
        let client = configured(RecordingTransport::replying(200, SINGLE_WORK));
        let mut state = ProfileState::default();

        let outcome = client.fetch_once().await.unwrap();
        for _ in 0..4 {
            state = state.apply(ProfileAction::ToggleLocale);
            assert!(client.fetch_once().await.is_none());
        }
        state = state.apply(ProfileAction::PhotoWorksSettled(outcome));

        assert!(client.is_issued());
        assert_eq!(client.transport().calls(), 1);
        assert_eq!(state.photo_works.photo_works().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_once_counts_configuration_failures() {
        let client = PhotoWorksClient::with_transport(
            ContentSourceConfig::default(),
            RecordingTransport::replying(200, SINGLE_WORK),
        );

        assert!(matches!(client.fetch_once().await, Some(Err(_))));
        assert!(client.fetch_once().await.is_none());
        assert_eq!(client.transport().calls(), 0);
    }
}
