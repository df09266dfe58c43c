use anyhow::Context;
use reqwest::{Client, Url};
use tracing::debug;

use crate::{
    error::FetchError,
    model::{SnapshotEnvelope, WeatherSnapshot},
};

/// Dashboard-side client for the proxy route.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    api_url: Url,
    http: Client,
}

impl ProxyClient {
    pub fn new(api_url: &str) -> anyhow::Result<Self> {
        let api_url = Url::parse(api_url).with_context(|| {
            format!(
                "Invalid proxy API URL '{api_url}'.\n\
                 Hint: run `weather-dashboard configure` and enter the proxy address."
            )
        })?;

        Ok(Self { api_url, http: Client::new() })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Fetch a fresh snapshot for `city`. The snapshot is all-or-nothing: an
    /// error envelope or a payload missing any consumed field is an error.
    pub async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let res = self.http.get(self.api_url.clone()).query(&[("q", city)]).send().await?;

        let status = res.status();
        let body = res.bytes().await?;
        debug!(%status, city, bytes = body.len(), "proxy responded");

        let envelope: SnapshotEnvelope = serde_json::from_slice(&body)?;
        match envelope {
            SnapshotEnvelope { data: Some(snapshot), .. } => Ok(snapshot),
            SnapshotEnvelope { error: Some(message), .. } => Err(FetchError::Upstream(message)),
            _ => Err(FetchError::MissingData),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{UPSTREAM_FAILURE_MESSAGE, fixtures};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ProxyClient {
        ProxyClient::new(&format!("{}/api", server.uri())).expect("mock url")
    }

    #[tokio::test]
    async fn fetch_unwraps_data_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("q", "Ikeja"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": fixtures::snapshot_json(1000, 1) })),
            )
            .mount(&server)
            .await;

        let snap = client_for(&server).fetch("Ikeja").await.expect("fetch ok");
        assert_eq!(snap, fixtures::snapshot(1000, 1));
    }

    #[tokio::test]
    async fn error_envelope_becomes_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "error": UPSTREAM_FAILURE_MESSAGE })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch("Ikeja").await.unwrap_err();
        match err {
            FetchError::Upstream(message) => assert_eq!(message, UPSTREAM_FAILURE_MESSAGE),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_envelope_is_missing_data() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch("Ikeja").await.unwrap_err();
        assert!(matches!(err, FetchError::MissingData));
    }

    #[tokio::test]
    async fn partial_snapshot_is_rejected() {
        let server = MockServer::start().await;
        let mut payload = fixtures::snapshot_json(1000, 1);
        payload.as_object_mut().expect("object").remove("current");

        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": payload })))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch("Ikeja").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn new_rejects_invalid_url() {
        let err = ProxyClient::new("::nope").unwrap_err();
        assert!(err.to_string().contains("Invalid proxy API URL"));
    }
}
