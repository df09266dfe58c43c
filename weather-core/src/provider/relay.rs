use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::value::RawValue;
use tracing::{debug, warn};

use crate::error::FetchError;

use super::WeatherProvider;

/// Forwards the city to a fixed upstream endpoint and hands back its JSON body.
#[derive(Debug, Clone)]
pub struct RelayProvider {
    base_url: Url,
    http: Client,
}

impl RelayProvider {
    pub fn new(base_url: Url) -> Self {
        Self { base_url, http: Client::new() }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl WeatherProvider for RelayProvider {
    async fn current(&self, city: &str) -> Result<Box<RawValue>, FetchError> {
        let res = self.http.get(self.base_url.clone()).query(&[("q", city)]).send().await?;

        let status = res.status();
        let body = res.text().await?;

        // Validated as JSON but kept as the upstream's exact text.
        let raw: Box<RawValue> = serde_json::from_str(&body).inspect_err(|err| {
            debug!(%status, body = %truncate_body(&body), "upstream body is not JSON: {err}");
        })?;

        if !status.is_success() {
            warn!(%status, city, "upstream answered with a non-success status, relaying its body");
        }

        Ok(raw)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
