use crate::{config::ProxyConfig, error::FetchError, provider::relay::RelayProvider};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Url;
use serde_json::value::RawValue;
use std::fmt::Debug;

pub mod relay;

/// Source of current conditions for the proxy.
///
/// Implementations return the provider's JSON body as-is, byte for byte; the
/// proxy checks that it is JSON and never interprets it.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<Box<RawValue>, FetchError>;
}

/// Construct the upstream provider from the proxy section of the config.
pub fn provider_from_config(config: &ProxyConfig) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let url = Url::parse(&config.upstream_url).with_context(|| {
        format!(
            "Invalid upstream URL '{}'.\n\
             Hint: run `weather-dashboard configure` or pass --upstream.",
            config.upstream_url
        )
    })?;

    Ok(Box::new(RelayProvider::new(url)))
}
