//! Core library for the weather proxy and dashboard.
//!
//! This crate defines:
//! - Configuration handling shared by both binaries
//! - The weather snapshot model and the proxy's JSON envelopes
//! - The upstream provider abstraction used by the proxy
//! - The proxy client, display state and tile derivation used by the dashboard
//!
//! It is used by `weather-proxy` and `weather-dashboard`.

pub mod client;
pub mod condition;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod provider;
pub mod uv;

pub use client::ProxyClient;
pub use condition::Sky;
pub use config::{Config, DashboardConfig, ProxyConfig};
pub use dashboard::{Dashboard, Headline, Screen, Tile};
pub use error::FetchError;
pub use model::{ErrorEnvelope, SnapshotEnvelope, WeatherSnapshot};
pub use provider::{WeatherProvider, provider_from_config};
pub use uv::UvLevel;
