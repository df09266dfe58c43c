//! HTTP surface of the weather proxy.
//!
//! One route, `GET /api?q=<city>`, forwards the city to the configured
//! upstream provider and relays its JSON body. Failures are reported with a
//! fixed `{"error": ...}` envelope; upstream detail only reaches the logs.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use weather_core::{ErrorEnvelope, WeatherProvider};

pub const API_PATH: &str = "/api";

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

impl From<Box<dyn WeatherProvider>> for AppState {
    fn from(provider: Box<dyn WeatherProvider>) -> Self {
        Self::new(Arc::from(provider))
    }
}

/// The city from the query string. A repeated `q` is joined with commas, the
/// way a query-string array stringifies; `None` when `q` is absent or empty.
pub fn city_from_query(pairs: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = pairs
        .iter()
        .filter(|(key, _)| key == "q")
        .map(|(_, value)| value.as_str())
        .collect();

    let city = values.join(",");
    (!city.is_empty()).then_some(city)
}

pub fn router(state: AppState) -> Router {
    Router::new().route(API_PATH, get(handle_weather)).with_state(state)
}

/// GET /api — relay current weather for `q`.
pub async fn handle_weather(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let city = match query {
        Ok(Query(pairs)) => match city_from_query(&pairs) {
            Some(city) => city,
            None => return missing_city(),
        },
        Err(rejection) => {
            warn!("unparsable query string: {rejection}");
            return missing_city();
        }
    };

    info!(city = %city, "weather request");

    match state.provider.current(&city).await {
        Ok(body) => (
            [(header::CONTENT_TYPE, "application/json")],
            String::from(body.get()),
        )
            .into_response(),
        Err(err) => {
            warn!(city = %city, "upstream fetch failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorEnvelope::upstream_failure()))
                .into_response()
        }
    }
}

fn missing_city() -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorEnvelope::missing_city())).into_response()
}

/// Serve the router on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "weather proxy listening on {API_PATH}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("weather proxy stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to install Ctrl-C handler: {err}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn single_q_is_the_city() {
        assert_eq!(city_from_query(&pairs(&[("q", "Paris")])).as_deref(), Some("Paris"));
    }

    #[test]
    fn repeated_q_is_joined() {
        let query = pairs(&[("q", "Paris"), ("units", "m"), ("q", "Lagos")]);
        assert_eq!(city_from_query(&query).as_deref(), Some("Paris,Lagos"));
    }

    #[test]
    fn absent_or_empty_q_is_missing() {
        assert_eq!(city_from_query(&[]), None);
        assert_eq!(city_from_query(&pairs(&[("city", "Paris")])), None);
        assert_eq!(city_from_query(&pairs(&[("q", "")])), None);
    }
}
