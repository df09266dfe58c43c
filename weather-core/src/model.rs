use serde::{Deserialize, Deserializer, Serialize};

/// Body of the 400 response when `q` is missing.
pub const MISSING_CITY_MESSAGE: &str = "City query parameter is required";

/// Body of the 500 response when the upstream call fails for any reason.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch weather data";

/// One fetched weather payload for a city. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: Current,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub code: i64,
    pub text: String,
}

/// Current conditions as delivered by the provider. Units follow the
/// provider's field suffixes (`_c`, `_kph`, `_mb`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(deserialize_with = "flag")]
    pub is_day: bool,
    pub condition: Condition,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub vis_km: f64,
    pub pressure_mb: f64,
    pub uv: f64,
    pub cloud: f64,
    pub precip_mm: f64,
    pub last_updated: String,
}

/// What the dashboard reads back from the proxy: `{data: ...}` or `{error: ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEnvelope {
    #[serde(default)]
    pub data: Option<WeatherSnapshot>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the proxy writes on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }

    pub fn missing_city() -> Self {
        Self::new(MISSING_CITY_MESSAGE)
    }

    pub fn upstream_failure() -> Self {
        Self::new(UPSTREAM_FAILURE_MESSAGE)
    }
}

// The provider encodes day/night as 1/0; accept a plain boolean too.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}
