//! Display state for the weather dashboard.
//!
//! The dashboard owns the target city, the search field and the last snapshot
//! it received. Front-ends drive it with [`Dashboard::start_fetch`] /
//! [`Dashboard::finish_fetch`] around their own network calls and paint
//! whatever [`Dashboard::screen`] returns.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    condition::Sky,
    error::FetchError,
    model::WeatherSnapshot,
    uv::UvLevel,
};

pub const TITLE: &str = "👑 Royal Weather";
pub const SUBTITLE: &str = "Your Royal Weather Forecast";

#[derive(Debug, Clone)]
pub struct Dashboard {
    city: String,
    search_input: String,
    snapshot: Option<WeatherSnapshot>,
    received_at: Option<DateTime<Utc>>,
    in_flight: usize,
}

/// What the body of the dashboard should show right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    /// First fetch still outstanding and nothing to show yet.
    Loading,
    /// Nothing outstanding and nothing ever received.
    Blank,
    Weather(&'a WeatherSnapshot),
}

impl Dashboard {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            search_input: String::new(),
            snapshot: None,
            received_at: None,
            in_flight: 0,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        self.received_at
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight > 0
    }

    /// Register an outstanding fetch and return the city it should request.
    pub fn start_fetch(&mut self) -> String {
        self.in_flight += 1;
        self.city.clone()
    }

    /// Apply the result of a fetch for `requested`. Results land in arrival
    /// order, so a slow response for an older city can overwrite a newer one.
    pub fn finish_fetch(&mut self, requested: &str, result: Result<WeatherSnapshot, FetchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(snapshot) => {
                info!(city = %requested, location = %snapshot.location.name, "weather snapshot received");
                self.snapshot = Some(snapshot);
                self.received_at = Some(Utc::now());
            }
            Err(err) => {
                warn!(city = %requested, "Error fetching weather: {err}");
            }
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.snapshot {
            Some(snapshot) => Screen::Weather(snapshot),
            None if self.is_fetching() => Screen::Loading,
            None => Screen::Blank,
        }
    }

    pub fn set_search_input(&mut self, input: impl Into<String>) {
        self.search_input = input.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.search_input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.search_input.pop();
    }

    /// Submit the search field.
    ///
    /// Blank input is ignored and left in place. Otherwise the field is
    /// cleared and the trimmed text becomes the target city; the new city is
    /// returned when it differs from the current one and so needs a fetch.
    pub fn submit_search(&mut self) -> Option<String> {
        let query = self.search_input.trim();
        if query.is_empty() {
            return None;
        }

        let query = query.to_string();
        self.search_input.clear();

        if query == self.city {
            return None;
        }

        self.city = query;
        Some(self.city.clone())
    }
}

/// One labelled detail box on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub value: String,
    pub detail: Option<String>,
}

impl Tile {
    fn new(label: &'static str, value: String, detail: Option<String>) -> Self {
        Self { label, value, detail }
    }
}

/// The eight detail tiles, in display order.
pub fn tiles(snapshot: &WeatherSnapshot) -> Vec<Tile> {
    let c = &snapshot.current;
    vec![
        Tile::new(
            "Feels Like",
            format!("{}°C", c.feelslike_c),
            Some(format!("{}°F", c.feelslike_f)),
        ),
        Tile::new("Humidity", format!("{}%", c.humidity), None),
        Tile::new(
            "Wind Speed",
            c.wind_kph.to_string(),
            Some(format!("km/h {}", c.wind_dir)),
        ),
        Tile::new("Visibility", c.vis_km.to_string(), Some("km".into())),
        Tile::new("Pressure", c.pressure_mb.to_string(), Some("mb".into())),
        Tile::new(
            "UV Index",
            c.uv.to_string(),
            Some(UvLevel::from_index(c.uv).label().into()),
        ),
        Tile::new("Cloud Cover", format!("{}%", c.cloud), None),
        Tile::new("Precipitation", c.precip_mm.to_string(), Some("mm".into())),
    ]
}

/// Header block above the tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    pub place: String,
    pub country: String,
    pub localtime: String,
    pub temp_c: String,
    pub temp_f: String,
    pub emoji: &'static str,
    pub condition: String,
    pub last_updated: String,
}

impl Headline {
    pub fn from_snapshot(snapshot: &WeatherSnapshot) -> Self {
        let loc = &snapshot.location;
        let c = &snapshot.current;
        Self {
            place: format!("{}, {}", loc.name, loc.region),
            country: format!("🌍 {}", loc.country),
            localtime: loc.localtime.clone(),
            temp_c: format!("{}°C", c.temp_c),
            temp_f: format!("{}°F", c.temp_f),
            emoji: Sky::from_code(c.condition.code, c.is_day).emoji(),
            condition: c.condition.text.clone(),
            last_updated: format!("Last updated: {}", c.last_updated),
        }
    }
}
