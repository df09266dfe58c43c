use std::fmt::{self, Write};

use weather_core::{Headline, WeatherSnapshot, dashboard};

/// Render the dashboard as plain text, one tile per line.
pub fn render(snapshot: &WeatherSnapshot) -> String {
    let mut out = String::new();
    write_dashboard(&mut out, snapshot).expect("writing to a String cannot fail");
    out
}

fn write_dashboard(out: &mut String, snapshot: &WeatherSnapshot) -> fmt::Result {
    let head = Headline::from_snapshot(snapshot);

    writeln!(out, "{}", dashboard::TITLE)?;
    writeln!(out, "{}", dashboard::SUBTITLE)?;
    writeln!(out)?;
    writeln!(out, "📍 {}", head.place)?;
    writeln!(out, "{}  {}", head.country, head.localtime)?;
    writeln!(out, "{}  {}   {} {}", head.temp_c, head.temp_f, head.emoji, head.condition)?;
    writeln!(out)?;
    writeln!(out, "Weather Details")?;

    for tile in dashboard::tiles(snapshot) {
        match &tile.detail {
            Some(detail) => writeln!(out, "  {:<14} {} {}", tile.label, tile.value, detail)?,
            None => writeln!(out, "  {:<14} {}", tile.label, tile.value)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", head.last_updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::model::{Condition, Current, Location};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: "Paris".into(),
                region: "Ile-de-France".into(),
                country: "France".into(),
                localtime: "2026-10-19 21:10".into(),
            },
            current: Current {
                temp_c: 12.0,
                temp_f: 53.6,
                is_day: false,
                condition: Condition { code: 1000, text: "Clear".into() },
                feelslike_c: 10.4,
                feelslike_f: 50.7,
                humidity: 81.0,
                wind_kph: 11.2,
                wind_dir: "NNE".into(),
                vis_km: 10.0,
                pressure_mb: 1022.0,
                uv: 0.0,
                cloud: 0.0,
                precip_mm: 0.0,
                last_updated: "2026-10-19 21:00".into(),
            },
        }
    }

    #[test]
    fn renders_header_and_night_emoji() {
        let text = render(&snapshot());

        assert!(text.starts_with("👑 Royal Weather\n"));
        assert!(text.contains("📍 Paris, Ile-de-France"));
        assert!(text.contains("🌍 France  2026-10-19 21:10"));
        assert!(text.contains("12°C  53.6°F   🌙 Clear"));
        assert!(text.ends_with("Last updated: 2026-10-19 21:00\n"));
    }

    #[test]
    fn write_dashboard_appends_to_existing_text() {
        let mut out = String::from("> ");
        write_dashboard(&mut out, &snapshot()).expect("write");

        assert!(out.starts_with("> 👑 Royal Weather\n"));
        assert_eq!(&out[2..], render(&snapshot()));
    }

    #[test]
    fn renders_every_tile_with_units() {
        let text = render(&snapshot());

        assert!(text.contains("  Feels Like     10.4°C 50.7°F\n"));
        assert!(text.contains("  Humidity       81%\n"));
        assert!(text.contains("  Wind Speed     11.2 km/h NNE\n"));
        assert!(text.contains("  Visibility     10 km\n"));
        assert!(text.contains("  Pressure       1022 mb\n"));
        assert!(text.contains("  UV Index       0 Low\n"));
        assert!(text.contains("  Cloud Cover    0%\n"));
        assert!(text.contains("  Precipitation  0 mm\n"));
    }
}
