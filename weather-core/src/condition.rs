use serde::{Deserialize, Serialize};

/// Sky categories the dashboard distinguishes, keyed off provider condition codes.
///
/// Only the clear-sky code is split into day and night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sky {
    ClearDay,
    ClearNight,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
    Fog,
    /// Anything the lookup does not recognise.
    Fair,
}

impl Sky {
    pub fn from_code(code: i64, is_day: bool) -> Self {
        match code {
            1000 if is_day => Self::ClearDay,
            1000 => Self::ClearNight,
            1003 | 1006 | 1009 => Self::Cloudy,
            1063 | 1180 | 1183 | 1186 | 1189 | 1192 | 1195 | 1240 | 1243 | 1246 => Self::Rain,
            1066 | 1210 | 1213 | 1216 | 1219 | 1222 | 1225 | 1255 | 1258 => Self::Snow,
            1087 | 1273 | 1276 | 1279 | 1282 => Self::Thunderstorm,
            1030 | 1135 | 1147 => Self::Fog,
            _ => Self::Fair,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::ClearDay => "☀️",
            Self::ClearNight => "🌙",
            Self::Cloudy => "☁️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Fog => "🌫️",
            Self::Fair => "🌤️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_sky_splits_day_and_night() {
        assert_eq!(Sky::from_code(1000, true), Sky::ClearDay);
        assert_eq!(Sky::from_code(1000, false), Sky::ClearNight);
        assert_eq!(Sky::ClearDay.emoji(), "☀️");
        assert_eq!(Sky::ClearNight.emoji(), "🌙");
    }

    #[test]
    fn other_codes_ignore_day_flag() {
        for is_day in [true, false] {
            assert_eq!(Sky::from_code(1006, is_day), Sky::Cloudy);
            assert_eq!(Sky::from_code(1195, is_day), Sky::Rain);
            assert_eq!(Sky::from_code(1225, is_day), Sky::Snow);
            assert_eq!(Sky::from_code(1087, is_day), Sky::Thunderstorm);
            assert_eq!(Sky::from_code(1135, is_day), Sky::Fog);
        }
    }

    #[test]
    fn every_listed_rain_code_is_rain() {
        for code in [1063, 1180, 1183, 1186, 1189, 1192, 1195, 1240, 1243, 1246] {
            assert_eq!(Sky::from_code(code, true), Sky::Rain, "code {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_fair() {
        assert_eq!(Sky::from_code(1150, true), Sky::Fair);
        assert_eq!(Sky::from_code(0, false), Sky::Fair);
        assert_eq!(Sky::from_code(-1, true).emoji(), "🌤️");
    }
}
