use std::fmt;

/// Banded UV index label shown under the UV tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl UvLevel {
    /// Anything that fails every band (including NaN) is Very High.
    pub fn from_index(uv: f64) -> Self {
        if uv < 3.0 {
            Self::Low
        } else if uv < 6.0 {
            Self::Moderate
        } else if uv < 8.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for UvLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_each_band() {
        assert_eq!(UvLevel::from_index(2.0).label(), "Low");
        assert_eq!(UvLevel::from_index(5.0).label(), "Moderate");
        assert_eq!(UvLevel::from_index(7.0).label(), "High");
        assert_eq!(UvLevel::from_index(9.0).label(), "Very High");
    }

    #[test]
    fn thresholds_are_exclusive_upper_bounds() {
        assert_eq!(UvLevel::from_index(2.9), UvLevel::Low);
        assert_eq!(UvLevel::from_index(3.0), UvLevel::Moderate);
        assert_eq!(UvLevel::from_index(6.0), UvLevel::High);
        assert_eq!(UvLevel::from_index(8.0), UvLevel::VeryHigh);
    }

    #[test]
    fn nan_is_very_high() {
        assert_eq!(UvLevel::from_index(f64::NAN), UvLevel::VeryHigh);
        assert_eq!(UvLevel::VeryHigh.to_string(), "Very High");
    }
}
