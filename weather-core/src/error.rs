use thiserror::Error;

/// Failure of a single weather fetch, on either side of the proxy.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Proxy reported an error: {0}")]
    Upstream(String),

    #[error("Proxy response carried no weather data")]
    MissingData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_includes_message() {
        let err = FetchError::Upstream("Failed to fetch weather data".into());
        assert_eq!(
            err.to_string(),
            "Proxy reported an error: Failed to fetch weather data"
        );
    }

    #[test]
    fn decode_error_converts_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FetchError = parse.into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid JSON payload"));
    }
}
