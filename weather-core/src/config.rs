use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_LISTEN: &str = "127.0.0.1:3000";
pub const DEFAULT_UPSTREAM_URL: &str = "https://weather-api-go-zo1w.onrender.com/api";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api";
pub const DEFAULT_CITY: &str = "Ikeja";

/// Settings for the `weather-proxy` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Socket address the proxy listens on.
    pub listen: String,
    /// Upstream endpoint; the city is sent to it as `?q=<city>`.
    pub upstream_url: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}

/// Settings for the `weather-dashboard` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Full URL of the proxy route, e.g. `http://127.0.0.1:3000/api`.
    pub api_url: String,
    /// City shown on startup.
    pub default_city: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_city: DEFAULT_CITY.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [proxy]
/// listen = "127.0.0.1:3000"
/// upstream_url = "https://weather-api-go-zo1w.onrender.com/api"
///
/// [dashboard]
/// api_url = "http://127.0.0.1:3000/api"
/// default_city = "Ikeja"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub proxy: ProxyConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load config from the platform config dir, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from an explicit path, or defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save config to the platform config dir.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Default location of the dashboard's log file.
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(project_dirs()?.data_local_dir().join("dashboard.log"))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "royal-weather", "royal-weather")
        .ok_or_else(|| anyhow!("Could not determine platform config directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_dashboard_at_local_proxy() {
        let cfg = Config::default();

        assert_eq!(cfg.proxy.listen, "127.0.0.1:3000");
        assert_eq!(cfg.proxy.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(cfg.dashboard.api_url, "http://127.0.0.1:3000/api");
        assert_eq!(cfg.dashboard.default_city, "Ikeja");
    }

    #[test]
    fn partial_file_is_filled_with_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [dashboard]
            default_city = "Paris"
            "#,
        )
        .expect("partial config must parse");

        assert_eq!(cfg.dashboard.default_city, "Paris");
        assert_eq!(cfg.dashboard.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.proxy, ProxyConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let err = Config::from_toml_str("[proxy\nlisten = ").unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.proxy.listen = "0.0.0.0:8080".into();
        cfg.dashboard.default_city = "Lagos".into();
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn load_reports_path_on_parse_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "proxy = 5").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
