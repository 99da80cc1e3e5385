use std::str::FromStr;

pub const DEFAULT_LOCATIONS_URL: &str = "https://script.google.com/macros/s/AKfycbwozMLiNs3aWHsGkfP7nlAE92a0HZ4WMKQqARIMoTAxUx8ad8YcLPUADaebjNqrJiBL/exec";
pub const DEFAULT_BASE_PATH: &str = "/queer_map";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Settings fixed at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Endpoint returning the categorized locations.
    pub locations_url: String,
    /// Path prefix the application is served under.
    pub base_path: String,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locations_url: DEFAULT_LOCATIONS_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Applies optional overrides, ignoring blank values and unknown levels.
    #[must_use]
    pub fn with_overrides(
        locations_url: Option<&str>,
        base_path: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        fn non_blank(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }
        let defaults = Self::default();
        Self {
            locations_url: non_blank(locations_url)
                .map_or(defaults.locations_url, ToString::to_string),
            base_path: non_blank(base_path)
                .map_or(defaults.base_path, |p| p.trim_end_matches('/').to_string()),
            log_level: non_blank(log_level)
                .and_then(|level| log::Level::from_str(level).ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
