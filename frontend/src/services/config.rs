use super::logging::LogLevel;

/// API root used when `DASHBOARD_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";

/// Frontend settings, baked in at compile time since a wasm bundle has no
/// process environment to read.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LogLevel,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("DASHBOARD_API_URL"), option_env!("DASHBOARD_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let log_level = log_level.and_then(LogLevel::parse).unwrap_or(LogLevel::Info);

        Self { api_base_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
