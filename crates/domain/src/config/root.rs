use serde::{Deserialize, Serialize};

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::geocoding::GeocodingConfig;
use super::location::DefaultLocation;
use super::logging::LoggingConfig;
use super::rate_limit::RateLimitConfig;
use super::server::ServerConfig;
use super::weather::WeatherConfig;

/// Main configuration structure for daycast
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Web server configuration (port, bind address)
    pub server: ServerConfig,

    /// Upstream weather provider and target-hour selection
    pub weather: WeatherConfig,

    /// Forecast response cache
    pub cache: CacheConfig,

    /// Global upstream rate limit
    pub rate_limit: RateLimitConfig,

    /// Geocoding provider and its bounded cache
    pub geocoding: GeocodingConfig,

    /// Fallback location when a request names no location at all
    pub default_location: DefaultLocation,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. daycast.toml in current directory
    /// 3. /etc/daycast/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("daycast.toml").exists() {
            Self::from_file("daycast.toml")?
        } else if std::path::Path::new("/etc/daycast/config.toml").exists() {
            Self::from_file("/etc/daycast/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.weather.target_hour > 23 {
            return Err(ConfigError::Validation(format!(
                "target_hour must be in [0, 23], got {}",
                self.weather.target_hour
            )));
        }

        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::Validation(
                "rate_limit.window_secs cannot be 0".to_string(),
            ));
        }

        if self.geocoding.cache_capacity == 0 {
            return Err(ConfigError::Validation(
                "geocoding.cache_capacity cannot be 0".to_string(),
            ));
        }

        if !(-90.0..=90.0).contains(&self.default_location.lat)
            || !(-180.0..=180.0).contains(&self.default_location.lon)
        {
            return Err(ConfigError::Validation(
                "default_location coordinates out of range".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
