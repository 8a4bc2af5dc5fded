use crate::errors::DomainError;
use crate::location::Location;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneOption {
    #[default]
    Utc,
    Local,
}

impl TimezoneOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utc => "utc",
            Self::Local => "local",
        }
    }
}

impl FromStr for TimezoneOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            other => Err(DomainError::Validation(format!(
                "timezone_option must be 'utc' or 'local', got '{other}'"
            ))),
        }
    }
}

/// Raw, unvalidated request parameters as they arrive at the service edge.
#[derive(Debug, Clone, Default)]
pub struct ForecastRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
    pub timezone_option: TimezoneOption,
}

/// A validated query: location resolved to rounded coordinates and the
/// target timezone resolved to an IANA name.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub location: Location,
    pub timezone: String,
    pub timezone_option: TimezoneOption,
}

impl ForecastQuery {
    /// Deterministic cache key over (rounded lat, rounded lon, timezone
    /// option). Equal physical points within ~11 m share one key.
    pub fn cache_key(&self) -> String {
        format!(
            "forecast:{:.4}:{:.4}:{}",
            self.location.lat,
            self.location.lon,
            self.timezone_option.as_str()
        )
    }
}
