use serde::{Deserialize, Serialize};

/// Fallback location used when a request supplies neither a city nor
/// coordinates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultLocation {
    #[serde(default = "default_lat")]
    pub lat: f64,

    #[serde(default = "default_lon")]
    pub lon: f64,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for DefaultLocation {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lon: default_lon(),
            city: default_city(),
            timezone: default_timezone(),
        }
    }
}

fn default_lat() -> f64 {
    44.8125
}

fn default_lon() -> f64 {
    20.4612
}

fn default_city() -> String {
    "Belgrade".to_string()
}

fn default_timezone() -> String {
    "Europe/Belgrade".to_string()
}
