use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Identifying User-Agent required by the upstream usage policy.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Local hour the forecast is centered on.
    #[serde(default = "default_target_hour")]
    pub target_hour: u32,

    /// Maximum deviation from the target hour for a sample to qualify.
    #[serde(default = "default_tolerance_hours")]
    pub tolerance_hours: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            target_hour: default_target_hour(),
            tolerance_hours: default_tolerance_hours(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.met.no/weatherapi/locationforecast/2.0/compact".to_string()
}

fn default_user_agent() -> String {
    "daycast/0.1 (contact@daycast.dev)".to_string()
}

fn default_target_hour() -> u32 {
    14
}

fn default_tolerance_hours() -> u32 {
    2
}

fn default_timeout_secs() -> u64 {
    30
}
