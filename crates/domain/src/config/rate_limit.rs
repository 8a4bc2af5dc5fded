use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Maximum upstream requests admitted per window, global scope.
    #[serde(default = "default_ceiling")]
    pub ceiling: u64,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Policy when the shared store is unavailable: admit (true) or
    /// reject (false). The ceiling protects an upstream, not exactness,
    /// so the default preserves availability.
    #[serde(default = "default_true")]
    pub fail_open: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ceiling: default_ceiling(),
            window_secs: default_window_secs(),
            fail_open: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_ceiling() -> u64 {
    20
}

fn default_window_secs() -> u64 {
    1
}
