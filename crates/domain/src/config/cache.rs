use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Lifetime of a cached forecast response.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Safety-net lifetime of the in-flight claim marker. If the computing
    /// party crashes without releasing it, the marker expires and a later
    /// caller may retry.
    #[serde(default = "default_claim_ttl_secs")]
    pub claim_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            claim_ttl_secs: default_claim_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    60
}

fn default_claim_ttl_secs() -> u64 {
    10
}
