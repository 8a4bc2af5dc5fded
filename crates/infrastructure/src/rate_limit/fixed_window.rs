use async_trait::async_trait;
use daycast_application::ports::{RateLimiter, SharedStore};
use daycast_domain::config::RateLimitConfig;
use daycast_domain::DomainError;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Global fixed-window rate limiter over the shared store.
///
/// One counter per window, keyed by the window's start truncated to the
/// configured granularity. The store's atomic increment returns the
/// post-increment value, so the first caller in a window creates the
/// counter with its TTL exactly once and every concurrent caller sees a
/// correct count.
pub struct FixedWindowLimiter {
    store: Arc<dyn SharedStore>,
    config: RateLimitConfig,
}

impl FixedWindowLimiter {
    pub fn new(store: Arc<dyn SharedStore>, config: RateLimitConfig) -> Self {
        Self { store, config }
    }

    /// Admit at an explicit instant (duration since the Unix epoch).
    /// Exposed so tests can pin the window.
    pub async fn admit_at(&self, now: Duration) -> Result<(), DomainError> {
        if !self.config.enabled {
            return Ok(());
        }

        let window_secs = self.config.window_secs;
        let window_start = now.as_secs() / window_secs * window_secs;
        let key = format!("ratelimit:{window_start}");
        // Twice the window so a counter never outlives its relevance but
        // survives clock skew at the boundary.
        let ttl = Duration::from_secs(window_secs * 2);

        match self.store.increment(&key, ttl).await {
            Ok(count) if count >= 0 && (count as u64) <= self.config.ceiling => {
                debug!(count, ceiling = self.config.ceiling, "Rate limit check passed");
                Ok(())
            }
            Ok(count) => {
                let retry_after_secs = retry_after(now, window_start, window_secs);
                debug!(
                    count,
                    ceiling = self.config.ceiling,
                    retry_after_secs,
                    "Rate limit exceeded"
                );
                Err(DomainError::RateLimited { retry_after_secs })
            }
            Err(e) if self.config.fail_open => {
                warn!(error = %e, "Shared store unavailable, rate limiter failing open");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Shared store unavailable, rate limiter failing closed");
                Err(DomainError::RateLimited {
                    retry_after_secs: window_secs,
                })
            }
        }
    }
}

/// Whole seconds until the window boundary, rounded up, never zero.
fn retry_after(now: Duration, window_start: u64, window_secs: u64) -> u64 {
    let window_end_ms = (window_start + window_secs) as u128 * 1000;
    let remaining_ms = window_end_ms.saturating_sub(now.as_millis());
    ((remaining_ms + 999) / 1000).max(1) as u64
}

#[async_trait]
impl RateLimiter for FixedWindowLimiter {
    async fn admit(&self) -> Result<(), DomainError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        self.admit_at(now).await
    }
}
