use async_trait::async_trait;
use daycast_domain::DomainError;
use std::time::Duration;

/// Key/value store with the atomic primitives the rate limiter and the
/// response cache rely on. All cross-request mutable state goes through
/// this trait, so tests can substitute an in-memory fake.
///
/// All mutation is atomic at the store: no caller may observe a
/// read-modify-write race across processes.
#[async_trait]
pub trait SharedStore: Send + Sync {
    /// Atomically increment `key` and return the post-increment value.
    /// The first increment creates the counter with `ttl`; later
    /// increments within the same lifetime leave the expiry untouched.
    async fn increment(&self, key: &str, ttl: Duration) -> Result<i64, DomainError>;

    /// Set `key` to `value` with `ttl` only if it is currently absent.
    /// Returns true when this call created the entry.
    async fn set_if_absent(&self, key: &str, value: &str, ttl: Duration)
        -> Result<bool, DomainError>;

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Atomic replace: readers see either the old value or the new one,
    /// never a partial write.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError>;

    async fn remove(&self, key: &str) -> Result<(), DomainError>;
}
