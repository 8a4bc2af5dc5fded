use async_trait::async_trait;
use daycast_domain::DomainError;

/// Gate in front of every upstream weather-API call, global scope.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Consume one permit. `Err(DomainError::RateLimited { .. })` carries
    /// the remaining time until the window boundary.
    async fn admit(&self) -> Result<(), DomainError>;
}
