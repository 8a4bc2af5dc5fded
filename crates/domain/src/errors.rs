use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("City '{0}' not found")]
    CityNotFound(String),

    #[error("No forecast data available for this location")]
    NoForecastData,

    #[error("Rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Shared store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
