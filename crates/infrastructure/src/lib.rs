//! Daycast Infrastructure Layer
//!
//! Adapters behind the application ports: the in-memory shared store, the
//! coalescing response cache, the fixed-window rate limiter, the bounded
//! geocoding cache and the upstream HTTP clients.
pub mod cache;
pub mod geocoding;
pub mod http;
pub mod rate_limit;
pub mod store;
pub mod timezone;

pub use cache::CachedForecastFetcher;
pub use geocoding::CachedGeocoder;
pub use http::{MetNoClient, NominatimClient};
pub use rate_limit::FixedWindowLimiter;
pub use store::MemoryStore;
pub use timezone::TzfTimezoneLookup;
