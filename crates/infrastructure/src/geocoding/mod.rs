mod cached;

pub use cached::CachedGeocoder;
