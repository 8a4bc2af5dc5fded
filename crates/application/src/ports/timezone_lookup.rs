/// IANA timezone lookup for a coordinate pair. Pure table lookup, no I/O.
pub trait TimezoneLookup: Send + Sync {
    /// Returns e.g. "Europe/Belgrade", or None when the point falls
    /// outside every known timezone polygon.
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String>;
}
