use daycast_application::ports::TimezoneLookup;
use tzf_rs::DefaultFinder;

/// IANA timezone lookup from the embedded tzf polygon table.
/// Construction is expensive (the table is deserialized once); share a
/// single instance.
pub struct TzfTimezoneLookup {
    finder: DefaultFinder,
}

impl TzfTimezoneLookup {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for TzfTimezoneLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneLookup for TzfTimezoneLookup {
    fn timezone_at(&self, lat: f64, lon: f64) -> Option<String> {
        let name = self.finder.get_tz_name(lon, lat);
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
