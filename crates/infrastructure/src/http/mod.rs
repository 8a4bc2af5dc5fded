mod met_client;
mod nominatim_client;

pub use met_client::MetNoClient;
pub use nominatim_client::NominatimClient;
