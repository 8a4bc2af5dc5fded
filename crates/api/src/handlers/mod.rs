mod health;
mod info;
mod weather;

pub use health::health_check;
pub use info::service_info;
pub use weather::get_weather;
