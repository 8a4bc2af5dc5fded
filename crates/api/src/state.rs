use daycast_application::use_cases::GetForecastUseCase;
use daycast_domain::config::DefaultLocation;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_forecast: Arc<GetForecastUseCase>,
    pub default_location: DefaultLocation,
    pub data_source: String,
}
