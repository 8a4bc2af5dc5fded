use crate::{
    dto::{InfoResponse, LocationDto},
    state::AppState,
};
use axum::{extract::State, Json};

pub async fn service_info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "daycast".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_source: state.data_source.clone(),
        default_location: LocationDto {
            lat: state.default_location.lat,
            lon: state.default_location.lon,
            city: Some(state.default_location.city.clone()),
        },
        default_timezone: state.default_location.timezone.clone(),
    })
}
