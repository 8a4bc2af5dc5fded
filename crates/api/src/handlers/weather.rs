use crate::{
    dto::{WeatherParams, WeatherResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use daycast_domain::{ForecastRequest, TimezoneOption};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_weather")]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherResponse>, ApiError> {
    debug!(
        lat = ?params.lat,
        lon = ?params.lon,
        city = ?params.city,
        timezone_option = %params.timezone_option,
        "Weather request received"
    );

    let timezone_option: TimezoneOption = params.timezone_option.parse()?;
    let request = ForecastRequest {
        lat: params.lat,
        lon: params.lon,
        city: params.city,
        timezone_option,
    };

    let response = state.get_forecast.execute(&request).await?;
    Ok(Json(response.into()))
}
