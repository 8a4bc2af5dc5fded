use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use daycast_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let DomainError::RateLimited { retry_after_secs } = self.0 {
            let body = Json(json!({
                "detail": self.0.to_string(),
                "retry_after": retry_after_secs,
            }));
            let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
            if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            return response;
        }

        let (status, detail) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::CityNotFound(_) | DomainError::NoForecastData => {
                (StatusCode::NOT_FOUND, self.0.to_string())
            }

            DomainError::UpstreamUnavailable(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),

            // Store/Config/Internal details stay out of responses.
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
