//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/postcodes", get(list_postal_codes))
        .route("/api/postcodes/:code", get(postal_code_details))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/lookup", get(city_lookup))
        .route("/api/validate/:code", get(validate_code))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every postal code.
async fn list_postal_codes(State(state): State<AppState>) -> Json<PostalCodesResponse> {
    Json(PostalCodesResponse::from_directory(&state.directory))
}

/// List every city.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let cities = state
        .directory
        .all_cities()
        .into_iter()
        .map(String::from)
        .collect();

    Json(CitiesResponse { cities })
}

/// Look up the city for a postal code.
async fn postal_code_details(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<PostalCodeResponse>, AppError> {
    let city = state.directory.city_from_postal_code(&code);
    if city.is_empty() {
        return Err(AppError::NotFound {
            message: format!("Unknown postal code: {}", code),
        });
    }

    Ok(Json(PostalCodeResponse {
        valid: state.directory.validate(&code),
        city: city.to_string(),
        code,
    }))
}

/// Look up every postal code for a city name.
async fn city_lookup(
    State(state): State<AppState>,
    Query(req): Query<CityLookupRequest>,
) -> Result<Json<CityLookupResponse>, AppError> {
    if req.name.is_empty() {
        return Err(AppError::BadRequest {
            message: "City name must not be empty".to_string(),
        });
    }

    let postal_codes: Vec<String> = state
        .directory
        .postal_codes_from_city(&req.name)
        .into_iter()
        .map(String::from)
        .collect();

    if postal_codes.is_empty() {
        return Err(AppError::NotFound {
            message: format!("Unknown city: {:?}", req.name),
        });
    }

    Ok(Json(CityLookupResponse {
        city: req.name,
        postal_codes,
    }))
}

/// Validate a postal code. Always succeeds; unknown codes are just invalid.
async fn validate_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Json<ValidateResponse> {
    let valid = state.directory.validate(&code);
    Json(ValidateResponse { code, valid })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
