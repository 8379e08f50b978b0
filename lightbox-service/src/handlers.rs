//! HTTP request handlers for the combined geocode service.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lightbox::{CombinedParams, MappedResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Query parameters for the combined endpoint.
///
/// All parameters are optional; numeric ones must parse as numbers.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CombinedQuery {
    /// Street line of the address (e.g., "MG Road").
    pub street: Option<String>,
    /// City or locality (e.g., "Hyderabad").
    pub locality: Option<String>,
    /// State, province or region.
    pub region: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Country code or name.
    pub country: Option<String>,
    /// Latitude in decimal degrees, for reverse geocoding.
    pub lat: Option<f64>,
    /// Longitude in decimal degrees, for reverse geocoding.
    pub lon: Option<f64>,
    /// Search buffer around the point.
    pub buffer_distance: Option<f64>,
}

impl From<CombinedQuery> for CombinedParams {
    fn from(query: CombinedQuery) -> Self {
        Self {
            street: query.street,
            locality: query.locality,
            region: query.region,
            postal_code: query.postal_code,
            country: query.country,
            lat: query.lat,
            lon: query.lon,
            buffer_distance: query.buffer_distance,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error detail, usually a message string.
    #[schema(value_type = String)]
    pub detail: Value,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Combined geocode / reverse-geocode lookup.
///
/// Forwards the query to the upstream combined service exactly once.
///
/// # Returns
///
/// - `200 OK` with the upstream payload, unchanged
/// - `422 Unprocessable Entity` if a parameter has the wrong type; the
///   upstream is not called
/// - any other upstream status with `{"detail": ...}`
#[utoipa::path(
    get,
    path = "/combined",
    tag = "geocode",
    params(CombinedQuery),
    responses(
        (status = 200, description = "Upstream payload, passed through unchanged"),
        (status = 422, description = "Query parameter failed type-checking", body = ErrorResponse),
        (status = "default", description = "Upstream error, normalised", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn get_combined(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CombinedQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected combined query");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    detail: Value::String(rejection.body_text()),
                }),
            )
                .into_response();
        }
    };

    let params = CombinedParams::from(query);
    tracing::debug!(
        street = ?params.street,
        locality = ?params.locality,
        lat = ?params.lat,
        lon = ?params.lon,
        buffer_distance = ?params.buffer_distance,
        "Combined query"
    );

    let mapped = MappedResponse::from(state.lookup.lookup(&params).await);

    if mapped.is_success() {
        tracing::info!(status = mapped.status, "Combined lookup succeeded");
    } else {
        tracing::warn!(
            status = mapped.status,
            detail = %mapped.body["detail"],
            "Combined lookup failed"
        );
    }

    mapped_response(mapped)
}

/// Convert a mapped lookup result into an HTTP response.
///
/// Statuses outside the valid HTTP range are answered with 502.
pub fn mapped_response(mapped: MappedResponse) -> Response {
    let status = StatusCode::from_u16(mapped.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(mapped.body)).into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_combined_query_into_params() {
        let json = r#"{"street": "MG Road", "locality": "Hyderabad", "buffer_distance": 12.5}"#;
        let query: CombinedQuery = serde_json::from_str(json).unwrap();
        let params = CombinedParams::from(query);
        assert_eq!(params.street.as_deref(), Some("MG Road"));
        assert_eq!(params.locality.as_deref(), Some("Hyderabad"));
        assert_eq!(params.buffer_distance, Some(12.5));
        assert!(params.lat.is_none());
    }

    #[test]
    fn test_mapped_response_keeps_status() {
        let response = mapped_response(MappedResponse {
            status: 429,
            body: json!({"detail": "Rate limited"}),
        });
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_mapped_response_invalid_status() {
        let response = mapped_response(MappedResponse {
            status: 42,
            body: json!({"detail": "Error"}),
        });
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_response_serialize() {
        let response = ErrorResponse {
            detail: Value::String("Invalid input".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, json!({"detail": "Invalid input"}));
    }

    #[test]
    fn test_health_response_serialize() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("0.1.0"));
    }
}
