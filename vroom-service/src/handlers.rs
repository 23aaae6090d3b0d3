//! HTTP request handlers for the routing service.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::{Query, QueryRejection};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use vroom::RouteRequest;

use crate::AppState;

/// Query parameters for the route endpoint.
///
/// `loc` repeats once per location; the boolean flags default to
/// `startAtFirst=true`, `endAtLast=false`, `includeGeometry=false`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RouteQuery {
    /// Location strings ("longitude,latitude"), in visit order. At least two
    /// are required.
    #[serde(default)]
    pub loc: Vec<String>,
    /// Start the route at the first location.
    #[serde(default = "default_true")]
    pub start_at_first: bool,
    /// End the route at the last location.
    #[serde(default)]
    pub end_at_last: bool,
    /// Include route geometry in the solver output.
    #[serde(default)]
    pub include_geometry: bool,
}

fn default_true() -> bool {
    true
}

/// Error response returned for every failure.
#[derive(Debug, Serialize, ToSchema)]
pub struct RequestError {
    /// Human-readable failure description.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Compute a route through the supplied locations.
///
/// Relays the request to the VROOM solver binary and returns its JSON
/// solution verbatim.
///
/// # Query Parameters
///
/// - `loc`: repeated location strings ("longitude,latitude"), at least two
/// - `startAtFirst`: start the route at the first location (default: true)
/// - `endAtLast`: end the route at the last location (default: false)
/// - `includeGeometry`: include route geometry (default: false)
///
/// # Returns
///
/// - `200 OK` with the solver's JSON document
/// - `400 Bad Request` with `{"message": ...}` on any failure
#[utoipa::path(
    get,
    path = "/route",
    tag = "routing",
    params(RouteQuery),
    responses(
        (status = 200, description = "Routing solution produced by the solver"),
        (status = 400, description = "Invalid request or solver failure", body = RequestError)
    )
)]
#[axum::debug_handler]
pub async fn get_route(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RouteQuery>, QueryRejection>,
) -> impl IntoResponse {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Malformed route query");
            return bad_request();
        }
    };

    tracing::debug!(
        locations = query.loc.len(),
        start_at_first = query.start_at_first,
        end_at_last = query.end_at_last,
        include_geometry = query.include_geometry,
        "Route query"
    );

    let request = RouteRequest {
        locations: query.loc,
        start_at_first: query.start_at_first,
        end_at_last: query.end_at_last,
        include_geometry: query.include_geometry,
    };

    match state.route_service.compute(&request).await {
        Ok(solution) => (StatusCode::OK, Json(solution)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Route computation failed");
            (
                StatusCode::BAD_REQUEST,
                Json(RequestError {
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Fallback for unknown routes, so every response body stays JSON.
pub async fn bad_request_fallback() -> axum::response::Response {
    bad_request()
}

fn bad_request() -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(RequestError {
            message: "Bad request".to_string(),
        }),
    )
        .into_response()
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
