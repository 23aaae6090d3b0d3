//! Vroom Service - HTTP microservice for vehicle-routing queries.
//!
//! Forwards location lists to the external VROOM solver binary and relays
//! its JSON solution back to the caller.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `VROOM_BINARY` | Path to the VROOM solver executable | Required |
//! | `VROOM_PORT` | HTTP server port | 8080 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /route?loc=X,Y&loc=X,Y&...` - Compute a route through the locations
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vroom::RouteService;
use vroom_service::{handlers, AppState};

/// OpenAPI documentation for the Vroom service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vroom Routing Service",
        version = "0.1.0",
        description = "REST API relaying vehicle-routing queries to the VROOM solver binary.",
        license(name = "Apache-2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    paths(handlers::get_route, handlers::health_check),
    components(schemas(handlers::RequestError, handlers::HealthResponse)),
    tags(
        (name = "routing", description = "Route computation endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vroom_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("VROOM_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // The solver binary path is the one required setting
    let binary_path = std::env::var("VROOM_BINARY")
        .map_err(|_| "VROOM_BINARY environment variable not set")?;

    let route_service = RouteService::new(&binary_path);

    // Existence and execute permission are re-checked per request; a startup
    // warning just surfaces misconfiguration early.
    if let Err(e) = route_service.binary().verify() {
        tracing::warn!(binary = %binary_path, error = %e, "Solver binary failed verification");
    }

    tracing::info!(binary = %binary_path, port = port, "Starting Vroom service");

    let state = Arc::new(AppState { route_service });

    // Build router
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/route", get(handlers::get_route))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::bad_request_fallback)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
