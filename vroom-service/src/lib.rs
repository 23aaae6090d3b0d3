//! Vroom Service Library
//!
//! HTTP handlers and types for the VROOM routing service.
//! This library is used by both the vroom-service binary and integration tests.

pub mod handlers;

use vroom::RouteService;

/// Application state shared across handlers.
pub struct AppState {
    /// Route service wrapping the solver binary.
    pub route_service: RouteService,
}

// Re-export commonly used types for convenience
pub use handlers::{HealthResponse, RequestError, RouteQuery};
