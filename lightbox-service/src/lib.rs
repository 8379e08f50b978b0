//! LightBox Service Library
//!
//! HTTP handlers and router for the combined geocode proxy.
//! This library is used by both the lightbox-service binary and integration tests.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use lightbox::CombinedLookup;

/// Application state shared across handlers.
pub struct AppState {
    /// Lookup invoked once per `/combined` request.
    pub lookup: Arc<dyn CombinedLookup>,
}

impl AppState {
    /// Create application state around a lookup implementation.
    pub fn new(lookup: impl CombinedLookup + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

/// Build the API router without docs or middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/combined", get(handlers::get_combined))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{CombinedQuery, ErrorResponse, HealthResponse};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request, http::StatusCode};
    use lightbox::{CombinedParams, LookupResult};
    use tower::ServiceExt;

    struct Unavailable;

    #[async_trait]
    impl CombinedLookup for Unavailable {
        async fn lookup(&self, _params: &CombinedParams) -> LookupResult {
            LookupResult::detail(503, "Upstream service down")
        }
    }

    #[tokio::test]
    async fn test_router_serves_combined() {
        let app = router(Arc::new(AppState::new(Unavailable)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/combined?locality=Hyderabad")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
