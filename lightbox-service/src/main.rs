//! LightBox Service - HTTP proxy for the combined geocode service.
//!
//! Forwards combined geocode / reverse-geocode queries to an upstream service
//! and normalises its error responses into `{"detail": ...}`.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `LIGHTBOX_COMBINED_URL` | Upstream combined endpoint | Required |
//! | `LIGHTBOX_API_KEY` | Sent upstream as `x-api-key` | None |
//! | `LIGHTBOX_TIMEOUT_SECS` | Upstream request timeout | 30 |
//! | `LIGHTBOX_MAX_RETRIES` | Retries on transport failure | 2 |
//! | `LIGHTBOX_PORT` | HTTP server port | 8080 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /combined?street=..&locality=..` - Combined geocode lookup
//! - `GET /health` - Health check
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use lightbox::CombinedClientBuilder;
use lightbox_service::{handlers, router, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the LightBox service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LightBox Combined Geocode Service",
        version = "0.1.0",
        description = "Proxy for combined geocode / reverse-geocode lookups.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Pedro Sanz Martinez", url = "https://github.com/pedrosanzmtz/lightbox")
    ),
    paths(handlers::get_combined, handlers::health_check),
    components(schemas(handlers::ErrorResponse, handlers::HealthResponse)),
    tags(
        (name = "geocode", description = "Combined geocode endpoints"),
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
                .unwrap_or_else(|_| "lightbox_service=info,lightbox=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("LIGHTBOX_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // The library handles: LIGHTBOX_COMBINED_URL, LIGHTBOX_API_KEY,
    // LIGHTBOX_TIMEOUT_SECS, LIGHTBOX_MAX_RETRIES
    let client = CombinedClientBuilder::from_env()?.build()?;

    tracing::info!(
        upstream = client.url(),
        api_key = client.has_api_key(),
        timeout_secs = client.timeout_secs(),
        max_retries = client.max_retries(),
        port = port,
        "Starting LightBox service"
    );

    let state = Arc::new(AppState::new(client));

    let app = router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
