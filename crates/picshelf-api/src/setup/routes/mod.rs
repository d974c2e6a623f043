//! Route configuration and setup.

mod health;

use crate::api_doc::ApiDoc;
use crate::constants::MULTIPART_OVERHEAD_BYTES;
use crate::error;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use picshelf_core::Config;
use picshelf_infra::{request_id_middleware, security_headers_middleware, SecurityHeadersConfig};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Router<()> {
    let body_limit = request_body_limit(config);
    tracing::info!(body_limit_bytes = body_limit, "Request body limit enabled");

    error::hide_error_details(config.is_production());
    let security_headers_config = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    Router::new()
        .route("/upload", post(handlers::image_upload::upload_images))
        .route("/images", get(handlers::image_list::list_images))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(axum::middleware::from_fn_with_state(
            security_headers_config,
            security_headers_middleware,
        ))
        .with_state(state)
}

/// Largest request body the transport accepts: every file at the cap, plus framing.
fn request_body_limit(config: &Config) -> usize {
    config
        .max_file_size_bytes
        .saturating_mul(config.max_files_per_upload)
        .saturating_add(MULTIPART_OVERHEAD_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_limit_covers_a_full_batch() {
        let config = Config::default();
        assert_eq!(
            request_body_limit(&config),
            10 * 5 * 1024 * 1024 + MULTIPART_OVERHEAD_BYTES
        );
    }
}
