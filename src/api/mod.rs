pub mod handlers;
pub mod models;
pub mod openapi;

use std::time::Duration;

use axum::{Router, routing::get};
use http::{Method, StatusCode, header};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{AppState, api_routes};
use crate::api::openapi::ApiDoc;

/// Full application router: health check, `/api` endpoints, OpenAPI docs and
/// the HTTP middleware stack.
pub fn build_app(service: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}
