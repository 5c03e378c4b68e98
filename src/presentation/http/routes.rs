// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, assistant},
    middleware::rate_limit::assistant_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Extension, Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let assistant_routes = Router::new()
        .route(
            "/api/v1/articles/{id}/summary",
            post(assistant::summarize_article),
        )
        .route(
            "/api/v1/articles/{id}/ask",
            post(assistant::ask_about_article),
        )
        .layer(assistant_rate_limit_layer());

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/articles", get(articles::list_articles))
        .route("/api/v1/articles/featured", get(articles::list_featured))
        .route("/api/v1/articles/latest", get(articles::list_latest))
        .route("/api/v1/articles/{id}", get(articles::get_article))
        .route("/api/v1/articles/{id}/related", get(articles::list_related))
        .merge(assistant_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
