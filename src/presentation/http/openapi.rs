// src/presentation/http/openapi.rs
use axum::{response::Redirect, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::list_featured,
        crate::presentation::http::controllers::articles::list_latest,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::list_related,
        crate::presentation::http::controllers::assistant::summarize_article,
        crate::presentation::http::controllers::assistant::ask_about_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::assistant::AskRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::AssistantReplyDto
        )
    ),
    tags(
        (name = "Articles", description = "Read-only article catalog"),
        (name = "Assistant", description = "AI assistant over article content"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "MediaGB API",
        description = "Headless news portal backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
