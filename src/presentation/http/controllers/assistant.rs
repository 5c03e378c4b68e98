// src/presentation/http/controllers/assistant.rs
use crate::application::dto::AssistantReplyDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AskRequest {
    pub question: String,
}

/// The only failure a caller can see is an unknown article id. Assistant
/// outcomes (disabled, upstream failure, empty reply, success) all arrive as
/// 200 with displayable text.
#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/summary",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "Editorial summary, or a fixed informational message.", body = AssistantReplyDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Assistant"
)]
pub async fn summarize_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AssistantReplyDto>> {
    state
        .services
        .summarize_article(id)
        .await
        .into_http()
        .map(AssistantReplyDto::new)
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/ask",
    params(("id" = String, Path, description = "Article id")),
    request_body = AskRequest,
    responses(
        (status = 200, description = "Answer grounded in the article, or a fixed informational message.", body = AssistantReplyDto),
        (status = 400, description = "Blank question.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Assistant"
)]
pub async fn ask_about_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Json(payload): Json<AskRequest>,
) -> HttpResult<Json<AssistantReplyDto>> {
    state
        .services
        .ask_about_article(id, &payload.question)
        .await
        .into_http()
        .map(AssistantReplyDto::new)
        .map(Json)
}
