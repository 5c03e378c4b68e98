// src/presentation/http/controllers/articles.rs
use crate::application::{
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, SearchArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Path, Query},
    Extension, Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleListParams {
    /// Free-text filter; a blank value is the same as no filter.
    #[serde(default)]
    pub q: Option<String>,
}

/// Full catalog, or the search subset when `q` carries a non-blank query.
#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(("q" = Option<String>, Query, description = "Free-text search over title, excerpt, and category")),
    responses(
        (status = 200, description = "Articles in catalog order; empty when nothing matches.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> Json<Vec<ArticleDto>> {
    let queries = &state.services.catalog_queries;
    let articles = match params.q.filter(|q| !q.trim().is_empty()) {
        Some(query) => queries.search_articles(SearchArticlesQuery { query }),
        None => queries.list_all(),
    };
    Json(articles)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/featured",
    responses(
        (status = 200, description = "Articles flagged for hero placement.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_featured(Extension(state): Extension<HttpState>) -> Json<Vec<ArticleDto>> {
    Json(state.services.catalog_queries.list_featured())
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/latest",
    responses(
        (status = 200, description = "Non-featured articles, newest first.", body = [ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_latest(Extension(state): Extension<HttpState>) -> Json<Vec<ArticleDto>> {
    Json(state.services.catalog_queries.list_latest())
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = String, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article, image resolved for the detail view.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .catalog_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}/related",
    params(("id" = String, Path, description = "Anchor article id")),
    responses(
        (status = 200, description = "Up to three articles from the same category, anchor excluded.", body = [ArticleDto]),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_related(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .catalog_queries
        .list_related_to_article(id)
        .into_http()
        .map(Json)
}
