use super::CatalogQueryService;
use crate::application::dto::ArticleDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{ArticleId, ImageVariant};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl CatalogQueryService {
    /// Point lookup. An unknown id is a not-found outcome for the caller to
    /// render, never a panic; a hit resolves the detail image resolution.
    pub fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let article = self
            .catalog
            .find_by_id(&id)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(ArticleDto::from_article(article, ImageVariant::Detail))
    }
}
