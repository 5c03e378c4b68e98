use super::CatalogQueryService;
use crate::application::dto::ArticleDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::{ArticleId, Category, ImageVariant};

/// Related content is capped at a handful of suggestions.
const MAX_RELATED: usize = 3;

pub struct ListRelatedQuery {
    pub category: Category,
    pub exclude_id: ArticleId,
}

impl CatalogQueryService {
    /// Suggestions for an article page: resolve the anchor article, then
    /// relate by its own category. Unknown anchors are a not-found outcome.
    pub fn list_related_to_article(&self, id: String) -> ApplicationResult<Vec<ArticleDto>> {
        let id = ArticleId::new(id)?;
        let anchor = self
            .catalog
            .find_by_id(&id)
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(self.list_related(ListRelatedQuery {
            category: anchor.category,
            exclude_id: id,
        }))
    }

    /// Articles sharing a category, excluding the anchor article, in catalog
    /// order, truncated to [`MAX_RELATED`].
    pub fn list_related(&self, query: ListRelatedQuery) -> Vec<ArticleDto> {
        self.catalog
            .all()
            .into_iter()
            .filter(|article| {
                article.category == query.category && article.id != query.exclude_id
            })
            .take(MAX_RELATED)
            .map(|article| ArticleDto::from_article(article, ImageVariant::List))
            .collect()
    }
}
