use super::CatalogQueryService;
use crate::application::dto::ArticleDto;
use crate::domain::article::{ArticleSearchSpec, ImageVariant};

pub struct SearchArticlesQuery {
    pub query: String,
}

impl CatalogQueryService {
    /// Substring search over title, excerpt, and category label, insensitive
    /// to case and Latin diacritics. No match yields an empty list, never an
    /// error. Whether an empty query is meaningful is the caller's decision;
    /// given one, this matches the whole catalog.
    pub fn search_articles(&self, query: SearchArticlesQuery) -> Vec<ArticleDto> {
        let spec = ArticleSearchSpec::new(&query.query);
        self.catalog
            .all()
            .into_iter()
            .filter(|article| spec.is_satisfied_by(article))
            .map(|article| ArticleDto::from_article(article, ImageVariant::List))
            .collect()
    }
}
