use super::CatalogQueryService;
use crate::application::dto::ArticleDto;
use crate::domain::article::ImageVariant;

impl CatalogQueryService {
    /// Non-featured articles, newest first by publication instant. The sort
    /// is stable, so articles published at the same instant keep catalog
    /// order between them.
    pub fn list_latest(&self) -> Vec<ArticleDto> {
        let mut articles: Vec<_> = self
            .catalog
            .all()
            .into_iter()
            .filter(|article| !article.featured)
            .collect();
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles
            .into_iter()
            .map(|article| ArticleDto::from_article(article, ImageVariant::List))
            .collect()
    }
}
