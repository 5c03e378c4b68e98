use super::CatalogQueryService;
use crate::application::dto::ArticleDto;
use crate::domain::article::ImageVariant;

impl CatalogQueryService {
    /// Articles flagged for hero placement, in catalog order, with image
    /// references resolved to the hero resolution.
    pub fn list_featured(&self) -> Vec<ArticleDto> {
        self.catalog
            .all()
            .into_iter()
            .filter(|article| article.featured)
            .map(|article| ArticleDto::from_article(article, ImageVariant::Hero))
            .collect()
    }
}
