use super::CatalogQueryService;
use crate::application::dto::ArticleDto;
use crate::domain::article::ImageVariant;

impl CatalogQueryService {
    /// The full catalog, unfiltered, in catalog order.
    pub fn list_all(&self) -> Vec<ArticleDto> {
        self.catalog
            .all()
            .into_iter()
            .map(|article| ArticleDto::from_article(article, ImageVariant::List))
            .collect()
    }
}
