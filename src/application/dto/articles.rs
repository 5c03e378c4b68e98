use crate::domain::article::{resolve_image_url, Article, ImageVariant};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of one article. `image_url` is already resolved to the delivery
/// variant the producing query chose; the stored reference never leaves the
/// catalog unresolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub published_at: DateTime<Utc>,
    pub image_url: String,
    pub read_time: u32,
    pub featured: bool,
}

impl ArticleDto {
    pub fn from_article(article: Article, variant: ImageVariant) -> Self {
        let image_url = resolve_image_url(&article.image_url, variant);
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            excerpt: article.excerpt,
            content: article.content,
            author: article.author,
            category: article.category.label().to_string(),
            published_at: article.published_at,
            image_url,
            read_time: article.read_time.minutes(),
            featured: article.featured,
        }
    }
}
