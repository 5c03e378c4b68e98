// tests/support/builders.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use mediagb_core::domain::article::{
    Article, ArticleCatalog, ArticleId, ArticleTitle, Category, ReadTime,
};
use mediagb_core::infrastructure::InMemoryArticleCatalog;

/// Builder for catalog articles with sensible defaults, so tests only state
/// what they care about.
pub struct ArticleBuilder {
    id: String,
    title: String,
    excerpt: String,
    content: String,
    author: String,
    category: Category,
    published_at: DateTime<Utc>,
    image_url: String,
    read_time: u32,
    featured: bool,
}

impl ArticleBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Artigo {id}"),
            excerpt: format!("Resumo do artigo {id}."),
            content: format!("<p>Conteúdo do artigo {id}.</p>"),
            author: "Redação".to_string(),
            category: Category::World,
            published_at: "2024-05-20T08:00:00Z".parse().unwrap(),
            image_url: String::new(),
            read_time: 4,
            featured: false,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn excerpt(mut self, excerpt: &str) -> Self {
        self.excerpt = excerpt.to_string();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn published_at(mut self, instant: &str) -> Self {
        self.published_at = instant.parse().unwrap();
        self
    }

    pub fn image_url(mut self, url: &str) -> Self {
        self.image_url = url.to_string();
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            category: self.category,
            published_at: self.published_at,
            image_url: self.image_url,
            read_time: ReadTime::new(self.read_time).unwrap(),
            featured: self.featured,
        }
    }
}

pub fn catalog_of(articles: Vec<Article>) -> Arc<dyn ArticleCatalog> {
    Arc::new(InMemoryArticleCatalog::new(articles).unwrap())
}
