pub mod seed;

use std::collections::HashMap;

use crate::domain::article::{Article, ArticleCatalog, ArticleId};
use crate::domain::errors::{DomainError, DomainResult};

/// Catalog held entirely in memory, in insertion order, with an id index for
/// point lookups. Construction is the only write that ever happens: duplicate
/// ids are rejected there, which makes uniqueness a load-time guarantee for
/// every later query.
pub struct InMemoryArticleCatalog {
    articles: Vec<Article>,
    index: HashMap<ArticleId, usize>,
}

impl InMemoryArticleCatalog {
    pub fn new(articles: Vec<Article>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            if index.insert(article.id.clone(), position).is_some() {
                return Err(DomainError::Conflict(format!(
                    "duplicate article id {}",
                    article.id
                )));
            }
        }
        Ok(Self { articles, index })
    }

    /// The catalog loaded with the built-in article set.
    pub fn with_default_catalog() -> Self {
        Self::new(seed::default_catalog()).expect("seed catalog has unique ids")
    }
}

impl ArticleCatalog for InMemoryArticleCatalog {
    fn all(&self) -> Vec<Article> {
        self.articles.clone()
    }

    fn find_by_id(&self, id: &ArticleId) -> Option<Article> {
        self.index
            .get(id)
            .map(|&position| self.articles[position].clone())
    }
}
