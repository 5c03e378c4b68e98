// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        assistant::AssistantService,
        error::{ApplicationError, ApplicationResult},
        ports::TextGenerator,
        queries::articles::CatalogQueryService,
    },
    domain::article::{Article, ArticleCatalog, ArticleId},
};

/// Everything the presentation layer talks to, built once at bootstrap from
/// the injected ports.
pub struct ApplicationServices {
    pub catalog_queries: Arc<CatalogQueryService>,
    pub assistant: Arc<AssistantService>,
    catalog: Arc<dyn ArticleCatalog>,
}

impl ApplicationServices {
    pub fn new(catalog: Arc<dyn ArticleCatalog>, generator: Arc<dyn TextGenerator>) -> Self {
        let catalog_queries = Arc::new(CatalogQueryService::new(Arc::clone(&catalog)));
        let assistant = Arc::new(AssistantService::new(generator));

        Self {
            catalog_queries,
            assistant,
            catalog,
        }
    }

    /// Summarize one catalog article. Resolving the article can fail
    /// (not-found); the assistant call itself cannot, since its failure paths
    /// all collapse to displayable text.
    pub async fn summarize_article(&self, id: String) -> ApplicationResult<String> {
        let article = self.find_article(id)?;
        Ok(self.assistant.summarize(&article.plain_text()).await)
    }

    /// Answer a reader's question about one catalog article.
    pub async fn ask_about_article(
        &self,
        id: String,
        question: &str,
    ) -> ApplicationResult<String> {
        if question.trim().is_empty() {
            return Err(ApplicationError::validation("question cannot be empty"));
        }
        let article = self.find_article(id)?;
        Ok(self.assistant.ask(question, &article.plain_text()).await)
    }

    fn find_article(&self, id: String) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.catalog
            .find_by_id(&id)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
