// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleTitle, Category, ReadTime};
use chrono::{DateTime, Utc};

/// One news item. The catalog is populated once at startup and never mutated,
/// so the entity carries no write operations; derived views (image variants,
/// plain text) are computed from it on demand.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: Category,
    pub published_at: DateTime<Utc>,
    pub image_url: String,
    pub read_time: ReadTime,
    pub featured: bool,
}

impl Article {
    /// Title, excerpt, and markup-stripped body as one block of plain text.
    /// This is the form handed to the assistant as article context.
    pub fn plain_text(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.title.as_str(),
            self.excerpt,
            strip_markup(&self.content)
        )
    }
}

/// Drop `<...>` tag runs from a markup fragment, keeping the text between
/// them. An unterminated tag swallows the rest of the input.
fn strip_markup(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut in_tag = false;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
