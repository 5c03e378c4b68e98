use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;

/// Read-only port over the article catalog.
///
/// The catalog is loaded once at process start and is immutable afterwards,
/// so lookups are synchronous and reentrant; implementations hand out
/// by-value copies, never shared mutable state. Any source able to produce
/// the full article set at startup (static data, file, remote fetch) can sit
/// behind this trait as long as ids stay unique.
pub trait ArticleCatalog: Send + Sync {
    /// Every article, in catalog insertion order.
    fn all(&self) -> Vec<Article>;

    /// Point lookup; `None` for an unknown id, never an error.
    fn find_by_id(&self, id: &ArticleId) -> Option<Article>;
}
