mod featured;
mod get_by_id;
mod latest;
mod list;
mod related;
mod search;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use related::ListRelatedQuery;
pub use search::SearchArticlesQuery;
pub use service::CatalogQueryService;
