use std::sync::Arc;

use crate::domain::article::ArticleCatalog;

/// Read side of the catalog. Holds nothing but the injected catalog port;
/// every operation is a pure function over the immutable article set.
pub struct CatalogQueryService {
    pub(super) catalog: Arc<dyn ArticleCatalog>,
}

impl CatalogQueryService {
    pub fn new(catalog: Arc<dyn ArticleCatalog>) -> Self {
        Self { catalog }
    }
}
