// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;

use mediagb_core::application::{ports::TextGenerator, services::ApplicationServices};
use mediagb_core::domain::article::ArticleCatalog;
use mediagb_core::infrastructure::InMemoryArticleCatalog;
use mediagb_core::presentation::http::{routes::build_router, state::HttpState};

pub fn seed_catalog() -> Arc<dyn ArticleCatalog> {
    Arc::new(InMemoryArticleCatalog::with_default_catalog())
}

/// Router over the seed catalog and the supplied generator double.
pub fn make_test_router_with(generator: Arc<dyn TextGenerator>) -> Router {
    let services = Arc::new(ApplicationServices::new(seed_catalog(), generator));
    let state = HttpState { services };
    build_router(state, &["http://localhost:3000".to_string()])
}

/// Router with the assistant disabled, which is all most tests need.
pub fn make_test_router() -> Router {
    make_test_router_with(Arc::new(super::mocks::DisabledTextGenerator))
}
