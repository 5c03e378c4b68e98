// tests/catalog_query_tests.rs
use std::collections::HashSet;

mod support;

use mediagb_core::application::queries::articles::{
    CatalogQueryService, GetArticleByIdQuery, ListRelatedQuery, SearchArticlesQuery,
};
use mediagb_core::domain::article::{ArticleId, Category};

use support::builders::{catalog_of, ArticleBuilder};

fn seed_service() -> CatalogQueryService {
    CatalogQueryService::new(support::helpers::seed_catalog())
}

#[test]
fn featured_and_latest_partition_the_catalog() {
    let service = seed_service();
    let all: HashSet<String> = service.list_all().into_iter().map(|a| a.id).collect();
    let featured: HashSet<String> = service.list_featured().into_iter().map(|a| a.id).collect();
    let latest: HashSet<String> = service.list_latest().into_iter().map(|a| a.id).collect();

    assert!(featured.is_disjoint(&latest), "no article in both halves");
    let union: HashSet<String> = featured.union(&latest).cloned().collect();
    assert_eq!(union, all, "every article is in exactly one half");
}

#[test]
fn seed_catalog_scenario() {
    let service = seed_service();

    let all = service.list_all();
    assert_eq!(all.len(), 16);

    let featured: Vec<String> = service.list_featured().into_iter().map(|a| a.id).collect();
    assert_eq!(featured.len(), 4);

    let latest = service.list_latest();
    assert_eq!(latest.len(), 12);

    let hits: Vec<String> = service
        .search_articles(SearchArticlesQuery {
            query: "quantico".into(),
        })
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(hits, ["2"]);
}

#[test]
fn latest_is_sorted_newest_first() {
    let catalog = catalog_of(vec![
        ArticleBuilder::new("a").published_at("2024-05-18T10:00:00Z").build(),
        ArticleBuilder::new("b").published_at("2024-05-21T10:00:00Z").build(),
        ArticleBuilder::new("c").published_at("2024-05-19T10:00:00Z").build(),
        ArticleBuilder::new("hero").featured(true).build(),
    ]);
    let service = CatalogQueryService::new(catalog);

    let order: Vec<String> = service.list_latest().into_iter().map(|a| a.id).collect();
    assert_eq!(order, ["b", "c", "a"]);
}

#[test]
fn image_variants_differ_per_view() {
    let catalog = catalog_of(vec![
        ArticleBuilder::new("hero")
            .featured(true)
            .image_url("https://images.unsplash.com/photo-hero")
            .build(),
        ArticleBuilder::new("plain")
            .image_url("https://images.unsplash.com/photo-plain")
            .build(),
    ]);
    let service = CatalogQueryService::new(catalog);

    let featured = service.list_featured();
    assert!(featured[0].image_url.contains("w=1200"));

    let latest = service.list_latest();
    assert!(latest[0].image_url.contains("w=800"));

    let detail = service
        .get_article_by_id(GetArticleByIdQuery { id: "plain".into() })
        .unwrap();
    assert!(detail.image_url.contains("w=1600"));
    assert!(detail.image_url.contains("q=80"));
}

#[test]
fn get_by_id_returns_the_exact_record_or_not_found() {
    let service = seed_service();

    let article = service
        .get_article_by_id(GetArticleByIdQuery { id: "2".into() })
        .unwrap();
    assert!(article.title.contains("Quântico"));
    assert_eq!(article.category, "Tecnologia");

    assert!(service
        .get_article_by_id(GetArticleByIdQuery { id: "999".into() })
        .is_err());
}

#[test]
fn related_excludes_anchor_and_caps_at_three() {
    let catalog = catalog_of(vec![
        ArticleBuilder::new("t1").category(Category::Technology).build(),
        ArticleBuilder::new("t2").category(Category::Technology).build(),
        ArticleBuilder::new("t3").category(Category::Technology).build(),
        ArticleBuilder::new("t4").category(Category::Technology).build(),
        ArticleBuilder::new("t5").category(Category::Technology).build(),
        ArticleBuilder::new("s1").category(Category::Sports).build(),
    ]);
    let service = CatalogQueryService::new(catalog);

    let related = service.list_related(ListRelatedQuery {
        category: Category::Technology,
        exclude_id: ArticleId::new("t2").unwrap(),
    });

    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|a| a.category == "Tecnologia"));
    assert!(related.iter().all(|a| a.id != "t2"));
    // catalog order, truncated
    let ids: Vec<String> = related.into_iter().map(|a| a.id).collect();
    assert_eq!(ids, ["t1", "t3", "t4"]);
}

#[test]
fn related_to_article_resolves_the_anchor_category() {
    let service = seed_service();

    let related = service.list_related_to_article("2".into()).unwrap();
    assert!(!related.is_empty());
    assert!(related.len() <= 3);
    assert!(related.iter().all(|a| a.category == "Tecnologia"));
    assert!(related.iter().all(|a| a.id != "2"));

    assert!(service.list_related_to_article("999".into()).is_err());
}

#[test]
fn search_results_all_match_the_query() {
    let service = seed_service();

    for query in ["mercado", "TECNOLOGIA", "saúde", "saude"] {
        let results = service.search_articles(SearchArticlesQuery {
            query: query.into(),
        });
        for article in &results {
            let folded = |s: &str| {
                s.to_lowercase()
                    .replace(['á', 'à', 'â', 'ã'], "a")
                    .replace(['é', 'ê'], "e")
                    .replace(['í'], "i")
                    .replace(['ó', 'ô', 'õ'], "o")
                    .replace(['ú', 'ü'], "u")
                    .replace('ç', "c")
            };
            let needle = folded(query);
            assert!(
                folded(&article.title).contains(&needle)
                    || folded(&article.excerpt).contains(&needle)
                    || folded(&article.category).contains(&needle),
                "article {} does not match query {query}",
                article.id
            );
        }
    }
}

#[test]
fn search_misses_return_an_empty_list() {
    let service = seed_service();
    let results = service.search_articles(SearchArticlesQuery {
        query: "xyzzy-nada-disso".into(),
    });
    assert!(results.is_empty());
}

#[test]
fn search_is_bounded_by_catalog_size() {
    let service = seed_service();
    // An empty needle matches every article; that is the upper bound.
    let results = service.search_articles(SearchArticlesQuery { query: String::new() });
    assert_eq!(results.len(), service.list_all().len());
}
