use crate::domain::article::entity::Article;

/// Free-text match over an article's title, excerpt, and category label.
///
/// Matching is a substring test after folding both sides to lowercase ASCII
/// base letters, so `"quantico"` finds a title containing `"Quântico"`. The
/// fold only widens matches; plain case-insensitive hits still hit.
pub struct ArticleSearchSpec {
    needle: String,
}

impl ArticleSearchSpec {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_for_search(query.trim()),
        }
    }

    pub fn is_satisfied_by(&self, article: &Article) -> bool {
        self.haystack_contains(article.title.as_str())
            || self.haystack_contains(&article.excerpt)
            || self.haystack_contains(article.category.label())
    }

    fn haystack_contains(&self, haystack: &str) -> bool {
        fold_for_search(haystack).contains(&self.needle)
    }
}

/// Lowercase and map the Latin diacritics that occur in the catalog's locale
/// onto their base letters. Anything else is kept as-is.
fn fold_for_search(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|ch| match ch {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
