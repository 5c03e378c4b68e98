// src/domain/article/image.rs
use url::Url;

/// Substituted when an article carries no image reference at all.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600?text=Sem+Imagem";

/// The one remote provider whose URLs we know how to rewrite for delivery
/// at a requested width.
const OPTIMIZED_HOST: &str = "images.unsplash.com";

const IMAGE_QUALITY: &str = "80";

/// Delivery resolutions used by the read side of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    /// Card grids and list rows.
    List,
    /// Featured hero placement.
    Hero,
    /// Full article view.
    Detail,
}

impl ImageVariant {
    pub const fn width(self) -> u32 {
        match self {
            Self::List => 800,
            Self::Hero => 1200,
            Self::Detail => 1600,
        }
    }
}

/// Rewrite an image reference to request crop-fit auto-format delivery at the
/// variant width. Pure string transform: no fetch, no reachability check.
///
/// Only references on the recognized provider are touched; the width and
/// quality parameters are replaced rather than appended, so applying the
/// transform twice yields the same URL as applying it once. Empty references
/// resolve to [`PLACEHOLDER_IMAGE`]; unparsable ones pass through unchanged.
pub fn resolve_image_url(reference: &str, variant: ImageVariant) -> String {
    if reference.trim().is_empty() {
        return PLACEHOLDER_IMAGE.to_string();
    }

    let Ok(mut url) = Url::parse(reference) else {
        return reference.to_string();
    };
    if url.host_str() != Some(OPTIMIZED_HOST) {
        return reference.to_string();
    }

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !matches!(key.as_ref(), "auto" | "fit" | "w" | "q"))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(retained.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        pairs.append_pair("auto", "format");
        pairs.append_pair("fit", "crop");
        pairs.append_pair("w", &variant.width().to_string());
        pairs.append_pair("q", IMAGE_QUALITY);
    }

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://images.unsplash.com/photo-1466611653911-95081537e5b7";

    #[test]
    fn provider_url_gets_delivery_parameters() {
        let resolved = resolve_image_url(BASE, ImageVariant::List);
        assert!(resolved.starts_with(BASE));
        assert!(resolved.contains("auto=format"));
        assert!(resolved.contains("fit=crop"));
        assert!(resolved.contains("w=800"));
        assert!(resolved.contains("q=80"));
    }

    #[test]
    fn variant_widths_differ() {
        assert!(resolve_image_url(BASE, ImageVariant::Hero).contains("w=1200"));
        assert!(resolve_image_url(BASE, ImageVariant::Detail).contains("w=1600"));
    }

    #[test]
    fn transform_is_idempotent() {
        let once = resolve_image_url(BASE, ImageVariant::Hero);
        let twice = resolve_image_url(&once, ImageVariant::Hero);
        assert_eq!(once, twice);
    }

    #[test]
    fn reapplication_replaces_width_instead_of_appending() {
        let listed = resolve_image_url(BASE, ImageVariant::List);
        let detailed = resolve_image_url(&listed, ImageVariant::Detail);
        assert_eq!(detailed.matches("w=").count(), 1);
        assert!(detailed.contains("w=1600"));
        assert!(!detailed.contains("w=800"));
    }

    #[test]
    fn unrelated_query_parameters_survive() {
        let resolved = resolve_image_url(
            "https://images.unsplash.com/photo-1?ixlib=rb-4.0",
            ImageVariant::List,
        );
        assert!(resolved.contains("ixlib=rb-4.0"));
        assert!(resolved.contains("w=800"));
    }

    #[test]
    fn foreign_hosts_pass_through() {
        let foreign = "https://example.com/pic.jpg";
        assert_eq!(resolve_image_url(foreign, ImageVariant::Hero), foreign);
    }

    #[test]
    fn empty_reference_becomes_placeholder() {
        assert_eq!(resolve_image_url("", ImageVariant::List), PLACEHOLDER_IMAGE);
        assert_eq!(
            resolve_image_url("   ", ImageVariant::Detail),
            PLACEHOLDER_IMAGE
        );
    }

    #[test]
    fn unparsable_reference_passes_through() {
        assert_eq!(
            resolve_image_url("not a url", ImageVariant::List),
            "not a url"
        );
    }
}
