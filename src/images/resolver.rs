//! Asset-name to delivery-URL resolution
//!
//! Resolution is pure string composition against a fixed delivery host. It
//! deliberately avoids `url::Url`: the same code path runs where no browser
//! (and historically no URL constructor) is available, and a presentational
//! page must never crash over a malformed filename. Any input the resolver
//! cannot make sense of yields the fixed placeholder path instead.

use crate::SiteConfig;

/// Maps logical asset names onto the delivery host, with fail-safe fallback
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
    fallback: String,
}

impl ImageResolver {
    pub fn new(base_url: &str, fallback: &str) -> Self {
        ImageResolver {
            base_url: base_url.to_string(),
            fallback: fallback.to_string(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.image_base_url, &config.placeholder_path)
    }

    /// Resolve a logical asset name to a delivery URL.
    ///
    /// Leading slashes are stripped so `resolve("/a.jpg")` and
    /// `resolve("a.jpg")` agree; exactly one slash separates the base from
    /// the name. Never fails: an empty or all-slash name, or an empty
    /// configured base, resolves to the placeholder path.
    pub fn resolve(&self, name: &str) -> String {
        let clean = name.trim().trim_start_matches('/');
        if clean.is_empty() || self.base_url.trim().is_empty() {
            return self.fallback();
        }

        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}", base, clean)
    }

    /// The fixed local fallback used when resolution cannot proceed
    pub fn fallback(&self) -> String {
        if self.fallback.is_empty() {
            // Last-resort constant so the contract of "never empty" holds
            // even against a broken config.
            "/placeholder.svg".to_string()
        } else {
            self.fallback.clone()
        }
    }
}

/// The site's named images, resolved eagerly at construction
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    // Hero
    pub hero_background: String,
    pub hero_background_mobile: String,

    // Storytelling
    pub signature_ring_closeup: String,
    pub jewelry_materials: String,
    pub signature_process: String,

    // Product gallery
    pub signature_ring_rose_gold: String,
    pub signature_necklace_yellow_gold: String,
    pub signature_bracelet_silver: String,
    pub signature_ring_platinum: String,
    pub signature_earrings_white_gold: String,
    pub signature_necklace_rose_gold: String,
}

impl ImageCatalog {
    pub fn new(resolver: &ImageResolver) -> Self {
        ImageCatalog {
            hero_background: resolver.resolve("hero-background.jpg"),
            hero_background_mobile: resolver.resolve("hero-background-mobile.jpg"),

            signature_ring_closeup: resolver.resolve("signature-ring-closeup.jpg"),
            jewelry_materials: resolver.resolve("jewelry-materials.jpg"),
            signature_process: resolver.resolve("signature-process.jpg"),

            signature_ring_rose_gold: resolver.resolve("signature-ring-rose-gold.jpg"),
            signature_necklace_yellow_gold: resolver.resolve("signature-necklace-yellow-gold.jpg"),
            signature_bracelet_silver: resolver.resolve("signature-bracelet-silver.jpg"),
            signature_ring_platinum: resolver.resolve("signature-ring-platinum.jpg"),
            signature_earrings_white_gold: resolver.resolve("signature-earrings-white-gold.jpg"),
            signature_necklace_rose_gold: resolver.resolve("signature-necklace-rose-gold.jpg"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ImageResolver {
        ImageResolver::new("https://h/", "/placeholder.svg")
    }

    #[test]
    fn composes_base_and_name_with_one_slash() {
        assert_eq!(resolver().resolve("hero-background.jpg"), "https://h/hero-background.jpg");

        // Base without trailing slash behaves the same
        let r = ImageResolver::new("https://h", "/placeholder.svg");
        assert_eq!(r.resolve("a.jpg"), "https://h/a.jpg");
    }

    #[test]
    fn leading_slashes_are_stripped() {
        let r = resolver();
        assert_eq!(r.resolve("/a.jpg"), r.resolve("a.jpg"));
        assert_eq!(r.resolve("///a.jpg"), r.resolve("a.jpg"));
    }

    #[test]
    fn malformed_names_resolve_to_fallback() {
        let r = resolver();
        assert_eq!(r.resolve(""), "/placeholder.svg");
        assert_eq!(r.resolve("   "), "/placeholder.svg");
        assert_eq!(r.resolve("////"), "/placeholder.svg");
    }

    #[test]
    fn resolution_is_never_empty() {
        let broken = ImageResolver::new("", "");
        let out = broken.resolve("a.jpg");
        assert!(!out.is_empty());
        assert_eq!(out, "/placeholder.svg");
    }

    #[test]
    fn catalog_resolves_every_entry() {
        let catalog = ImageCatalog::new(&resolver());
        assert_eq!(catalog.hero_background, "https://h/hero-background.jpg");
        assert_eq!(
            catalog.signature_necklace_rose_gold,
            "https://h/signature-necklace-rose-gold.jpg"
        );
        assert!(catalog.hero_background_mobile.ends_with("hero-background-mobile.jpg"));
    }
}
