use atelier::images::ImageResolver;
use atelier::platform::{
    classify_quality, DeviceProfile, EffectiveType, FixedProbe, HeadlessProbe, NetworkHints,
    QualityTier, RuntimeProbe,
};
use atelier::SiteConfig;

const OLD_ANDROID: &str = "Mozilla/5.0 (Linux; Android 4.4.2; GT-I9505) AppleWebKit/537.36";
const MODERN: &str = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/115.0";

#[test]
fn resolver_matches_site_base_url() {
    let config = SiteConfig::default();
    let resolver = ImageResolver::from_config(&config);
    assert_eq!(
        resolver.resolve("hero-background.jpg"),
        "https://ik.imagekit.io/ufbtcakpl/hero-background.jpg"
    );
}

#[test]
fn resolver_on_custom_host() {
    let resolver = ImageResolver::new("https://h/", "/placeholder.svg");
    assert_eq!(resolver.resolve("hero-background.jpg"), "https://h/hero-background.jpg");
}

#[test]
fn resolve_never_returns_empty_for_any_input() {
    let resolver = ImageResolver::new("https://h/", "/placeholder.svg");
    for name in ["", "/", "//", "a.jpg", "/a.jpg", "   ", "deep/path/img.png"] {
        let out = resolver.resolve(name);
        assert!(!out.is_empty(), "empty resolution for {:?}", name);
    }
    assert_eq!(resolver.resolve("/a.jpg"), resolver.resolve("a.jpg"));
}

#[test]
fn quality_tiers_across_probe_fixtures() {
    // Old device wins over a fast network
    let old = FixedProbe::with_hints(DeviceProfile::modern(OLD_ANDROID), NetworkHints::fast());
    assert_eq!(old.quality(), QualityTier::Low);
    assert!(old.is_older_browser());

    // Modern device, no connection API
    let modern = FixedProbe::new(DeviceProfile::modern(MODERN));
    assert_eq!(modern.quality(), QualityTier::High);

    // Modern device on 3g
    let on_3g = FixedProbe::with_hints(
        DeviceProfile::modern(MODERN),
        NetworkHints {
            save_data: false,
            effective_type: EffectiveType::ThreeG,
        },
    );
    assert_eq!(on_3g.quality(), QualityTier::Medium);

    // No browser at all
    assert_eq!(HeadlessProbe::new().quality(), QualityTier::Medium);
}

#[test]
fn classification_is_pure_over_repeated_calls() {
    let profile = DeviceProfile::modern(MODERN);
    let hints = NetworkHints {
        save_data: true,
        effective_type: EffectiveType::FourG,
    };
    let expected = classify_quality(Some(&profile), Some(&hints));
    for _ in 0..100 {
        assert_eq!(classify_quality(Some(&profile), Some(&hints)), expected);
    }
    assert_eq!(expected, QualityTier::Low);
}
