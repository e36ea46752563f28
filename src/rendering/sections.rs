//! Page sections rendered to HTML
//!
//! Sections are presentational; the stateful bits (scroll-spy, gallery
//! filter, FAQ accordion, the customization form) are explicit fields with
//! named transitions rather than implicit toggle flags.

use crate::capture::{CaptureMethod, CustomizationForm, FormState, JewelryKind, Material};
use crate::images::{ImageCatalog, ImageResolver};
use crate::platform::{QualityTier, RuntimeProbe};
use crate::{Result, SiteConfig, Viewport};

/// Everything a section needs to render
#[derive(Debug, Clone)]
pub struct RenderCtx {
    pub config: SiteConfig,
    pub catalog: ImageCatalog,
    pub quality: QualityTier,
    pub viewport: Viewport,
    pub scroll_y: f64,
}

impl RenderCtx {
    pub fn new(config: SiteConfig, probe: &dyn RuntimeProbe) -> Self {
        let resolver = ImageResolver::from_config(&config);
        let catalog = ImageCatalog::new(&resolver);
        let quality = probe.quality();
        let viewport = config.viewport;
        RenderCtx {
            config,
            catalog,
            quality,
            viewport,
            scroll_y: 0.0,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }
}

/// A renderable page section
pub trait Section {
    /// Anchor id used by the navigation
    fn id(&self) -> &'static str;

    fn render(&self, ctx: &RenderCtx) -> Result<String>;
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ---------------------------------------------------------------------------
// Navigation

/// Fixed header with scroll-spy: condenses past the scroll threshold and
/// closes the mobile menu on any scroll
#[derive(Debug, Default)]
pub struct Navigation {
    scrolled: bool,
    menu_open: bool,
}

impl Navigation {
    pub const ITEMS: [&'static str; 4] = ["Home", "Gallery", "Customize", "Contact"];

    pub fn new() -> Self {
        Navigation::default()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Scroll event: update the condensed flag and close an open menu
    pub fn on_scroll(&mut self, scroll_y: f64, threshold: f64) {
        self.scrolled = scroll_y > threshold;
        if self.menu_open {
            self.menu_open = false;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Absolute scroll position targeting a section: its top relative to the
    /// viewport plus the current page offset, minus the fixed-header offset
    pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
        element_top + page_offset - header_offset
    }
}

impl Section for Navigation {
    fn id(&self) -> &'static str {
        "nav"
    }

    fn render(&self, _ctx: &RenderCtx) -> Result<String> {
        let header_class = if self.scrolled { "nav nav-condensed" } else { "nav" };
        let mut links = String::new();
        for item in Self::ITEMS {
            links.push_str(&format!(
                r##"<a href="#{}" class="nav-link">{}</a>"##,
                item.to_lowercase(),
                item
            ));
        }
        let menu = if self.menu_open {
            format!(r#"<div class="nav-menu-mobile">{}</div>"#, links)
        } else {
            String::new()
        };
        Ok(format!(
            r#"<header id="nav" class="{}"><span class="brand">Signature Jewelry</span><nav>{}</nav>{}</header>"#,
            header_class, links, menu
        ))
    }
}

// ---------------------------------------------------------------------------
// Hero

/// Full-height opener with the parallax background
#[derive(Debug, Default)]
pub struct Hero;

impl Hero {
    pub fn new() -> Self {
        Hero
    }

    /// Vertical background offset for the parallax effect; disabled on
    /// mobile where it fights the browser chrome
    pub fn parallax_offset(scroll_y: f64, viewport: &Viewport) -> f64 {
        if viewport.is_mobile() {
            0.0
        } else {
            scroll_y * 0.4
        }
    }

    /// Mobile devices get the smaller hero asset
    pub fn background_url<'a>(catalog: &'a ImageCatalog, viewport: &Viewport) -> &'a str {
        if viewport.is_mobile() {
            &catalog.hero_background_mobile
        } else {
            &catalog.hero_background
        }
    }
}

impl Section for Hero {
    fn id(&self) -> &'static str {
        "home"
    }

    fn render(&self, ctx: &RenderCtx) -> Result<String> {
        let background = Self::background_url(&ctx.catalog, &ctx.viewport);
        let offset = Self::parallax_offset(ctx.scroll_y, &ctx.viewport);
        Ok(format!(
            concat!(
                r#"<section id="home" class="hero">"#,
                r#"<div class="hero-bg" style="background-image:url('{}');transform:translateY({}px)"></div>"#,
                r#"<h1>Your Signature, Immortalized in Jewelry</h1>"#,
                r#"<p>Handcrafted pieces as unique as your own signature</p>"#,
                r##"<a href="#customize" class="cta">Design Your Piece</a>"##,
                r#"</section>"#
            ),
            background, offset
        ))
    }
}

// ---------------------------------------------------------------------------
// Storytelling

/// Three-step craft narrative
#[derive(Debug, Default)]
pub struct Storytelling;

impl Storytelling {
    pub fn new() -> Self {
        Storytelling
    }
}

impl Section for Storytelling {
    fn id(&self) -> &'static str {
        "story"
    }

    fn render(&self, ctx: &RenderCtx) -> Result<String> {
        let steps = [
            (&ctx.catalog.signature_ring_closeup, "Every curve preserved"),
            (&ctx.catalog.jewelry_materials, "Ethically sourced materials"),
            (&ctx.catalog.signature_process, "From ink to metal"),
        ];
        let mut blocks = String::new();
        for (image, caption) in steps {
            blocks.push_str(&format!(
                r#"<figure class="story-step"><img src="{}" alt="{}" loading="lazy"><figcaption>{}</figcaption></figure>"#,
                image,
                escape(caption),
                escape(caption)
            ));
        }
        Ok(format!(
            r#"<section id="story" class="storytelling">{}</section>"#,
            blocks
        ))
    }
}

// ---------------------------------------------------------------------------
// Gallery

/// Client-side gallery filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryFilter {
    #[default]
    All,
    Kind(JewelryKind),
}

/// One gallery piece
#[derive(Debug, Clone)]
pub struct Product {
    pub id: u32,
    pub kind: JewelryKind,
    pub material: Material,
    pub image: String,
}

/// The signature collection with its filter state
#[derive(Debug, Default)]
pub struct Gallery {
    filter: GalleryFilter,
}

impl Gallery {
    pub fn new() -> Self {
        Gallery::default()
    }

    pub fn filter(&self) -> GalleryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: GalleryFilter) {
        self.filter = filter;
    }

    /// The six catalog pieces
    pub fn products(catalog: &ImageCatalog) -> Vec<Product> {
        vec![
            Product { id: 1, kind: JewelryKind::Ring, material: Material::RoseGold, image: catalog.signature_ring_rose_gold.clone() },
            Product { id: 2, kind: JewelryKind::Necklace, material: Material::YellowGold, image: catalog.signature_necklace_yellow_gold.clone() },
            Product { id: 3, kind: JewelryKind::Bracelet, material: Material::Silver, image: catalog.signature_bracelet_silver.clone() },
            Product { id: 4, kind: JewelryKind::Ring, material: Material::Platinum, image: catalog.signature_ring_platinum.clone() },
            Product { id: 5, kind: JewelryKind::Earrings, material: Material::WhiteGold, image: catalog.signature_earrings_white_gold.clone() },
            Product { id: 6, kind: JewelryKind::Necklace, material: Material::RoseGold, image: catalog.signature_necklace_rose_gold.clone() },
        ]
    }

    /// Products visible under the current filter
    pub fn visible(&self, catalog: &ImageCatalog) -> Vec<Product> {
        Self::products(catalog)
            .into_iter()
            .filter(|p| match self.filter {
                GalleryFilter::All => true,
                GalleryFilter::Kind(kind) => p.kind == kind,
            })
            .collect()
    }
}

impl Section for Gallery {
    fn id(&self) -> &'static str {
        "gallery"
    }

    fn render(&self, ctx: &RenderCtx) -> Result<String> {
        let mut cards = String::new();
        for product in self.visible(&ctx.catalog) {
            cards.push_str(&format!(
                concat!(
                    r#"<div class="product" data-kind="{}">"#,
                    r#"<img src="{}" alt="{} {}" loading="lazy">"#,
                    r#"<h3>Signature {}</h3><p>{}</p></div>"#
                ),
                product.kind.label().to_lowercase(),
                product.image,
                escape(product.material.label()),
                product.kind.label().to_lowercase(),
                product.kind.label(),
                escape(product.material.label())
            ));
        }
        Ok(format!(
            r#"<section id="gallery" class="gallery"><h2>Signature Collection</h2><div class="product-grid">{}</div></section>"#,
            cards
        ))
    }
}

// ---------------------------------------------------------------------------
// Customize

/// The customization form section; renders whatever state the form machine
/// is in
pub struct CustomizeSection<'a> {
    form: &'a CustomizationForm,
}

impl<'a> CustomizeSection<'a> {
    pub fn new(form: &'a CustomizationForm) -> Self {
        CustomizeSection { form }
    }
}

impl Section for CustomizeSection<'_> {
    fn id(&self) -> &'static str {
        "customize"
    }

    fn render(&self, _ctx: &RenderCtx) -> Result<String> {
        let method_panel = match self.form.method() {
            CaptureMethod::Draw => {
                r#"<div class="pad-panel"><canvas class="signature-pad"></canvas><button type="button">Clear</button><button type="button">Save Signature</button></div>"#
            }
            CaptureMethod::Upload => {
                r#"<div class="dropzone-panel"><p>Tap to upload your signature</p><p>Supports: JPG, PNG, SVG (Max 5MB)</p></div>"#
            }
        };

        let preview = match self.form.signature() {
            Some(sig) => format!(
                r#"<div class="signature-preview"><img src="{}" alt="Your signature"><p>Signature saved successfully! You can proceed with your design.</p></div>"#,
                sig.to_data_url()
            ),
            None => String::new(),
        };

        let notice = match self.form.last_error() {
            Some(msg) => format!(r#"<div class="validation-notice">{}</div>"#, escape(msg)),
            None => String::new(),
        };

        let (label, disabled) = match self.form.state() {
            FormState::Submitting => ("Processing...", true),
            FormState::Success => ("Request Submitted!", true),
            FormState::Editing => ("Craft My Masterpiece", self.form.signature().is_none()),
        };
        let disabled_attr = if disabled { " disabled" } else { "" };

        Ok(format!(
            concat!(
                r#"<section id="customize" class="customize"><h2>Create Your Signature Piece</h2>"#,
                r#"<form>{}{}{}"#,
                r#"<button type="submit" class="submit"{}>{}</button>"#,
                r#"</form></section>"#
            ),
            method_panel, preview, notice, disabled_attr, label
        ))
    }
}

// ---------------------------------------------------------------------------
// Contact / FAQ

/// Contact form stub plus the FAQ accordion; at most one entry open
#[derive(Debug, Default)]
pub struct ContactFaq {
    open: Option<usize>,
}

impl ContactFaq {
    pub const FAQS: [(&'static str, &'static str); 5] = [
        (
            "How long does the customization process take?",
            "From the time we receive your signature and design preferences, the process typically takes 2-3 weeks.",
        ),
        (
            "Can I use someone else's signature for a gift?",
            "Many customers create signature jewelry as gifts using their loved one's handwriting. Just make sure you have permission.",
        ),
        (
            "What materials do you offer?",
            "Yellow gold, white gold, rose gold, sterling silver, and platinum, all ethically sourced.",
        ),
        (
            "How do you ensure the signature looks authentic?",
            "Precision transfer of the exact curves and lines of your handwriting into the metal.",
        ),
        (
            "Can I make changes after submitting my design?",
            "Yes, you'll receive a digital proof before production begins.",
        ),
    ];

    pub fn new() -> Self {
        ContactFaq::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Toggle an entry; toggling the open one closes it
    pub fn toggle(&mut self, index: usize) {
        if index >= Self::FAQS.len() {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }
}

impl Section for ContactFaq {
    fn id(&self) -> &'static str {
        "contact"
    }

    fn render(&self, _ctx: &RenderCtx) -> Result<String> {
        let mut entries = String::new();
        for (i, (question, answer)) in Self::FAQS.iter().enumerate() {
            let open = self.open == Some(i);
            let body = if open {
                format!(r#"<div class="faq-answer">{}</div>"#, escape(answer))
            } else {
                String::new()
            };
            entries.push_str(&format!(
                r#"<div class="faq-entry{}"><button type="button">{}</button>{}</div>"#,
                if open { " open" } else { "" },
                escape(question),
                body
            ));
        }
        Ok(format!(
            concat!(
                r#"<section id="contact" class="contact-faq">"#,
                r#"<form class="contact-form"><h2>Contact Us</h2>"#,
                r#"<input type="text" name="name" placeholder="Your name" required>"#,
                r#"<input type="email" name="email" placeholder="Your email" required>"#,
                r#"<textarea name="message" placeholder="Your message..." required></textarea>"#,
                r#"<button type="submit">Send Message</button></form>"#,
                r#"<div class="faq"><h2>Frequently Asked Questions</h2>{}</div>"#,
                r#"</section>"#
            ),
            entries
        ))
    }
}

// ---------------------------------------------------------------------------
// Footer

#[derive(Debug, Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Footer
    }
}

impl Section for Footer {
    fn id(&self) -> &'static str {
        "footer"
    }

    fn render(&self, _ctx: &RenderCtx) -> Result<String> {
        Ok(r#"<footer id="footer"><span class="brand">Signature Jewelry</span><p>Handcrafted signature pieces</p></footer>"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessProbe;

    fn ctx() -> RenderCtx {
        RenderCtx::new(SiteConfig::default(), &HeadlessProbe::new())
    }

    #[test]
    fn navigation_condenses_past_threshold_and_closes_menu() {
        let mut nav = Navigation::new();
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        nav.on_scroll(60.0, 50.0);
        assert!(nav.is_scrolled());
        assert!(!nav.is_menu_open(), "scroll closes the menu");

        nav.on_scroll(10.0, 50.0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn scroll_target_subtracts_header_offset() {
        let target = Navigation::scroll_target(300.0, 1200.0, 80.0);
        assert_eq!(target, 1420.0);
    }

    #[test]
    fn hero_parallax_disabled_on_mobile() {
        let desktop = Viewport { width: 1280, height: 720 };
        let mobile = Viewport { width: 390, height: 844 };
        assert_eq!(Hero::parallax_offset(500.0, &desktop), 200.0);
        assert_eq!(Hero::parallax_offset(500.0, &mobile), 0.0);
    }

    #[test]
    fn hero_picks_mobile_asset_under_breakpoint() {
        let ctx = ctx();
        let mobile = Viewport { width: 390, height: 844 };
        assert!(Hero::background_url(&ctx.catalog, &mobile).ends_with("hero-background-mobile.jpg"));
        assert!(Hero::background_url(&ctx.catalog, &ctx.viewport).ends_with("hero-background.jpg"));
    }

    #[test]
    fn gallery_filter_narrows_products() {
        let ctx = ctx();
        let mut gallery = Gallery::new();
        assert_eq!(gallery.visible(&ctx.catalog).len(), 6);

        gallery.set_filter(GalleryFilter::Kind(JewelryKind::Ring));
        let rings = gallery.visible(&ctx.catalog);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|p| p.kind == JewelryKind::Ring));

        gallery.set_filter(GalleryFilter::Kind(JewelryKind::Earrings));
        assert_eq!(gallery.visible(&ctx.catalog).len(), 1);
    }

    #[test]
    fn accordion_keeps_at_most_one_open() {
        let mut faq = ContactFaq::new();
        assert_eq!(faq.open_index(), None);

        faq.toggle(1);
        assert_eq!(faq.open_index(), Some(1));

        faq.toggle(3);
        assert_eq!(faq.open_index(), Some(3));

        faq.toggle(3);
        assert_eq!(faq.open_index(), None);

        faq.toggle(99);
        assert_eq!(faq.open_index(), None);
    }

    #[test]
    fn customize_submit_disabled_without_signature() {
        let form = CustomizationForm::new(&SiteConfig::default());
        let html = CustomizeSection::new(&form).render(&ctx()).unwrap();
        assert!(html.contains("disabled"));
        assert!(html.contains("Craft My Masterpiece"));
    }
}
