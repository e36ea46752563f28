//! Full-page composition

use crate::capture::CustomizationForm;
use crate::platform::RuntimeProbe;
use crate::SiteConfig;

use super::boundary::Boundary;
use super::sections::{
    ContactFaq, CustomizeSection, Footer, Gallery, Hero, Navigation, RenderCtx, Section,
    Storytelling,
};

/// The landing page: navigation plus every section, each wrapped in the
/// error boundary so a single failing section never takes down its siblings
pub struct Page {
    config: SiteConfig,
    pub navigation: Navigation,
    pub gallery: Gallery,
    pub faq: ContactFaq,
    pub form: CustomizationForm,
}

impl Page {
    pub fn new(config: SiteConfig) -> Self {
        let form = CustomizationForm::new(&config);
        Page {
            config,
            navigation: Navigation::new(),
            gallery: Gallery::new(),
            faq: ContactFaq::new(),
            form,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Scroll event: drives the navigation scroll-spy
    pub fn on_scroll(&mut self, scroll_y: f64) {
        let threshold = self.config.scroll_nav_threshold;
        self.navigation.on_scroll(scroll_y, threshold);
    }

    /// Render the full document with the given probe's capability signals
    pub fn render(&self, probe: &dyn RuntimeProbe) -> String {
        let ctx = RenderCtx::new(self.config.clone(), probe);
        self.render_with_ctx(&ctx)
    }

    pub fn render_with_ctx(&self, ctx: &RenderCtx) -> String {
        let hero = Hero::new();
        let storytelling = Storytelling::new();
        let customize = CustomizeSection::new(&self.form);
        let footer = Footer::new();

        let sections: [&dyn Section; 7] = [
            &self.navigation,
            &hero,
            &storytelling,
            &customize,
            &self.gallery,
            &self.faq,
            &footer,
        ];

        let mut body = String::new();
        for section in sections {
            body.push_str(&Boundary::render(section, ctx));
        }

        format!(
            concat!(
                "<!DOCTYPE html>",
                r#"<html lang="en"><head><meta charset="utf-8">"#,
                "<title>Signature Jewelry</title></head>",
                r#"<body class="site">{}</body></html>"#
            ),
            body
        )
    }
}
