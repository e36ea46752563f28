//! Atelier Site Engine
//!
//! A headless engine for a custom-jewelry marketing site. The browser build
//! of the site is view-layer glue; this crate models the parts with durable
//! contracts as explicit state machines and pure functions:
//!
//! - **Asset resolution**: logical asset names composed onto a fixed
//!   delivery host, with fail-safe fallback (`images::ImageResolver`)
//! - **Capability probing**: device and network signals behind an injectable
//!   provider so the same code runs with no browser present (`platform`)
//! - **Adaptive images**: the load/error/fallback-retry machine
//!   (`images::AdaptiveImage`)
//! - **Signature capture**: draw-pad and dropzone acquisition feeding the
//!   customization form machine (`capture`)
//! - **Rendering**: page sections rendered to HTML with per-section error
//!   containment (`rendering`)
//!
//! # Example
//!
//! ```
//! use atelier::{SiteConfig, images::ImageResolver};
//!
//! let config = SiteConfig::default();
//! let resolver = ImageResolver::from_config(&config);
//! let url = resolver.resolve("hero-background.jpg");
//! assert!(url.starts_with("https://"));
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod platform;

pub mod images;

pub mod capture;

pub mod rendering;

// Blob-store upload client (talks HTTP; feature-gated like other optional backends)
#[cfg(feature = "upload")]
pub mod upload;

/// Configuration for the site engine
///
/// Defaults reproduce the shipped site: the ImageKit delivery host, the
/// local placeholder, the 180px signature pad, the 5 MiB upload bound and
/// the simulated submission timings.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Base URL of the image delivery host
    pub image_base_url: String,
    /// Local path served when resolution or loading fails
    pub placeholder_path: String,
    /// Viewport dimensions assumed when no probe reports real ones
    pub viewport: Viewport,
    /// Fixed height of the signature drawing pad, in pixels
    pub pad_height: u32,
    /// Upper bound on an uploaded signature file, in bytes
    pub max_signature_bytes: u64,
    /// Simulated submission latency in milliseconds
    pub submit_delay_ms: u64,
    /// How long the success notice stays up before the form resets
    pub success_display_ms: u64,
    /// Scroll offset after which the navigation bar condenses
    pub scroll_nav_threshold: f64,
    /// Header height subtracted when scrolling to a section anchor
    pub scroll_nav_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            image_base_url: "https://ik.imagekit.io/ufbtcakpl".to_string(),
            placeholder_path: "/placeholder.svg".to_string(),
            viewport: Viewport::default(),
            pad_height: 180,
            max_signature_bytes: 5 * 1024 * 1024,
            submit_delay_ms: 1500,
            success_display_ms: 3000,
            scroll_nav_threshold: 50.0,
            scroll_nav_offset: 80.0,
        }
    }
}

impl SiteConfig {
    /// Validate the configuration.
    ///
    /// The base URL must be non-empty and parseable; everything else has a
    /// safe interpretation at any value.
    pub fn validate(&self) -> Result<()> {
        if self.image_base_url.trim().is_empty() {
            return Err(Error::Config("image_base_url must not be empty".into()));
        }
        url::Url::parse(&self.image_base_url)
            .map_err(|e| Error::Config(format!("image_base_url is not a valid URL: {}", e)))?;
        if self.placeholder_path.is_empty() {
            return Err(Error::Config("placeholder_path must not be empty".into()));
        }
        Ok(())
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Width below which the mobile layout and the mobile hero asset apply
    pub const MOBILE_BREAKPOINT: u32 = 768;

    /// Whether this viewport gets the mobile treatment
    pub fn is_mobile(&self) -> bool {
        self.width < Self::MOBILE_BREAKPOINT
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}
