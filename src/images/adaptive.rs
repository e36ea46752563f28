//! Adaptive image element, modeled as an explicit state machine
//!
//! The browser component drives this from `onload`/`onerror`; here the same
//! transitions are method calls so the machine is testable without a
//! rendering surface. One fallback retry, never a loop: if the fallback
//! fails too, the element stays in `ErroredFinal` and renders the
//! "unavailable" placeholder rather than a broken source.

use log::warn;

use crate::platform::RuntimeProbe;

/// Loading states of an adaptive image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet; no source chosen
    Uninitialized,
    /// A source is chosen and a decode is in flight
    Loading,
    /// The active source decoded successfully
    Loaded,
    /// The active source failed and a fallback retry is in flight
    Errored,
    /// Every candidate source failed; only the placeholder remains
    ErroredFinal,
}

/// An image that picks its source from device capability and survives decode
/// failure via a single fallback retry
#[derive(Debug, Clone)]
pub struct AdaptiveImage {
    primary: String,
    fallback: Option<String>,
    alt: String,
    width: Option<u32>,
    height: Option<u32>,
    active: Option<String>,
    state: LoadState,
    fallback_tried: bool,
}

impl AdaptiveImage {
    pub fn new(primary: &str, fallback: Option<&str>, alt: &str) -> Self {
        AdaptiveImage {
            primary: primary.to_string(),
            fallback: fallback.map(|s| s.to_string()),
            alt: alt.to_string(),
            width: None,
            height: None,
            active: None,
            state: LoadState::Uninitialized,
            fallback_tried: false,
        }
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Source currently being loaded or shown, if any
    pub fn active_source(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Choose the initial source and start loading.
    ///
    /// Older browsers get the fallback source up front when one exists;
    /// everyone else starts from the primary. Mounting twice restarts the
    /// machine.
    pub fn mount(&mut self, probe: &dyn RuntimeProbe) {
        let initial = if probe.is_older_browser() {
            match &self.fallback {
                Some(fb) => {
                    self.fallback_tried = true;
                    fb.clone()
                }
                None => self.primary.clone(),
            }
        } else {
            self.fallback_tried = false;
            self.primary.clone()
        };

        self.active = Some(initial);
        self.state = LoadState::Loading;
    }

    /// The rendering surface reported a successful decode
    pub fn decode_succeeded(&mut self) {
        if matches!(self.state, LoadState::Loading | LoadState::Errored) {
            self.state = LoadState::Loaded;
        }
    }

    /// The rendering surface reported a decode failure.
    ///
    /// Switches to the fallback source exactly once; a second failure (or a
    /// failure with no distinct fallback available) is terminal.
    pub fn decode_failed(&mut self) {
        if !matches!(self.state, LoadState::Loading | LoadState::Errored) {
            return;
        }

        let retry = match &self.fallback {
            Some(fb) if !self.fallback_tried && self.active.as_deref() != Some(fb.as_str()) => {
                Some(fb.clone())
            }
            _ => None,
        };

        match retry {
            Some(fb) => {
                warn!("image decode failed for {:?}, retrying with fallback", self.active);
                self.fallback_tried = true;
                self.active = Some(fb);
                self.state = LoadState::Errored;
            }
            None => {
                warn!("image decode failed for {:?}, no fallback left", self.active);
                self.state = LoadState::ErroredFinal;
            }
        }
    }

    /// Render to markup. Never an empty element: before anything resolves
    /// the output is a placeholder sized to the requested dimensions, so the
    /// surrounding layout does not shift when the real image arrives.
    pub fn render(&self) -> String {
        let style = match (self.width, self.height) {
            (Some(w), Some(h)) => format!("width:{}px;height:{}px", w, h),
            _ => "width:100%;height:100%".to_string(),
        };

        match self.state {
            LoadState::Uninitialized | LoadState::Loading | LoadState::Errored => format!(
                r#"<div class="image-placeholder" style="{}"><span>Loading...</span></div>"#,
                style
            ),
            LoadState::ErroredFinal => format!(
                r#"<div class="image-unavailable" style="{}"><span>Image not available</span></div>"#,
                style
            ),
            LoadState::Loaded => {
                let src = self.active.as_deref().unwrap_or("/placeholder.svg");
                let dims = match (self.width, self.height) {
                    (Some(w), Some(h)) => format!(r#" width="{}" height="{}""#, w, h),
                    _ => String::new(),
                };
                format!(
                    r#"<img src="{}" alt="{}"{} loading="lazy">"#,
                    src, self.alt, dims
                )
            }
        }
    }
}
