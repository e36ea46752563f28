//! Per-section error boundary
//!
//! A defect in one section must not blank the rest of the page. The
//! boundary catches both `Err` returns and panics out of a renderer and
//! substitutes a retry affordance in place of that section only.

use std::panic::{self, AssertUnwindSafe};

use log::error;

use super::sections::{RenderCtx, Section};

pub struct Boundary;

impl Boundary {
    /// Render a section, containing any failure to that section's subtree
    pub fn render(section: &dyn Section, ctx: &RenderCtx) -> String {
        let id = section.id();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| section.render(ctx)));

        match outcome {
            Ok(Ok(html)) => html,
            Ok(Err(e)) => {
                error!("section '{}' failed to render: {}", id, e);
                Self::fallback(id)
            }
            Err(_) => {
                error!("section '{}' panicked while rendering", id);
                Self::fallback(id)
            }
        }
    }

    fn fallback(id: &str) -> String {
        format!(
            concat!(
                r#"<div class="section-error" data-section="{}">"#,
                r#"<h2>Something went wrong</h2>"#,
                r#"<p>This part of the page encountered an error.</p>"#,
                r#"<button type="button" class="retry">Try again</button></div>"#
            ),
            id
        )
    }
}
