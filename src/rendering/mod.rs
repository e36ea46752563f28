//! HTML rendering: page sections, per-section error containment, and the
//! full-page composition

pub mod boundary;
pub mod page;
pub mod sections;

pub use boundary::Boundary;
pub use page::Page;
pub use sections::{
    ContactFaq, CustomizeSection, Footer, Gallery, GalleryFilter, Hero, Navigation, Product,
    RenderCtx, Section, Storytelling,
};
