//! Image delivery: URL resolution, the named asset catalog, and the
//! adaptive load/error/fallback state machine

pub mod adaptive;
pub mod resolver;

pub use adaptive::{AdaptiveImage, LoadState};
pub use resolver::{ImageCatalog, ImageResolver};
