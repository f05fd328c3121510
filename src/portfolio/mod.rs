//! Portfolio page
//!
//! Static page data, the per-section terminal views, and the staggered reveal.

pub mod data;
pub mod render;
pub mod reveal;

pub use data::{Achievement, Portfolio, Project, Section, Service};
pub use render::PageRenderer;
pub use reveal::Reveal;
