//! Folio - terminal portfolio renderer
//!
//! Folio paints a single-page personal portfolio into the terminal: hero,
//! about, skills, projects, achievements, hobbies, and contact. Sections are
//! revealed line by line and the hero's role line is animated by a typewriter.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod log;
pub mod portfolio;
pub mod typewriter;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use cli::{animate, print_page, LiveLine};
pub use config::FolioConfig;
pub use log::{JsonlLogger, RunRecord, StopReason};
pub use portfolio::{PageRenderer, Portfolio, Reveal, Section};
pub use typewriter::{Cursor, CursorMode, Cycler, Mode, Typewriter};
