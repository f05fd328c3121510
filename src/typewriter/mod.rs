//! Typewriter text effect
//!
//! A pure state machine ([`cycler`]) and a tokio-driven runner ([`runner`])
//! that owns the single pending tick.

pub mod cycler;
pub mod runner;

pub use cycler::{Cursor, CursorMode, Cycler, Mode};
pub use runner::Typewriter;
