//! Staggered, once-only reveal of page sections
//!
//! The first time a section is shown its lines appear one after another,
//! `stagger` apart. Showing it again prints everything at once.

use std::collections::HashSet;
use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use super::data::Section;

/// Tracks which sections have already been revealed
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    stagger: Duration,
    revealed: HashSet<Section>,
}

impl Reveal {
    /// Create a reveal with the given gap between lines
    #[must_use]
    pub fn new(stagger: Duration) -> Self {
        Self {
            stagger,
            revealed: HashSet::new(),
        }
    }

    /// Whether `section` has been revealed before
    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Write `lines` to `out`, staggered on the first reveal of `section`.
    pub async fn reveal<W: Write>(
        &mut self,
        section: Section,
        lines: &[String],
        out: &mut W,
    ) -> Result<()> {
        let animate = self.revealed.insert(section) && !self.stagger.is_zero();

        for (i, line) in lines.iter().enumerate() {
            if animate && i > 0 {
                out.flush().context("Failed to flush output")?;
                tokio::time::sleep(self.stagger).await;
            }
            writeln!(out, "{line}").context("Failed to write section line")?;
        }
        out.flush().context("Failed to flush output")?;
        Ok(())
    }
}
