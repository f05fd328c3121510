//! Terminal display for the portfolio page
//!
//! The page goes to the given writer (stdout in the binary). The typewriter
//! line is repainted in place while it animates: on the hero's own row when
//! that row is still on screen, otherwise on the row below the page.

use std::future::Future;
use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;
use crossterm::cursor::{MoveToColumn, MoveUp, RestorePosition, SavePosition};
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use tokio::sync::watch;

use crate::log::StopReason;
use crate::portfolio::render::typed_line;
use crate::portfolio::{PageRenderer, Portfolio, Reveal, Section};
use crate::typewriter::Typewriter;

/// A single terminal line repainted on every typewriter frame
pub struct LiveLine<W: Write> {
    out: W,
    frames: u64,
    /// Rows above the cursor where the line lives; 0 paints on the cursor row
    rows_up: u16,
}

impl<W: Write> LiveLine<W> {
    /// Create a live line on the cursor's current row
    pub const fn new(out: W) -> Self {
        Self {
            out,
            frames: 0,
            rows_up: 0,
        }
    }

    /// Create a live line `rows_up` rows above the cursor. The cursor is
    /// restored after every frame, so output below is left alone.
    pub const fn anchored(out: W, rows_up: u16) -> Self {
        Self {
            out,
            frames: 0,
            rows_up,
        }
    }

    /// Number of frames painted so far
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Clear the live row and paint `text` on it
    pub fn paint(&mut self, text: &str) -> Result<()> {
        let line = typed_line(text);
        if self.rows_up == 0 {
            queue!(
                self.out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(line)
            )
        } else {
            queue!(
                self.out,
                SavePosition,
                MoveUp(self.rows_up),
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(line),
                RestorePosition
            )
        }
        .context("Failed to paint line")?;
        self.out.flush().context("Failed to flush output")?;
        self.frames += 1;
        Ok(())
    }

    /// End the live line so later output starts on a fresh row
    pub fn finish(&mut self) -> Result<()> {
        if self.rows_up == 0 {
            writeln!(self.out).context("Failed to finish line")?;
        }
        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print the navbar, the requested sections (through the reveal), and the footer.
///
/// The hero's typed line shows `typed`. Returns how many rows above the final
/// cursor position that line ended up, or `None` when the hero was not printed.
pub async fn print_page<W: Write>(
    renderer: &PageRenderer,
    portfolio: &Portfolio,
    sections: &[Section],
    typed: &str,
    reveal: &mut Reveal,
    out: &mut W,
) -> Result<Option<usize>> {
    let mut written = 0usize;
    let mut typed_row = None;

    for line in renderer.navbar(portfolio) {
        writeln!(out, "{line}").context("Failed to write navbar")?;
        written += 1;
    }
    for &section in sections {
        let lines = renderer.section(section, portfolio, typed);
        if section == Section::Home && typed_row.is_none() {
            let marker = typed_line(typed);
            typed_row = lines.iter().position(|l| *l == marker).map(|i| written + i);
        }
        reveal.reveal(section, &lines, out).await?;
        written += lines.len();
    }
    for line in renderer.footer(portfolio) {
        writeln!(out, "{line}").context("Failed to write footer")?;
        written += 1;
    }
    out.flush().context("Failed to flush output")?;
    Ok(typed_row.map(|row| written - row))
}

/// Run the typewriter, repainting `line` on every change until `stop` resolves.
///
/// The typewriter is stopped before this returns, on error paths too, so no
/// pending tick outlives it.
pub async fn animate<W, F>(
    typewriter: &mut Typewriter,
    line: &mut LiveLine<W>,
    stop: F,
) -> Result<StopReason>
where
    W: Write,
    F: Future<Output = StopReason>,
{
    typewriter.start();
    let mut rx = typewriter.subscribe();
    let painted = repaint_until(&mut rx, line, stop).await;
    typewriter.stop();

    let reason = painted?;
    line.finish()?;
    Ok(reason)
}

async fn repaint_until<W, F>(
    rx: &mut watch::Receiver<String>,
    line: &mut LiveLine<W>,
    stop: F,
) -> Result<StopReason>
where
    W: Write,
    F: Future<Output = StopReason>,
{
    let first = rx.borrow_and_update().clone();
    line.paint(&first)?;

    tokio::pin!(stop);
    loop {
        tokio::select! {
            reason = &mut stop => return Ok(reason),
            changed = rx.changed() => {
                if changed.is_err() {
                    return Ok(StopReason::Static);
                }
                let text = rx.borrow_and_update().clone();
                line.paint(&text)?;
            }
        }
    }
}

/// Print a status message to stderr
pub fn status(message: &str) {
    eprintln!("{} {}", "folio:".bold().cyan(), message);
}
