//! Folio - terminal portfolio renderer
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::future::Future;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::{animate, print_page, status, LiveLine};
use folio::config::FolioConfig;
use folio::log::{JsonlLogger, RunRecord, StopReason};
use folio::portfolio::{PageRenderer, Reveal, Section};
use folio::typewriter::Typewriter;

/// Terminal portfolio renderer
///
/// Prints a personal portfolio page and animates the hero's roles with a
/// typewriter until the duration elapses or Ctrl-C is pressed.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Path to a folio.toml configuration file (folio.toml in the current directory if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only render these sections (repeatable), e.g. --section skills
    #[arg(long = "section", value_name = "NAME")]
    sections: Vec<Section>,

    /// Stop the typewriter after this many seconds (runs until Ctrl-C otherwise)
    #[arg(long)]
    duration_secs: Option<u64>,

    /// Print the page without the typewriter animation
    #[arg(long)]
    no_animate: bool,

    /// Print sections at once instead of line by line
    #[arg(long)]
    no_reveal: bool,

    /// Directory for the run log (no log is written when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Load the configuration named on the command line, or the default file if present.
fn load_config(path: Option<&PathBuf>) -> Result<FolioConfig> {
    match path {
        Some(path) => FolioConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display())),
        None => FolioConfig::load_or_default("folio.toml"),
    }
}

/// Requested sections in the order given, without repeats. Empty means all.
fn resolve_sections(requested: &[Section]) -> Vec<Section> {
    if requested.is_empty() {
        return Section::ALL.to_vec();
    }
    let mut sections = Vec::with_capacity(requested.len());
    for section in requested {
        if !sections.contains(section) {
            sections.push(*section);
        }
    }
    sections
}

/// Gap between revealed lines. Output that is not a terminal is written at once.
fn reveal_stagger(no_reveal: bool, is_terminal: bool, configured: Duration) -> Duration {
    if no_reveal || !is_terminal {
        Duration::ZERO
    } else {
        configured
    }
}

/// Rows to move up to repaint the hero's typed line, if it is still on screen.
///
/// `None` means the live line goes below the page instead.
fn live_line_anchor(rows_up: Option<usize>, terminal_rows: Option<u16>) -> Option<u16> {
    let rows_up = u16::try_from(rows_up?).ok()?;
    (rows_up > 0 && rows_up < terminal_rows?).then_some(rows_up)
}

/// Resolve when `signal` fires or `duration` elapses, whichever comes first.
///
/// If the signal cannot be listened for, the failure is reported and the run
/// continues until `duration` (or stops right away when there is none).
async fn stop_after<S>(duration: Option<Duration>, signal: S) -> StopReason
where
    S: Future<Output = std::io::Result<()>>,
{
    let elapsed = async {
        match duration {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending().await,
        }
    };
    tokio::pin!(elapsed);

    tokio::select! {
        () = &mut elapsed => StopReason::Elapsed,
        result = signal => match result {
            Ok(()) => StopReason::Interrupted,
            Err(err) => {
                status(&format!("cannot listen for Ctrl-C: {err}"));
                if duration.is_some() {
                    elapsed.await;
                    StopReason::Elapsed
                } else {
                    StopReason::Interrupted
                }
            }
        },
    }
}

/// Resolve when the run should end: after `duration` or on Ctrl-C.
async fn wait_for_stop(duration: Option<Duration>) -> StopReason {
    stop_after(duration, tokio::signal::ctrl_c()).await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let started = Instant::now();

    let config = load_config(cli.config.as_ref())?;
    let portfolio = config.portfolio();
    let sections = resolve_sections(&cli.sections);
    let renderer = PageRenderer::new(config.layout.width);
    let is_terminal = std::io::stdout().is_terminal();
    let mut reveal = Reveal::new(reveal_stagger(
        cli.no_reveal,
        is_terminal,
        config.reveal.stagger(),
    ));

    // Initialize the run log before printing so a bad directory fails fast
    let logger = cli
        .log_dir
        .as_ref()
        .map(JsonlLogger::new)
        .transpose()
        .context("Failed to initialize JSONL logger")?;

    let animated = !cli.no_animate
        && !portfolio.roles.is_empty()
        && sections.contains(&Section::Home)
        && is_terminal;

    let mut typewriter = Typewriter::new(
        portfolio.roles.clone(),
        config.typewriter.interval(),
        config.typewriter.cursor(),
    );

    let typed = if animated {
        typewriter.current()
    } else {
        portfolio.roles.join(" · ")
    };
    let rows_up = print_page(
        &renderer,
        &portfolio,
        &sections,
        &typed,
        &mut reveal,
        &mut std::io::stdout(),
    )
    .await?;

    let stopped_by = if animated {
        let terminal_rows = crossterm::terminal::size().ok().map(|(_, rows)| rows);
        let mut line = match live_line_anchor(rows_up, terminal_rows) {
            Some(rows) => LiveLine::anchored(std::io::stdout(), rows),
            None => LiveLine::new(std::io::stdout()),
        };
        let stop = wait_for_stop(cli.duration_secs.map(Duration::from_secs));
        animate(&mut typewriter, &mut line, stop).await?
    } else {
        StopReason::Static
    };

    if let Some(logger) = logger {
        let record = RunRecord {
            timestamp: chrono::Utc::now(),
            sections,
            roles: typewriter.word_count(),
            ticks: typewriter.ticks(),
            duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            stopped_by,
        };
        logger
            .append(&record)
            .context("Failed to write to JSONL log")?;
        status(&format!("logged run to {}", logger.log_path().display()));
    }

    Ok(())
}
