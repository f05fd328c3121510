//! JSONL (JSON Lines) run log
//!
//! Provides append-only logging of render runs to `<log_dir>/runs.jsonl`

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::portfolio::Section;

/// Why the animation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The requested duration elapsed
    Elapsed,
    /// The user pressed Ctrl-C
    Interrupted,
    /// Animation was disabled or had nothing to animate
    Static,
}

/// Summary of a single render run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunRecord {
    /// ISO 8601 timestamp of when the run finished
    pub timestamp: DateTime<Utc>,
    /// Sections that were rendered, in order
    pub sections: Vec<Section>,
    /// Number of roles the typewriter cycled through
    pub roles: usize,
    /// Typewriter ticks applied
    pub ticks: u64,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
    /// How the run ended
    pub stopped_by: StopReason,
}

/// JSONL logger for render runs
///
/// Each line is a JSON object representing a single run.
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a new JSONL logger, creating `log_dir` if needed
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join("runs.jsonl"),
        })
    }

    /// Append a run record to the log
    pub fn append(&self, record: &RunRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json = serde_json::to_string(record).context("Failed to serialize run record")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all run records, oldest first. A missing log is empty.
    pub fn read_all(&self) -> Result<Vec<RunRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();
        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: RunRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;
            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
