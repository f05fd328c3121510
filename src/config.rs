//! Folio configuration parser
//!
//! Parses `folio.toml` into typewriter, reveal, and layout settings plus an
//! optional profile that replaces the built-in portfolio.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::portfolio::Portfolio;
use crate::typewriter::{Cursor, CursorMode};

/// Typewriter settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Base tick interval in milliseconds; deleting runs at half this (default: 70)
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
    /// Cursor marker text (default: "|")
    #[serde(default = "default_cursor")]
    pub cursor: String,
    /// When to show the cursor marker
    #[serde(default)]
    pub cursor_mode: CursorMode,
}

const fn default_speed_ms() -> u64 {
    70
}

fn default_cursor() -> String {
    "|".to_string()
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_speed_ms(),
            cursor: default_cursor(),
            cursor_mode: CursorMode::default(),
        }
    }
}

impl TypewriterConfig {
    /// Base tick interval
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Cursor marker settings for the cycler
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            marker: self.cursor.clone(),
            mode: self.cursor_mode,
        }
    }
}

/// Section reveal settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevealConfig {
    /// Whether sections are revealed line by line (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Gap between revealed lines in milliseconds (default: 100)
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_stagger_ms() -> u64 {
    100
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stagger_ms: default_stagger_ms(),
        }
    }
}

impl RevealConfig {
    /// Effective stagger: zero when the reveal is disabled
    #[must_use]
    pub const fn stagger(&self) -> Duration {
        if self.enabled {
            Duration::from_millis(self.stagger_ms)
        } else {
            Duration::ZERO
        }
    }
}

/// Page layout settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Wrap width in columns (default: 72)
    #[serde(default = "default_width")]
    pub width: usize,
}

const fn default_width() -> usize {
    72
}

const MIN_WIDTH: usize = 20;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
        }
    }
}

/// Top-level configuration parsed from folio.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FolioConfig {
    /// Typewriter settings
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    /// Reveal settings
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Layout settings
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Page content; the built-in portfolio when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Portfolio>,
}

impl FolioConfig {
    /// Parse a folio.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse folio.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse folio.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// The portfolio to render
    #[must_use]
    pub fn portfolio(&self) -> Portfolio {
        self.profile.clone().unwrap_or_default()
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.typewriter.speed_ms == 0 {
            bail!("typewriter.speed_ms must be greater than 0");
        }

        if self.layout.width < MIN_WIDTH {
            bail!(
                "layout.width must be at least {MIN_WIDTH}, got {}",
                self.layout.width
            );
        }

        if let Some(profile) = &self.profile {
            if profile.name.trim().is_empty() {
                bail!("profile.name cannot be empty");
            }
        }

        Ok(())
    }
}
