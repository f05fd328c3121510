//! Typewriter cycler state machine
//!
//! Types out each word one character at a time, deletes it at double speed,
//! then moves on to the next word, forever. The cycler is pure: it never
//! sleeps. Callers drive it with [`Cycler::tick`] and wait for the returned
//! delay before ticking again.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Direction the displayed text is currently moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Growing one character per tick
    Typing,
    /// Shrinking one character per tick
    Deleting,
}

/// When the cursor marker is appended to the rendered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorMode {
    /// Show the marker while typing, hide it while deleting
    #[default]
    Typing,
    /// Always show the marker
    Always,
}

/// Cursor marker appended to the displayed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Marker text, usually `|`
    pub marker: String,
    /// Visibility rule
    pub mode: CursorMode,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            marker: "|".to_string(),
            mode: CursorMode::Typing,
        }
    }
}

/// Typewriter state: which word, how much of it is shown, and which way it is moving
#[derive(Debug, Clone)]
pub struct Cycler {
    words: Vec<String>,
    index: usize,
    /// Number of characters (not bytes) of the current word on display
    shown: usize,
    mode: Mode,
    base: Duration,
}

impl Cycler {
    /// Create a cycler at word 0 with nothing typed yet
    #[must_use]
    pub const fn new(words: Vec<String>, base: Duration) -> Self {
        Self {
            words,
            index: 0,
            shown: 0,
            mode: Mode::Typing,
            base,
        }
    }

    /// The word list this cycler walks through
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Index of the word currently being typed or deleted
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current direction
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Base (typing) tick interval
    #[must_use]
    pub const fn base_interval(&self) -> Duration {
        self.base
    }

    /// Whether there is anything to cycle through
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.words.is_empty()
    }

    /// Delay to wait before the next tick, or `None` when there is nothing to animate.
    ///
    /// Deleting runs at twice the typing speed.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        if self.is_idle() {
            return None;
        }
        Some(match self.mode {
            Mode::Typing => self.base,
            Mode::Deleting => self.base / 2,
        })
    }

    /// Advance one character and return the delay before the following tick.
    pub fn tick(&mut self) -> Option<Duration> {
        if self.is_idle() {
            return None;
        }

        let target_len = self.words[self.index].chars().count();
        match self.mode {
            Mode::Typing => {
                if self.shown < target_len {
                    self.shown += 1;
                }
                if self.shown >= target_len {
                    self.mode = Mode::Deleting;
                }
            }
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.mode = Mode::Typing;
                    self.index = (self.index + 1) % self.words.len();
                }
            }
        }

        self.next_delay()
    }

    /// The displayed prefix of the current word, without cursor
    #[must_use]
    pub fn text(&self) -> &str {
        let Some(word) = self.words.get(self.index) else {
            return "";
        };
        let end = word
            .char_indices()
            .nth(self.shown)
            .map_or(word.len(), |(byte, _)| byte);
        &word[..end]
    }

    /// Displayed text with the cursor marker applied.
    ///
    /// An idle cycler renders as the empty string.
    #[must_use]
    pub fn render(&self, cursor: &Cursor) -> String {
        if self.is_idle() {
            return String::new();
        }
        let show_marker = match cursor.mode {
            CursorMode::Always => true,
            CursorMode::Typing => self.mode == Mode::Typing,
        };
        if show_marker {
            format!("{}{}", self.text(), cursor.marker)
        } else {
            self.text().to_string()
        }
    }

    /// Replace the word list.
    ///
    /// A different list puts the cycler back at word 0 with nothing typed.
    /// Returns `true` if the state was reset.
    pub fn set_words(&mut self, words: Vec<String>) -> bool {
        if words == self.words {
            return false;
        }
        self.words = words;
        self.index = 0;
        self.shown = 0;
        self.mode = Mode::Typing;
        true
    }
}
