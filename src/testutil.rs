//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::Utc;

use crate::log::jsonl::{RunRecord, StopReason};
use crate::portfolio::{Achievement, Portfolio, Project, Section, Service};

/// A small portfolio with one of everything, distinct from the built-in data.
#[must_use]
pub fn make_test_portfolio() -> Portfolio {
    Portfolio {
        name: "Ada Lovelace".to_string(),
        tagline: "Poetical science".to_string(),
        location: "London, England".to_string(),
        email: "mailto:ada@example.com".to_string(),
        github: "https://example.com/ada".to_string(),
        resume_url: "https://example.com/ada.pdf".to_string(),
        roles: vec!["Analyst".to_string(), "Metaphysician".to_string()],
        about: vec!["I write programs for engines that do not exist yet.".to_string()],
        skills: vec!["Mathematics".to_string(), "Translation".to_string()],
        services: vec![Service {
            title: "Notes".to_string(),
            desc: "Annotated translations.".to_string(),
        }],
        projects: vec![Project {
            title: "Difference Engine Notes".to_string(),
            desc: "An algorithm for the Analytical Engine.".to_string(),
            tags: vec!["Bernoulli".to_string()],
            github: "https://example.com/notes".to_string(),
        }],
        achievements: vec![
            Achievement {
                year: "1843".to_string(),
                what: "Published the Notes".to_string(),
            },
            Achievement {
                year: "1842".to_string(),
                what: "Translated Menabrea".to_string(),
            },
        ],
        hobbies: vec!["Chess".to_string(), "Horses".to_string()],
    }
}

/// Create a `RunRecord` for testing with all sections and a 1s duration.
#[must_use]
pub fn make_test_record(ticks: u64, stopped_by: StopReason) -> RunRecord {
    RunRecord {
        timestamp: Utc::now(),
        sections: Section::ALL.to_vec(),
        roles: 3,
        ticks,
        duration_ms: 1_000,
        stopped_by,
    }
}
