//! Terminal views for each page section
//!
//! Every view is a pure function of the portfolio data and returns the lines
//! to print. Colors come from `colored`, which drops them when stdout is not
//! a terminal.

use chrono::Datelike;
use colored::Colorize;

use super::data::{Portfolio, Section};

/// Lays out sections at a fixed terminal width
#[derive(Debug, Clone, Copy)]
pub struct PageRenderer {
    width: usize,
}

impl PageRenderer {
    /// Create a renderer wrapping at `width` columns
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }

    /// Wrap width in columns
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Top navigation bar: short name, section links, GitHub link
    #[must_use]
    pub fn navbar(&self, portfolio: &Portfolio) -> Vec<String> {
        let links = Section::ALL
            .iter()
            .map(|s| s.anchor())
            .collect::<Vec<_>>()
            .join("  ");
        vec![
            format!("{} {}", "✦".magenta(), portfolio.first_name().bold()),
            format!("{}  {}", links.dimmed(), portfolio.github.blue()),
            self.rule(),
        ]
    }

    /// Render one section with its heading (the hero has none)
    #[must_use]
    pub fn section(&self, section: Section, portfolio: &Portfolio, typed: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if section != Section::Home {
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                "==".bold().cyan(),
                section.title().bold().cyan()
            ));
        }
        lines.extend(match section {
            Section::Home => self.hero(portfolio, typed),
            Section::About => self.about(portfolio),
            Section::Skills => self.chips(&portfolio.skills),
            Section::Projects => self.projects(portfolio),
            Section::Achievements => achievements(portfolio),
            Section::Hobbies => self.chips(&portfolio.hobbies),
            Section::Contact => contact(portfolio),
        });
        lines
    }

    /// Render the whole page: navbar, every section, footer
    #[must_use]
    pub fn page(&self, portfolio: &Portfolio, typed: &str) -> Vec<String> {
        let mut lines = self.navbar(portfolio);
        for section in Section::ALL {
            lines.extend(self.section(section, portfolio, typed));
        }
        lines.extend(self.footer(portfolio));
        lines
    }

    /// Hero banner. `typed` is the current typewriter text.
    #[must_use]
    pub fn hero(&self, portfolio: &Portfolio, typed: &str) -> Vec<String> {
        vec![
            String::new(),
            format!(
                "Hi, I'm {} 👋",
                portfolio.first_name().bold().magenta()
            ),
            portfolio.tagline.clone(),
            typed_line(typed),
            String::new(),
            format!(
                "{} #projects   {} {}",
                "View Projects:".bold(),
                "Download Resume:".bold(),
                portfolio.resume_url.blue()
            ),
            format!("📍 {}", portfolio.location.dimmed()),
        ]
    }

    fn about(&self, portfolio: &Portfolio) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in &portfolio.about {
            lines.extend(wrap_words(paragraph, self.width));
            lines.push(String::new());
        }
        if !portfolio.services.is_empty() {
            lines.push(format!("{}", "Services".dimmed()));
            for service in &portfolio.services {
                lines.push(format!("  {} {}", "•".cyan(), service.title.bold()));
                for line in wrap_words(&service.desc, self.width.saturating_sub(4)) {
                    lines.push(format!("    {}", line.dimmed()));
                }
            }
        }
        lines
    }

    fn projects(&self, portfolio: &Portfolio) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, project) in portfolio.projects.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("{}", project.title.bold()));
            for line in wrap_words(&project.desc, self.width) {
                lines.push(format!("{}", line.dimmed()));
            }
            lines.extend(self.chips(&project.tags));
            lines.push(format!("{} {}", "Code:".dimmed(), project.github.blue()));
        }
        lines
    }

    /// Chips like `[ Python ]`, wrapped to the renderer width
    #[must_use]
    pub fn chips(&self, items: &[String]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut visible = 0usize;

        for item in items {
            let chip_width = item.chars().count() + 4;
            if visible > 0 && visible + 1 + chip_width > self.width {
                lines.push(std::mem::take(&mut line));
                visible = 0;
            }
            if visible > 0 {
                line.push(' ');
                visible += 1;
            }
            line.push_str(&format!("[ {} ]", item.green()));
            visible += chip_width;
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Copyright footer
    #[must_use]
    pub fn footer(&self, portfolio: &Portfolio) -> Vec<String> {
        let year = chrono::Local::now().year();
        vec![
            String::new(),
            self.rule(),
            format!("{}", format!("© {year} {}.", portfolio.name).dimmed()),
        ]
    }

    fn rule(&self) -> String {
        format!("{}", "─".repeat(self.width).dimmed())
    }
}

/// The hero line the typewriter paints over
#[must_use]
pub fn typed_line(typed: &str) -> String {
    format!("{} {}", ">".magenta(), typed.bold())
}

fn achievements(portfolio: &Portfolio) -> Vec<String> {
    portfolio
        .achievements
        .iter()
        .flat_map(|a| {
            [
                format!("{} {}", "●".magenta(), a.year.bold().magenta()),
                format!("  {}", a.what),
            ]
        })
        .collect()
}

fn contact(portfolio: &Portfolio) -> Vec<String> {
    let email = portfolio
        .email
        .strip_prefix("mailto:")
        .unwrap_or(&portfolio.email);
    vec![
        format!("{}", "Have a project or opportunity?".dimmed()),
        format!("{}", "Let's talk!".bold()),
        format!("  {} {}", "Email:".bold(), email.blue()),
        format!("  {} {}", "GitHub:".bold(), portfolio.github.blue()),
    ]
}

/// Greedy word wrap on whitespace. Words longer than `width` get a line of their own.
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_portfolio;

    fn renderer() -> PageRenderer {
        PageRenderer::new(40)
    }

    #[test]
    fn test_wrap_words_respects_width() {
        let lines = wrap_words("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_words_long_word_kept_whole() {
        let lines = wrap_words("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_wrap_words_empty() {
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_chips_wrap_to_width() {
        let items: Vec<String> = (0..10).map(|i| format!("skill{i}")).collect();
        let lines = renderer().chips(&items);
        // Each chip is 10 columns wide; three fit in 40 columns with separators
        assert_eq!(lines.len(), 4);
        for (i, item) in items.iter().enumerate() {
            assert!(lines[i / 3].contains(item.as_str()));
        }
    }

    #[test]
    fn test_chips_empty() {
        assert!(renderer().chips(&[]).is_empty());
    }

    #[test]
    fn test_hero_shows_first_name_and_typed_text() {
        let portfolio = make_test_portfolio();
        let lines = renderer().hero(&portfolio, "Analy|");
        let joined = lines.join("\n");
        assert!(joined.contains("Ada"));
        assert!(joined.contains("Analy|"));
        assert!(joined.contains(&portfolio.tagline));
        assert!(joined.contains(&portfolio.location));
    }

    #[test]
    fn test_section_heading_for_non_hero() {
        let portfolio = make_test_portfolio();
        let lines = renderer().section(Section::Hobbies, &portfolio, "");
        assert!(lines.iter().any(|l| l.contains("Hobbies & Interests")));
        assert!(lines.iter().any(|l| l.contains("Chess")));
    }

    #[test]
    fn test_projects_list_title_tags_and_link() {
        let portfolio = make_test_portfolio();
        let joined = renderer()
            .section(Section::Projects, &portfolio, "")
            .join("\n");
        assert!(joined.contains("Difference Engine Notes"));
        assert!(joined.contains("Bernoulli"));
        assert!(joined.contains("https://example.com/notes"));
    }

    #[test]
    fn test_achievements_timeline_order() {
        let portfolio = make_test_portfolio();
        let lines = achievements(&portfolio);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("1843"));
        assert!(lines[1].contains("Published the Notes"));
        assert!(lines[2].contains("1842"));
    }

    #[test]
    fn test_contact_strips_mailto() {
        let portfolio = make_test_portfolio();
        let joined = contact(&portfolio).join("\n");
        assert!(joined.contains("ada@example.com"));
        assert!(!joined.contains("mailto:"));
    }

    #[test]
    fn test_page_contains_every_section_heading() {
        let portfolio = make_test_portfolio();
        let joined = renderer().page(&portfolio, "").join("\n");
        for section in Section::ALL.into_iter().skip(1) {
            assert!(joined.contains(section.title()), "missing {section}");
        }
        assert!(joined.contains("Ada Lovelace."));
    }

    #[test]
    fn test_navbar_lists_all_anchors() {
        let portfolio = make_test_portfolio();
        let joined = renderer().navbar(&portfolio).join("\n");
        for section in Section::ALL {
            assert!(joined.contains(section.anchor()));
        }
    }

    #[test]
    fn test_empty_portfolio_renders_without_panic() {
        let portfolio = crate::Portfolio {
            name: String::new(),
            tagline: String::new(),
            location: String::new(),
            email: String::new(),
            github: String::new(),
            resume_url: String::new(),
            roles: vec![],
            about: vec![],
            skills: vec![],
            services: vec![],
            projects: vec![],
            achievements: vec![],
            hobbies: vec![],
        };
        let lines = PageRenderer::new(20).page(&portfolio, "");
        assert!(!lines.is_empty());
    }
}
