//! Portfolio data model
//!
//! The page content is a plain, trusted value. Nothing here validates URLs or
//! text; views render whatever they are given.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Something offered to clients, shown on the about card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Short heading
    pub title: String,
    /// One-line description
    pub desc: String,
}

/// A project card in the gallery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Project name
    pub title: String,
    /// What it does
    pub desc: String,
    /// Technology chips
    #[serde(default)]
    pub tags: Vec<String>,
    /// Link to the source
    pub github: String,
}

/// One entry on the achievements timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    /// Year label, kept as text (e.g. "2025")
    pub year: String,
    /// What was achieved
    pub what: String,
}

/// All content shown on the page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    /// Full name
    pub name: String,
    /// Hero subtitle
    #[serde(default)]
    pub tagline: String,
    /// City / country line under the hero
    #[serde(default)]
    pub location: String,
    /// Contact link, usually a `mailto:` URL
    #[serde(default)]
    pub email: String,
    /// GitHub profile URL
    #[serde(default)]
    pub github: String,
    /// Resume download link
    #[serde(default)]
    pub resume_url: String,
    /// Words cycled by the hero typewriter
    #[serde(default)]
    pub roles: Vec<String>,
    /// About paragraphs
    #[serde(default)]
    pub about: Vec<String>,
    /// Skill chips
    #[serde(default)]
    pub skills: Vec<String>,
    /// Services card entries
    #[serde(default)]
    pub services: Vec<Service>,
    /// Project gallery
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Achievements timeline, newest first
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Hobby chips
    #[serde(default)]
    pub hobbies: Vec<String>,
}

impl Portfolio {
    /// First word of the name, used in the hero greeting
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            name: "Laksh Gupta".to_string(),
            tagline: "Building practical AI & slick UIs".to_string(),
            location: "Jaipur, India".to_string(),
            email: "mailto:ilakshgupta@gmail.com".to_string(),
            github: "https://github.com/lakshcity".to_string(),
            resume_url: "https://drive.google.com/uc?export=download&id=1a4PRhy_LVzCy0Iv75KK03cs8YAH7xqCF"
                .to_string(),
            roles: strings(&["ML Engineer", "Frontend Developer", "Data Science Enthusiast"]),
            about: strings(&[
                "I'm Laksh Gupta, a final-year B.Tech IT student passionate about ML, AI and building clean UIs.",
                "Passionate about AI, machine learning, and full-stack development; seeking Summer 2026 internships to apply innovative technology solutions.",
            ]),
            skills: strings(&[
                "Python",
                "C++",
                "Java",
                "TensorFlow",
                "scikit-learn",
                "React",
                "TailwindCSS",
                "PostgreSQL",
                "SQL",
                "Data Visualization",
                "REST APIs",
                "Git/GitHub",
                "ML/DL",
                "Excel",
                "PowerBI",
            ]),
            services: vec![
                Service {
                    title: "AI & ML Prototyping".to_string(),
                    desc: "End-to-end ML solutions from datasets to deployable models.".to_string(),
                },
                Service {
                    title: "Interactive Frontend Development".to_string(),
                    desc: "Responsive, dynamic, and user-friendly interfaces.".to_string(),
                },
                Service {
                    title: "Data Visualization & Insights".to_string(),
                    desc: "Intuitive dashboards turning complex data into actionable insights."
                        .to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Lane Detection and Traffic sign Recognition for Autonomous vehicles"
                        .to_string(),
                    desc: "Lane detection (Cityscapes) + YOLO traffic-sign recognition with real-time inference on Jetson Nano."
                        .to_string(),
                    tags: strings(&["TensorFlow", "YOLO", "Jetson Nano", "OpenCV"]),
                    github: "https://github.com/lakshcity/Autonomous-vehicle".to_string(),
                },
                Project {
                    title: "E-commerce Recommendation System".to_string(),
                    desc: "Personalized recommendation engine using collaborative & content-based filtering, boosting UX & sales."
                        .to_string(),
                    tags: strings(&[
                        "Python",
                        "Pandas",
                        "scikit-learn",
                        "ML",
                        "Recommendation System",
                    ]),
                    github: "https://github.com/lakshcity/Ecommerce-recommendation".to_string(),
                },
                Project {
                    title: "Credit Card Fraud Detection".to_string(),
                    desc: "Imbalanced learning with feature engineering, ensemble models, and explainability."
                        .to_string(),
                    tags: strings(&["XGBoost", "SMOTE", "SHAP"]),
                    github: "https://github.com/lakshcity/credit-card-fraud-detction".to_string(),
                },
            ],
            achievements: vec![
                Achievement {
                    year: "2025".to_string(),
                    what: "Campus Ambassador – Perplexity AI".to_string(),
                },
                Achievement {
                    year: "2024".to_string(),
                    what: "Udemy Certification – TensorFlow 2.0".to_string(),
                },
                Achievement {
                    year: "2023".to_string(),
                    what: "NPTEL Certification – Object-Oriented Programming in Java".to_string(),
                },
                Achievement {
                    year: "2023".to_string(),
                    what: "NPTEL Certification – Programming in Java".to_string(),
                },
            ],
            hobbies: strings(&["Football", "Travel", "Photography", "Blogging"]),
        }
    }
}

/// Page sections, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero banner with the typewriter line
    Home,
    /// About paragraphs and services
    About,
    /// Skill chips
    Skills,
    /// Project gallery
    Projects,
    /// Achievements timeline
    Achievements,
    /// Hobby chips
    Hobbies,
    /// Contact block
    Contact,
}

impl Section {
    /// Every section in page order
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Achievements,
        Self::Hobbies,
        Self::Contact,
    ];

    /// Navigation anchor (lowercase id)
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Hobbies => "hobbies",
            Self::Contact => "contact",
        }
    }

    /// Heading shown above the section
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Hobbies => "Hobbies & Interests",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('#').to_ascii_lowercase();
        match Self::ALL.iter().find(|section| section.anchor() == wanted) {
            Some(section) => Ok(*section),
            None => bail!(
                "Unknown section '{s}'. Available sections: {}",
                Self::ALL.map(Self::anchor).join(", ")
            ),
        }
    }
}
