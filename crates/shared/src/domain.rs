use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    /// Document order, top to bottom.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn order(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub order: u8,
}

impl Section {
    pub fn all() -> impl Iterator<Item = Section> {
        SectionId::ALL.into_iter().map(|id| Section {
            id,
            order: id.order(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
    pub side: TimelineSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    Server,
    Code,
    Cpu,
    Terminal,
    ExternalLink,
    ChevronDown,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::Server => "server",
            Icon::Code => "code",
            Icon::Cpu => "cpu",
            Icon::Terminal => "terminal",
            Icon::ExternalLink => "external-link",
            Icon::ChevronDown => "chevron-down",
        }
    }
}

/// Tint applied to a project's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Purple,
    Green,
    Blue,
    Teal,
    Yellow,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Purple => "accent-purple",
            Accent::Green => "accent-green",
            Accent::Blue => "accent-blue",
            Accent::Teal => "accent-teal",
            Accent::Yellow => "accent-yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// A run of about-paragraph text; highlighted runs are emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRun {
    pub text: &'static str,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub mark: &'static str,
    pub availability: &'static str,
    pub headline: &'static str,
    pub quote: &'static str,
    pub about: &'static [TextRun],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub copyright: &'static str,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer line, phone and email separated by a bullet.
    pub fn summary_line(&self) -> String {
        format!("{} • {}", self.phone, self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavPlacement {
    Brand,
    NavLink,
    NavCta,
    HeroCta,
}

/// A clickable affordance that smooth-scrolls to one fixed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavBinding {
    pub label: &'static str,
    pub target: SectionId,
    pub placement: NavPlacement,
}
