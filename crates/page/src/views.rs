//! View models for the navigation bar and the six page sections. Markup lives
//! in `templates/`; these structs carry the content and reveal attributes.

use askama::Template;
use shared::{
    content::SiteContent,
    domain::{
        ContactInfo, ExperienceEntry, Icon, NavBinding, NavPlacement, Profile, ProjectEntry,
        SectionId, SkillGroup, TextRun, TimelineSide,
    },
    motion::{
        Offset, RevealManifest, RevealSpec, Stagger, ABOUT_DURATION_MS, SCROLL_HINT_DELAY_MS,
        SCROLL_HINT_DURATION_MS,
    },
};

use crate::{
    assets::HERO_BACKGROUND_PATH,
    components::{BadgeVariant, ButtonOptions, ButtonSize, ButtonVariant},
    icons::{icon, IconView},
    reveal::{animate, RevealAttrs},
    PageOptions,
};

/// A button that smooth-scrolls to one section.
#[derive(Debug, Clone)]
pub(crate) struct ScrollLink {
    pub label: &'static str,
    pub target: SectionId,
    pub classes: String,
}

impl ScrollLink {
    fn new(binding: &NavBinding, classes: impl Into<String>) -> Self {
        Self {
            label: binding.label,
            target: binding.target,
            classes: classes.into(),
        }
    }
}

#[derive(Template)]
#[template(path = "nav.html")]
pub(crate) struct NavView {
    brand: Vec<ScrollLink>,
    links: Vec<ScrollLink>,
    ctas: Vec<ScrollLink>,
    mail: IconView,
}

pub(crate) fn nav(content: &SiteContent) -> NavView {
    let cta = ButtonOptions {
        variant: ButtonVariant::Outline,
        size: ButtonSize::Sm,
    };
    NavView {
        brand: content
            .nav_in(NavPlacement::Brand)
            .map(|b| ScrollLink::new(b, "brand"))
            .collect(),
        links: content
            .nav_in(NavPlacement::NavLink)
            .map(|b| ScrollLink::new(b, "nav-link"))
            .collect(),
        ctas: content
            .nav_in(NavPlacement::NavCta)
            .map(|b| ScrollLink::new(b, format!("{} nav-cta", cta.classes())))
            .collect(),
        mail: icon(Icon::Mail, "icon-sm"),
    }
}

#[derive(Template)]
#[template(path = "sections/home.html")]
pub(crate) struct HomeView {
    id: SectionId,
    profile: Profile,
    background_url: String,
    badge_classes: &'static str,
    badge: RevealAttrs,
    title: RevealAttrs,
    headline: RevealAttrs,
    quote: RevealAttrs,
    actions: RevealAttrs,
    ctas: Vec<ScrollLink>,
    hint: RevealAttrs,
    chevron: IconView,
}

pub(crate) fn home(
    content: &SiteContent,
    options: &PageOptions,
    manifest: &mut RevealManifest,
) -> HomeView {
    let id = SectionId::Home;
    let stagger = Stagger::default();
    let mut block = |i: usize, name: &str| {
        animate(
            manifest,
            id,
            format!("hero-{name}"),
            stagger.apply(i, RevealSpec::fade_in()),
        )
    };
    let badge = block(0, "badge");
    let title = block(1, "title");
    let headline = block(2, "headline");
    let quote = block(3, "quote");
    let actions = block(4, "actions");

    let ctas = content
        .nav_in(NavPlacement::HeroCta)
        .enumerate()
        .map(|(i, binding)| {
            let variant = if i == 0 {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Outline
            };
            let options = ButtonOptions {
                variant,
                size: ButtonSize::Lg,
            };
            ScrollLink::new(binding, options.classes())
        })
        .collect();

    let hint = animate(
        manifest,
        id,
        "hero-scroll-hint",
        RevealSpec::fade_in()
            .with_offset(Offset::None)
            .with_delay(SCROLL_HINT_DELAY_MS)
            .with_duration(SCROLL_HINT_DURATION_MS),
    );

    HomeView {
        id,
        profile: content.profile,
        background_url: format!("{}/{HERO_BACKGROUND_PATH}", options.asset_base),
        badge_classes: BadgeVariant::Outline.classes(),
        badge,
        title,
        headline,
        quote,
        actions,
        ctas,
        hint,
        chevron: icon(Icon::ChevronDown, "icon-md"),
    }
}

#[derive(Template)]
#[template(path = "sections/about.html")]
pub(crate) struct AboutView {
    id: SectionId,
    blurb: RevealAttrs,
    runs: &'static [TextRun],
}

pub(crate) fn about(content: &SiteContent, manifest: &mut RevealManifest) -> AboutView {
    let id = SectionId::About;
    AboutView {
        id,
        blurb: animate(
            manifest,
            id,
            "about-blurb",
            RevealSpec::in_view(Offset::Y(20.0)).with_duration(ABOUT_DURATION_MS),
        ),
        runs: content.profile.about,
    }
}

pub(crate) struct TimelineItem {
    reveal: RevealAttrs,
    side: &'static str,
    entry: ExperienceEntry,
}

#[derive(Template)]
#[template(path = "sections/experience.html")]
pub(crate) struct ExperienceView {
    id: SectionId,
    period_classes: &'static str,
    items: Vec<TimelineItem>,
}

pub(crate) fn experience(content: &SiteContent, manifest: &mut RevealManifest) -> ExperienceView {
    let id = SectionId::Experience;
    let items = content
        .experience
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (side, from) = match entry.side {
                TimelineSide::Left => ("timeline-left", Offset::X(-20.0)),
                TimelineSide::Right => ("timeline-right", Offset::X(20.0)),
            };
            TimelineItem {
                reveal: animate(
                    manifest,
                    id,
                    format!("experience-entry-{i}"),
                    RevealSpec::in_view(from),
                ),
                side,
                entry: *entry,
            }
        })
        .collect();
    ExperienceView {
        id,
        period_classes: BadgeVariant::Secondary.classes(),
        items,
    }
}

pub(crate) struct ProjectCard {
    reveal: RevealAttrs,
    index: usize,
    project: ProjectEntry,
    icon: IconView,
}

#[derive(Template)]
#[template(path = "sections/projects.html")]
pub(crate) struct ProjectsView {
    id: SectionId,
    tech_classes: &'static str,
    cards: Vec<ProjectCard>,
}

pub(crate) fn projects(content: &SiteContent, manifest: &mut RevealManifest) -> ProjectsView {
    let id = SectionId::Projects;
    let stagger = Stagger::default();
    let cards = content
        .projects
        .iter()
        .enumerate()
        .map(|(index, project)| ProjectCard {
            reveal: animate(
                manifest,
                id,
                format!("projects-card-{index}"),
                stagger.apply(index, RevealSpec::in_view(Offset::Y(20.0))),
            ),
            index,
            project: *project,
            icon: icon(project.icon, project.accent.css_class()),
        })
        .collect();
    ProjectsView {
        id,
        tech_classes: BadgeVariant::Outline.classes(),
        cards,
    }
}

pub(crate) struct SkillCard {
    reveal: RevealAttrs,
    index: usize,
    group: SkillGroup,
}

#[derive(Template)]
#[template(path = "sections/skills.html")]
pub(crate) struct SkillsView {
    id: SectionId,
    groups: Vec<SkillCard>,
}

pub(crate) fn skills(content: &SiteContent, manifest: &mut RevealManifest) -> SkillsView {
    let id = SectionId::Skills;
    let stagger = Stagger::default();
    let groups = content
        .skills
        .iter()
        .enumerate()
        .map(|(index, group)| SkillCard {
            reveal: animate(
                manifest,
                id,
                format!("skills-group-{index}"),
                stagger.apply(index, RevealSpec::in_view(Offset::Scale(0.95))),
            ),
            index,
            group: *group,
        })
        .collect();
    SkillsView { id, groups }
}

#[derive(Template)]
#[template(path = "sections/contact.html")]
pub(crate) struct ContactView {
    id: SectionId,
    contact: ContactInfo,
    github: IconView,
    linkedin: IconView,
    mail: IconView,
}

pub(crate) fn contact(content: &SiteContent) -> ContactView {
    ContactView {
        id: SectionId::Contact,
        contact: content.contact,
        github: icon(Icon::Github, "icon-md"),
        linkedin: icon(Icon::Linkedin, "icon-md"),
        mail: icon(Icon::Mail, "icon-md"),
    }
}

/// Markup for one section, recording its reveal targets in `manifest`.
pub(crate) fn render_section(
    id: SectionId,
    content: &SiteContent,
    options: &PageOptions,
    manifest: &mut RevealManifest,
) -> askama::Result<String> {
    match id {
        SectionId::Home => home(content, options, manifest).render(),
        SectionId::About => about(content, manifest).render(),
        SectionId::Experience => experience(content, manifest).render(),
        SectionId::Projects => projects(content, manifest).render(),
        SectionId::Skills => skills(content, manifest).render(),
        SectionId::Contact => contact(content).render(),
    }
}
