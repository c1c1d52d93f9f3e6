use std::collections::HashSet;

use super::*;

#[test]
fn projects_keep_literal_titles_in_order() {
    let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(
        titles,
        vec![
            "Real-Time AI Interviewer",
            "Live Video Streaming Platform",
            "Agentic Cloud IDE",
            "Clinical LLM Fine-Tuning",
            "OCR-Enhanced RAG Pipeline",
        ]
    );
}

#[test]
fn project_stacks_have_no_duplicates() {
    for project in PROJECTS {
        let unique: HashSet<&str> = project.stack.iter().copied().collect();
        assert_eq!(unique.len(), project.stack.len(), "{}", project.title);
    }
}

#[test]
fn every_binding_targets_a_known_section() {
    for binding in NAV_BINDINGS {
        assert!(SectionId::ALL.contains(&binding.target), "{}", binding.label);
    }
}

#[test]
fn contact_me_buttons_target_contact() {
    let contact_buttons: Vec<_> = NAV_BINDINGS
        .iter()
        .filter(|binding| binding.label == "Contact Me")
        .collect();
    assert_eq!(contact_buttons.len(), 2);
    assert!(contact_buttons
        .iter()
        .all(|binding| binding.target == SectionId::Contact));
}

#[test]
fn footer_line_uses_configured_phone_and_email() {
    assert_eq!(
        CONTACT.summary_line(),
        "+91 9373581139 • abhishekharkar@gmail.com"
    );
    assert_eq!(CONTACT.mailto(), "mailto:abhishekharkar@gmail.com");
}

#[test]
fn nav_links_follow_section_order() {
    let content = SiteContent::default();
    let links: Vec<SectionId> = content
        .nav_in(NavPlacement::NavLink)
        .map(|binding| binding.target)
        .collect();
    assert_eq!(
        links,
        vec![
            SectionId::About,
            SectionId::Experience,
            SectionId::Projects,
            SectionId::Skills,
        ]
    );
}

#[test]
fn section_ids_round_trip_through_strings() {
    for id in SectionId::ALL {
        assert_eq!(id.as_str().parse::<SectionId>().expect("parse"), id);
    }
    assert!(matches!(
        "blog".parse::<SectionId>(),
        Err(crate::error::SiteError::UnknownSection(ref id)) if id == "blog"
    ));
}

#[test]
fn sections_are_ordered_from_zero() {
    let orders: Vec<u8> = crate::domain::Section::all().map(|s| s.order).collect();
    assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
}
