use shared::content::{NAV_BINDINGS, SiteContent};

use super::*;
use crate::viewport::SimulatedViewport;

fn page_viewport() -> SimulatedViewport {
    SectionId::ALL
        .into_iter()
        .enumerate()
        .fold(SimulatedViewport::new(), |viewport, (i, id)| {
            viewport.with_element(id.as_str(), i as f64 * 800.0)
        })
}

#[test]
fn scrolls_smoothly_to_existing_section() {
    let mut nav = NavigationController::new(page_viewport());
    let outcome = nav.scroll_to_section("projects");
    assert_eq!(outcome, ScrollOutcome::Scrolled { top: 2400.0 });
    assert_eq!(nav.viewport().scroll_requests(), &[2400.0]);
    assert!(nav.viewport().is_animating());
    // smooth means the position does not jump on the first frame
    nav.viewport_mut().tick(16.0);
    assert!(nav.viewport().scroll_top() < 2400.0);

    nav.viewport_mut().settle();
    assert_eq!(nav.viewport().scroll_top(), 2400.0);
}

#[test]
fn missing_anchor_is_a_silent_no_op() {
    let mut nav = NavigationController::new(page_viewport());
    assert_eq!(nav.scroll_to_section("blog"), ScrollOutcome::Missing);
    assert_eq!(nav.scroll_to_section(""), ScrollOutcome::Missing);
    assert!(nav.viewport().scroll_requests().is_empty());
    assert_eq!(nav.viewport().scroll_top(), 0.0);
}

#[test]
fn every_binding_resolves_to_a_section_anchor() {
    let mut nav = NavigationController::new(page_viewport());
    for binding in NAV_BINDINGS {
        let outcome = nav.activate(binding);
        assert!(
            matches!(outcome, ScrollOutcome::Scrolled { .. }),
            "{} did not scroll",
            binding.label
        );
    }
    assert_eq!(nav.viewport().scroll_requests().len(), NAV_BINDINGS.len());
}

#[test]
fn contact_me_scrolls_to_contact() {
    let content = SiteContent::default();
    let mut nav = NavigationController::new(page_viewport());
    let binding = content
        .nav
        .iter()
        .find(|binding| binding.label == "Contact Me")
        .expect("contact binding");
    assert_eq!(nav.activate(binding), ScrollOutcome::Scrolled { top: 4000.0 });
}

#[test]
fn new_navigation_abandons_in_flight_scroll() {
    let mut nav = NavigationController::new(page_viewport());
    nav.scroll_to_section("contact");
    nav.viewport_mut().tick(100.0);
    let midway = nav.viewport().scroll_top();
    assert!(midway > 0.0 && midway < 4000.0);

    nav.scroll_to_section("about");
    nav.viewport_mut().settle();
    assert_eq!(nav.viewport().scroll_top(), 800.0);
}

#[test]
fn scroll_spy_tracks_section_under_header() {
    let spy = ScrollSpy::measure(&page_viewport(), 64.0);
    assert_eq!(spy.active(0.0), Some(SectionId::Home));
    assert_eq!(spy.active(740.0), Some(SectionId::About));
    assert_eq!(spy.active(2399.0), Some(SectionId::Projects));
    assert_eq!(spy.active(10_000.0), Some(SectionId::Contact));
}

#[test]
fn scroll_spy_without_sections_reports_nothing() {
    let spy = ScrollSpy::new(64.0);
    assert_eq!(spy.active(100.0), None);
    let spy = spy.with_section(SectionId::Skills, 500.0);
    assert_eq!(spy.active(0.0), Some(SectionId::Skills));
}
