//! Drives the rendered page through the platform-independent controllers.

use interaction::{
    ManualObserver, NavigationController, RevealController, RevealState, ScrollOutcome,
    SimulatedViewport,
};
use page::{PageOptions, PageRenderer, RenderedPage};
use shared::{content::SiteContent, domain::SectionId};

fn rendered() -> RenderedPage {
    PageRenderer::new(SiteContent::default(), PageOptions::default())
        .render()
        .expect("render")
}

/// Lays sections out one screen apart in document order.
fn viewport_for(page: &RenderedPage) -> SimulatedViewport {
    page.section_ids()
        .into_iter()
        .enumerate()
        .fold(SimulatedViewport::new(), |viewport, (i, id)| {
            viewport.with_element(id, i as f64 * 1000.0)
        })
}

#[test]
fn clicking_each_rendered_button_scrolls_to_its_section() {
    let page = rendered();
    let mut nav = NavigationController::new(viewport_for(&page));
    for button in page.scroll_buttons() {
        let outcome = nav.scroll_to_section(&button.target);
        assert!(
            matches!(outcome, ScrollOutcome::Scrolled { .. }),
            "{}",
            button.target
        );
    }
}

#[test]
fn contact_me_lands_on_footer() {
    let page = rendered();
    let mut nav = NavigationController::new(viewport_for(&page));
    let button = page
        .scroll_buttons()
        .into_iter()
        .find(|button| button.label == "Contact Me")
        .expect("contact button");
    assert_eq!(button.target, "contact");
    assert_eq!(
        nav.scroll_to_section(&button.target),
        ScrollOutcome::Scrolled { top: 5000.0 }
    );
    nav.viewport_mut().settle();
    assert_eq!(nav.viewport().scroll_top(), 5000.0);

    let text = page.text_by_id("contact").expect("footer");
    assert!(text.contains("+91 9373581139"));
    assert!(text.contains("abhishekharkar@gmail.com"));
}

#[test]
fn unknown_anchor_does_not_disturb_the_viewport() {
    let page = rendered();
    let mut nav = NavigationController::new(viewport_for(&page));
    assert_eq!(nav.scroll_to_section("resume"), ScrollOutcome::Missing);
    assert!(nav.viewport().scroll_requests().is_empty());
}

#[test]
fn every_rendered_reveal_plays_exactly_once() {
    let page = rendered();
    let mut observer = ManualObserver::new();
    let reveal = RevealController::mount(page.manifest.targets.clone(), &mut observer);

    let in_view: Vec<String> = observer.observed().map(str::to_string).collect();
    assert!(!in_view.is_empty());
    for id in &in_view {
        assert_eq!(reveal.visual(id).expect("visual").opacity, 0.0);
    }

    for _ in 0..3 {
        for id in &in_view {
            observer.fire(id, true);
            observer.fire(id, false);
        }
    }

    for target in &page.manifest.targets {
        assert_eq!(
            reveal.state(&target.element_id),
            Some(RevealState::Revealed),
            "{}",
            target.element_id
        );
        assert_eq!(reveal.visual(&target.element_id).expect("visual").opacity, 1.0);
    }
    assert_eq!(reveal.transitions().len(), page.manifest.targets.len());
    assert!(reveal
        .section_states()
        .values()
        .all(|state| *state == RevealState::Revealed));
}

#[test]
fn projects_reveal_with_staggered_delays() {
    let page = rendered();
    let mut observer = ManualObserver::new();
    let reveal = RevealController::mount(page.manifest.targets.clone(), &mut observer);
    let cards: Vec<String> = page
        .manifest
        .in_section(SectionId::Projects)
        .map(|target| target.element_id.clone())
        .collect();
    assert_eq!(cards.len(), 5);
    for id in &cards {
        observer.fire(id, true);
    }
    let delays: Vec<u32> = reveal
        .transitions()
        .into_iter()
        .filter(|t| cards.contains(&t.element_id))
        .map(|t| t.delay_ms)
        .collect();
    assert_eq!(delays, vec![0, 100, 200, 300, 400]);
}
