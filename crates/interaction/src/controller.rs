//! Routes page events to the navigation and reveal controllers.

use shared::domain::SectionId;

use crate::{
    navigation::{NavigationController, ScrollOutcome, ScrollSpy, Viewport},
    reveal::RevealController,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    NavClicked { target: String },
    Visibility { element_id: String, intersecting: bool },
    Scrolled { top: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    Scroll(ScrollOutcome),
    Revealed { element_id: String },
    ActiveSection(SectionId),
    Nothing,
}

pub struct PageController<V> {
    navigation: NavigationController<V>,
    reveal: RevealController,
    spy: ScrollSpy,
    active: Option<SectionId>,
}

impl<V: Viewport> PageController<V> {
    pub fn new(viewport: V, reveal: RevealController, header_height: f64) -> Self {
        let spy = ScrollSpy::measure(&viewport, header_height);
        let active = spy.active(0.0);
        Self {
            navigation: NavigationController::new(viewport),
            reveal,
            spy,
            active,
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> UiEffect {
        match event {
            UiEvent::NavClicked { target } => {
                UiEffect::Scroll(self.navigation.scroll_to_section(&target))
            }
            UiEvent::Visibility {
                element_id,
                intersecting,
            } => {
                if self.reveal.notify(&element_id, intersecting) {
                    UiEffect::Revealed { element_id }
                } else {
                    UiEffect::Nothing
                }
            }
            UiEvent::Scrolled { top } => {
                let active = self.spy.active(top);
                if active == self.active {
                    return UiEffect::Nothing;
                }
                self.active = active;
                match active {
                    Some(section) => {
                        tracing::debug!(%section, "active section changed");
                        UiEffect::ActiveSection(section)
                    }
                    None => UiEffect::Nothing,
                }
            }
        }
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active
    }

    pub fn navigation(&self) -> &NavigationController<V> {
        &self.navigation
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }
}

#[cfg(test)]
mod tests {
    use shared::motion::{Offset, RevealManifest, RevealSpec};

    use super::*;
    use crate::{reveal::ManualObserver, viewport::SimulatedViewport};

    fn controller() -> PageController<SimulatedViewport> {
        let viewport = SimulatedViewport::new()
            .with_element("home", 0.0)
            .with_element("about", 900.0)
            .with_element("contact", 2000.0);
        let mut manifest = RevealManifest::new();
        manifest.push(
            "about-blurb",
            SectionId::About,
            RevealSpec::in_view(Offset::Y(20.0)),
        );
        let reveal = RevealController::mount(manifest.targets, &mut ManualObserver::new());
        PageController::new(viewport, reveal, 64.0)
    }

    #[test]
    fn nav_click_scrolls_and_unknown_target_is_ignored() {
        let mut page = controller();
        assert_eq!(
            page.handle(UiEvent::NavClicked {
                target: "contact".into()
            }),
            UiEffect::Scroll(ScrollOutcome::Scrolled { top: 2000.0 })
        );
        assert_eq!(
            page.handle(UiEvent::NavClicked {
                target: "missing".into()
            }),
            UiEffect::Scroll(ScrollOutcome::Missing)
        );
    }

    #[test]
    fn visibility_reveals_only_once() {
        let mut page = controller();
        let event = UiEvent::Visibility {
            element_id: "about-blurb".into(),
            intersecting: true,
        };
        assert_eq!(
            page.handle(event.clone()),
            UiEffect::Revealed {
                element_id: "about-blurb".into()
            }
        );
        assert_eq!(page.handle(event), UiEffect::Nothing);
    }

    #[test]
    fn scrolling_updates_active_section() {
        let mut page = controller();
        assert_eq!(page.active_section(), Some(SectionId::Home));
        assert_eq!(page.handle(UiEvent::Scrolled { top: 10.0 }), UiEffect::Nothing);
        assert_eq!(
            page.handle(UiEvent::Scrolled { top: 850.0 }),
            UiEffect::ActiveSection(SectionId::About)
        );
        assert_eq!(page.active_section(), Some(SectionId::About));
    }
}
