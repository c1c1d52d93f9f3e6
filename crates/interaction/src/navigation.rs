//! Smooth-scroll navigation to section anchors.

use shared::domain::{NavBinding, SectionId};

pub trait Viewport {
    /// Document offset of the top edge of the element with this id.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Animated scroll; never jumps.
    fn smooth_scroll_to(&mut self, top: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollOutcome {
    Scrolled { top: f64 },
    Missing,
}

pub struct NavigationController<V> {
    viewport: V,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new(viewport: V) -> Self {
        Self { viewport }
    }

    /// Unknown ids are ignored.
    pub fn scroll_to_section(&mut self, id: &str) -> ScrollOutcome {
        let Some(top) = self.viewport.element_top(id) else {
            tracing::debug!(target_id = id, "scroll target not in document; ignoring");
            return ScrollOutcome::Missing;
        };
        self.viewport.smooth_scroll_to(top);
        tracing::debug!(target_id = id, top, "smooth scroll started");
        ScrollOutcome::Scrolled { top }
    }

    pub fn activate(&mut self, binding: &NavBinding) -> ScrollOutcome {
        self.scroll_to_section(binding.target.as_str())
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    tops: Vec<(SectionId, f64)>,
    header_height: f64,
}

impl ScrollSpy {
    pub fn new(header_height: f64) -> Self {
        Self {
            tops: Vec::new(),
            header_height,
        }
    }

    pub fn measure(viewport: &impl Viewport, header_height: f64) -> Self {
        let mut spy = Self::new(header_height);
        for id in SectionId::ALL {
            if let Some(top) = viewport.element_top(id.as_str()) {
                spy.tops.push((id, top));
            }
        }
        spy
    }

    pub fn with_section(mut self, id: SectionId, top: f64) -> Self {
        self.tops.push((id, top));
        self.tops.sort_by_key(|(id, _)| id.order());
        self
    }

    // last section whose top has passed under the fixed header
    pub fn active(&self, scroll_top: f64) -> Option<SectionId> {
        let line = scroll_top + self.header_height;
        self.tops
            .iter()
            .take_while(|(_, top)| *top <= line)
            .last()
            .map(|(id, _)| *id)
            .or_else(|| self.tops.first().map(|(id, _)| *id))
    }
}

#[cfg(test)]
#[path = "tests/navigation_tests.rs"]
mod tests;
