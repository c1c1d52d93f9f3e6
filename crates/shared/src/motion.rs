//! Entrance-animation descriptors shared by the renderer and the reveal controller.

use serde::{Deserialize, Serialize};

use crate::domain::SectionId;

pub const STAGGER_INCREMENT_MS: u32 = 100;
pub const FADE_DURATION_MS: u32 = 500;
pub const ABOUT_DURATION_MS: u32 = 600;
pub const IN_VIEW_DURATION_MS: u32 = 300;
pub const SCROLL_HINT_DELAY_MS: u32 = 1000;
pub const SCROLL_HINT_DURATION_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Offset {
    None,
    X(f32),
    Y(f32),
    Scale(f32),
}

impl Offset {
    pub fn css_transform(self) -> Option<String> {
        match self {
            Offset::None => None,
            Offset::X(px) => Some(format!("translateX({px}px)")),
            Offset::Y(px) => Some(format!("translateY({px}px)")),
            Offset::Scale(factor) => Some(format!("scale({factor})")),
        }
    }

    pub fn is_rest(self) -> bool {
        match self {
            Offset::None => true,
            Offset::X(v) | Offset::Y(v) => v == 0.0,
            Offset::Scale(v) => v == 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealTrigger {
    Mount,
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f32,
    pub offset: Offset,
}

impl VisualState {
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        offset: Offset::None,
    };

    pub fn hidden(offset: Offset) -> Self {
        Self {
            opacity: 0.0,
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSpec {
    pub from: Offset,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub trigger: RevealTrigger,
}

impl RevealSpec {
    pub fn fade_in() -> Self {
        Self {
            from: Offset::Y(20.0),
            duration_ms: FADE_DURATION_MS,
            delay_ms: 0,
            trigger: RevealTrigger::Mount,
        }
    }

    pub fn in_view(from: Offset) -> Self {
        Self {
            from,
            duration_ms: IN_VIEW_DURATION_MS,
            delay_ms: 0,
            trigger: RevealTrigger::InView,
        }
    }

    pub fn with_offset(mut self, from: Offset) -> Self {
        self.from = from;
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn initial_state(&self) -> VisualState {
        VisualState::hidden(self.from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stagger {
    pub increment_ms: u32,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            increment_ms: STAGGER_INCREMENT_MS,
        }
    }
}

impl Stagger {
    pub fn delay(&self, index: usize) -> u32 {
        self.increment_ms.saturating_mul(index as u32)
    }

    pub fn apply(&self, index: usize, spec: RevealSpec) -> RevealSpec {
        spec.with_delay(self.delay(index))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTarget {
    pub element_id: String,
    pub section: SectionId,
    pub spec: RevealSpec,
}

/// Every reveal target on a rendered page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevealManifest {
    pub stagger_increment_ms: u32,
    pub targets: Vec<RevealTarget>,
}

impl RevealManifest {
    pub fn new() -> Self {
        Self {
            stagger_increment_ms: STAGGER_INCREMENT_MS,
            targets: Vec::new(),
        }
    }

    pub fn push(&mut self, element_id: impl Into<String>, section: SectionId, spec: RevealSpec) {
        self.targets.push(RevealTarget {
            element_id: element_id.into(),
            section,
            spec,
        });
    }

    pub fn get(&self, element_id: &str) -> Option<&RevealTarget> {
        self.targets
            .iter()
            .find(|target| target.element_id == element_id)
    }

    pub fn in_section(&self, section: SectionId) -> impl Iterator<Item = &RevealTarget> + '_ {
        self.targets
            .iter()
            .filter(move |target| target.section == section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_grows_by_fixed_increment() {
        let stagger = Stagger::default();
        let delays: Vec<u32> = (0..5).map(|i| stagger.delay(i)).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn hidden_state_starts_transparent() {
        let spec = RevealSpec::in_view(Offset::Y(20.0));
        let initial = spec.initial_state();
        assert_eq!(initial.opacity, 0.0);
        assert_eq!(initial.offset, Offset::Y(20.0));
        assert!(VisualState::VISIBLE.offset.is_rest());
    }

    #[test]
    fn offsets_map_to_css_transforms() {
        assert_eq!(Offset::X(-20.0).css_transform().as_deref(), Some("translateX(-20px)"));
        assert_eq!(Offset::Scale(0.95).css_transform().as_deref(), Some("scale(0.95)"));
        assert_eq!(Offset::None.css_transform(), None);
    }
}
