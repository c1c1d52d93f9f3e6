//! One-shot entrance animations triggered by viewport visibility.
//!
//! Every target starts `Pending` and moves to `Revealed` the first time it
//! intersects the viewport (or immediately at mount for mount-triggered
//! targets). `Revealed` is terminal: later exits and re-entries are ignored.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use serde::Serialize;
use shared::{
    domain::SectionId,
    motion::{RevealTarget, RevealTrigger, VisualState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    Pending,
    Revealed,
}

pub type VisibilityCallback = Box<dyn FnMut(bool)>;

/// The callback receives `true` on entering the viewport and `false` on leaving it.
pub trait VisibilityObserver {
    fn observe(&mut self, element_id: &str, callback: VisibilityCallback);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealTransition {
    pub element_id: String,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone)]
pub struct RevealEntry {
    pub target: RevealTarget,
    pub state: RevealState,
}

#[derive(Default)]
struct Registry {
    entries: HashMap<String, RevealEntry>,
    transitions: Vec<RevealTransition>,
}

impl Registry {
    fn reveal(&mut self, element_id: &str) -> bool {
        let Some(entry) = self.entries.get_mut(element_id) else {
            return false;
        };
        if entry.state == RevealState::Revealed {
            return false;
        }
        entry.state = RevealState::Revealed;
        let spec = entry.target.spec;
        self.transitions.push(RevealTransition {
            element_id: element_id.to_string(),
            delay_ms: spec.delay_ms,
            duration_ms: spec.duration_ms,
        });
        tracing::debug!(
            element_id,
            delay_ms = spec.delay_ms,
            duration_ms = spec.duration_ms,
            "element revealed"
        );
        true
    }
}

#[derive(Clone, Default)]
pub struct RevealController {
    registry: Rc<RefCell<Registry>>,
}

impl RevealController {
    pub fn mount<O>(targets: impl IntoIterator<Item = RevealTarget>, observer: &mut O) -> Self
    where
        O: VisibilityObserver + ?Sized,
    {
        let controller = Self::default();
        let mut on_mount = Vec::new();

        for target in targets {
            let element_id = target.element_id.clone();
            let trigger = target.spec.trigger;
            {
                let mut registry = controller.registry.borrow_mut();
                if registry.entries.contains_key(&element_id) {
                    tracing::warn!(%element_id, "duplicate reveal target ignored");
                    continue;
                }
                registry.entries.insert(
                    element_id.clone(),
                    RevealEntry {
                        target,
                        state: RevealState::Pending,
                    },
                );
            }

            match trigger {
                RevealTrigger::Mount => on_mount.push(element_id),
                RevealTrigger::InView => {
                    let registry = Rc::clone(&controller.registry);
                    let id = element_id.clone();
                    observer.observe(
                        &element_id,
                        Box::new(move |intersecting| {
                            if intersecting {
                                registry.borrow_mut().reveal(&id);
                            }
                        }),
                    );
                }
            }
        }

        for element_id in on_mount {
            controller.registry.borrow_mut().reveal(&element_id);
        }
        controller
    }

    // true only for the Pending -> Revealed edge
    pub fn notify(&self, element_id: &str, intersecting: bool) -> bool {
        intersecting && self.registry.borrow_mut().reveal(element_id)
    }

    pub fn state(&self, element_id: &str) -> Option<RevealState> {
        self.registry
            .borrow()
            .entries
            .get(element_id)
            .map(|entry| entry.state)
    }

    pub fn visual(&self, element_id: &str) -> Option<VisualState> {
        self.registry
            .borrow()
            .entries
            .get(element_id)
            .map(|entry| match entry.state {
                RevealState::Pending => entry.target.spec.initial_state(),
                RevealState::Revealed => VisualState::VISIBLE,
            })
    }

    pub fn transitions(&self) -> Vec<RevealTransition> {
        self.registry.borrow().transitions.clone()
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A section is revealed once all of its animated blocks are.
    pub fn section_states(&self) -> BTreeMap<SectionId, RevealState> {
        let registry = self.registry.borrow();
        let mut states = BTreeMap::new();
        for entry in registry.entries.values() {
            let state = states
                .entry(entry.target.section)
                .or_insert(RevealState::Revealed);
            if entry.state == RevealState::Pending {
                *state = RevealState::Pending;
            }
        }
        states
    }
}

#[derive(Default)]
pub struct ManualObserver {
    callbacks: HashMap<String, VisibilityCallback>,
}

impl ManualObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self, element_id: &str) -> bool {
        self.callbacks.contains_key(element_id)
    }

    pub fn observed(&self) -> impl Iterator<Item = &str> {
        self.callbacks.keys().map(String::as_str)
    }

    pub fn fire(&mut self, element_id: &str, intersecting: bool) -> bool {
        match self.callbacks.get_mut(element_id) {
            Some(callback) => {
                callback(intersecting);
                true
            }
            None => false,
        }
    }
}

impl VisibilityObserver for ManualObserver {
    fn observe(&mut self, element_id: &str, callback: VisibilityCallback) {
        self.callbacks.insert(element_id.to_string(), callback);
    }
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
