//! In-memory viewport used by tools and tests in place of a browser window.

use std::collections::HashMap;

use crate::navigation::Viewport;

/// Duration of a smooth scroll, matching typical browser behaviour.
pub const SMOOTH_SCROLL_MS: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    elapsed_ms: f64,
}

impl ScrollAnimation {
    fn position(&self) -> f64 {
        let t = (self.elapsed_ms / SMOOTH_SCROLL_MS).clamp(0.0, 1.0);
        // ease-in-out cubic
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };
        self.from + (self.to - self.from) * eased
    }

    fn finished(&self) -> bool {
        self.elapsed_ms >= SMOOTH_SCROLL_MS
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedViewport {
    offsets: HashMap<String, f64>,
    scroll_top: f64,
    animation: Option<ScrollAnimation>,
    scroll_requests: Vec<f64>,
}

impl SimulatedViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: impl Into<String>, top: f64) -> Self {
        self.offsets.insert(id.into(), top);
        self
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Targets of every scroll request, oldest first.
    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    /// Advances the in-flight animation by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f64) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        animation.elapsed_ms += dt_ms;
        self.scroll_top = animation.position();
        if animation.finished() {
            self.animation = None;
        }
    }

    pub fn settle(&mut self) {
        while self.animation.is_some() {
            self.tick(16.0);
        }
    }
}

impl Viewport for SimulatedViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.offsets.get(id).copied()
    }

    // A new request abandons whatever animation was in flight.
    fn smooth_scroll_to(&mut self, top: f64) {
        self.scroll_requests.push(top);
        self.animation = Some(ScrollAnimation {
            from: self.scroll_top,
            to: top,
            elapsed_ms: 0.0,
        });
    }
}
