//! Page behaviour independent of any rendering surface: smooth-scroll
//! navigation, one-shot reveal animations and the active-section tracker.

pub mod controller;
pub mod navigation;
pub mod reveal;
pub mod viewport;

pub use controller::{PageController, UiEffect, UiEvent};
pub use navigation::{NavigationController, ScrollOutcome, ScrollSpy, Viewport};
pub use reveal::{
    ManualObserver, RevealController, RevealState, RevealTransition, VisibilityCallback,
    VisibilityObserver,
};
pub use viewport::SimulatedViewport;
