//! Server-side renderer for the portfolio page.

pub mod assets;
pub mod components;
pub mod icons;
mod page;
pub mod reveal;
pub mod runtime;
pub mod styles;
mod views;

pub use page::{PageOptions, PageRenderer, RenderedPage, ScrollButton};
