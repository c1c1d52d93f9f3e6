pub mod content;
pub mod domain;
pub mod error;
pub mod motion;
pub mod settings;
