//! View layer: renders the model, mutating nothing

pub mod components;
pub mod document;
mod layout;
pub mod sections;
pub mod theme;

pub use layout::{content_viewport, render};
