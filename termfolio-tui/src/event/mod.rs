//! Event layer: polling and key dispatch

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
