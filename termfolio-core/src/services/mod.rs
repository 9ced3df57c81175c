//! Stateful controllers behind the UI
//!
//! [`SectionTracker`] owns scroll position and the derived active section;
//! [`ContactForm`] owns the contact draft and its submission lifecycle.
//! Neither touches a terminal or a socket, so both are plainly testable.

mod contact_form;
mod section_tracker;

pub use contact_form::ContactForm;
pub use section_tracker::{SectionTracker, SCROLL_LOOKAHEAD};
