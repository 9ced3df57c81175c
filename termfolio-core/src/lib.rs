//! Termfolio Core Library
//!
//! Frontend-independent logic for the termfolio portfolio application:
//! - Section model and scroll tracking (Section Tracker)
//! - Contact form state machine (validation, submission lifecycle)
//! - Profile content types and the embedded sample profile
//!
//! This library holds no IO and no rendering; the terminal frontend drives
//! it through messages and reads its state back for display. Delivery of
//! accepted form submissions is delegated to `termfolio-relay`.

pub mod content;
pub mod error;
pub mod services;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ContactForm, SectionTracker, SCROLL_LOOKAHEAD};
pub use types::{
    Certification, ContactInfo, Education, Experience, FormData, FormErrors, FormField, Profile,
    Project, Section, SectionLayout, SectionSpan, SkillGroup, SubmissionStatus,
};
