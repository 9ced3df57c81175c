//! Data types shared across the application

mod form;
mod profile;
mod section;

pub use form::{validate_draft, FormData, FormErrors, FormField, SubmissionStatus};
pub use profile::{
    Certification, ContactInfo, Education, Experience, Profile, Project, SkillGroup,
};
pub use section::{Section, SectionLayout, SectionSpan};
