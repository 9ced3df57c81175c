//! Contact form draft and submission lifecycle.

use termfolio_relay::FormSubmission;

use crate::types::{validate_draft, FormData, FormErrors, FormField, SubmissionStatus};

/// Owns the contact draft, its validation errors, the outcome banner, and
/// the in-flight flag.
///
/// The controller never performs the network call itself. [`begin_submit`]
/// validates the draft and hands back the payload to deliver; the caller
/// reports the outcome through [`finish_submit`], which always clears the
/// in-flight flag whatever the result was.
///
/// [`begin_submit`]: ContactForm::begin_submit
/// [`finish_submit`]: ContactForm::finish_submit
#[derive(Debug, Default)]
pub struct ContactForm {
    draft: FormData,
    errors: FormErrors,
    status: SubmissionStatus,
    in_flight: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &FormData {
        &self.draft
    }

    /// Validation errors from the last rejected submit attempt.
    #[must_use]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Replace one field of the draft.
    ///
    /// Any outcome banner is dismissed so a correction is not typed under a
    /// stale error. Validation errors stay as they are; they are only
    /// recomputed, wholesale, by the next submit attempt.
    pub fn update_field(&mut self, field: FormField, value: String) {
        self.draft.set(field, value);
        self.status = SubmissionStatus::Idle;
    }

    /// Append one character to a field.
    pub fn push_char(&mut self, field: FormField, c: char) {
        let mut value = self.draft.get(field).to_string();
        value.push(c);
        self.update_field(field, value);
    }

    /// Remove the last character of a field. Does nothing on an empty
    /// field, so it neither dismisses a banner nor touches errors.
    pub fn pop_char(&mut self, field: FormField) {
        let current = self.draft.get(field);
        if current.is_empty() {
            return;
        }
        let mut value = current.to_string();
        value.pop();
        self.update_field(field, value);
    }

    /// Validate the draft without changing any state.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        validate_draft(&self.draft)
    }

    /// Start a submission.
    ///
    /// Returns the payload to deliver, or `None` when a submission is
    /// already in flight or the draft does not validate. A rejected attempt
    /// records the validation errors but leaves the outcome banner alone.
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if self.in_flight {
            log::debug!("contact form submit ignored: already in flight");
            return None;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors.clear();
        self.in_flight = true;
        log::debug!("contact form submission started");
        Some(FormSubmission::new(
            self.draft.get(FormField::Name),
            self.draft.get(FormField::Email),
            self.draft.get(FormField::Message),
        ))
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// The in-flight flag is cleared in every case. Delivery clears the
    /// draft and raises the success banner; failure raises the error banner
    /// and keeps the draft for another try.
    pub fn finish_submit(&mut self, delivered: bool) {
        self.in_flight = false;
        if delivered {
            self.status = SubmissionStatus::Success;
            self.draft.clear();
            self.errors.clear();
        } else {
            self.status = SubmissionStatus::Error;
        }
    }

    /// Dismiss the success banner. Does nothing in any other state.
    pub fn acknowledge_success(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}
