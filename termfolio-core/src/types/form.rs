//! Contact form fields, validation and submission status

/// The editable contact form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// All fields in focus order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Input label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Position within [`Self::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }

    /// Next field, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The draft a visitor is composing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormData {
    /// Current value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Replace the value of one field.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Per-field validation messages; `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    /// Message for one field, if it failed validation.
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    /// Drop the error for one field, keeping the others.
    pub fn clear_field(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Email => self.email = None,
            FormField::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Outcome banner state of the contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No banner: nothing has been submitted since the last edit.
    #[default]
    Idle,
    /// The last submission was delivered.
    Success,
    /// The last submission failed; the draft is preserved.
    Error,
}

/// Derive validation errors for a draft. Pure: identical input yields
/// identical errors.
pub fn validate_draft(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();
    if data.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if data.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !is_plausible_email(&data.email) {
        errors.email = Some("Email is invalid".to_string());
    }
    if data.message.trim().is_empty() {
        errors.message = Some("Message is required".to_string());
    }
    errors
}

/// Deliberately loose address check: a non-space character directly before
/// an `@`, and the contiguous non-space run after it containing an interior
/// dot. Catches obvious slips while letting odd-but-deliverable addresses
/// through.
fn is_plausible_email(value: &str) -> bool {
    value
        .char_indices()
        .filter(|(_, c)| *c == '@')
        .any(|(at, _)| {
            let local_ok = value[..at]
                .chars()
                .next_back()
                .is_some_and(|c| !c.is_whitespace());
            if !local_ok {
                return false;
            }
            let rest = &value[at + 1..];
            let run_end = rest
                .find(char::is_whitespace)
                .unwrap_or(rest.len());
            let run = &rest[..run_end];
            run.char_indices()
                .any(|(i, c)| c == '.' && i > 0 && i + 1 < run.len())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> FormData {
        FormData {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(FormField::Name.next(), FormField::Email);
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn empty_fields_are_required() {
        let errors = validate_draft(&FormData::default());
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn whitespace_only_fields_are_required() {
        let errors = validate_draft(&draft("   ", "\t", " \n "));
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn malformed_email_is_invalid() {
        for email in ["plain", "a@b", "a@b.", "a@.b", "@b.c", "a @b.c", "a@"] {
            let errors = validate_draft(&draft("Ada", email, "Hi"));
            assert_eq!(errors.email.as_deref(), Some("Email is invalid"), "{email}");
        }
    }

    #[test]
    fn plausible_email_passes() {
        for email in [
            "a@b.c",
            "user@domain.com",
            "first.last@sub.domain.io",
            "user+tag@domain.co.uk",
        ] {
            let errors = validate_draft(&draft("Ada", email, "Hi"));
            assert_eq!(errors.email, None, "{email}");
        }
    }

    #[test]
    fn email_check_is_loose_on_purpose() {
        // Embedded addresses pass; tightening this is out of scope.
        for email in ["hello a@b.c", "a@b.c trailing", "a b@c.d"] {
            let errors = validate_draft(&draft("Ada", email, "Hi"));
            assert_eq!(errors.email, None, "{email}");
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate_draft(&draft("Ada", "ada@lovelace.dev", "Hello there"));
        assert!(errors.is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let data = draft("", "nope", "");
        assert_eq!(validate_draft(&data), validate_draft(&data));
    }
}
