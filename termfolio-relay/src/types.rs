use serde::{Deserialize, Serialize};

/// One contact form submission, ready to deliver.
///
/// Serializes to the flat JSON object Formspree-style endpoints expect.
/// The `_replyto` field mirrors `email` so replies from the receiving
/// inbox go back to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
}

impl FormSubmission {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            reply_to: email.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mirrors_the_email_into_replyto() {
        let submission = FormSubmission::new("Jordan", "jordan@example.com", "Hi");
        assert_eq!(submission.reply_to, "jordan@example.com");
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let submission = FormSubmission::new("Jordan", "jordan@example.com", "Hi");
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["name"], "Jordan");
        assert_eq!(json["email"], "jordan@example.com");
        assert_eq!(json["message"], "Hi");
        assert_eq!(json["_replyto"], "jordan@example.com");
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn deserializes_from_the_wire_shape() {
        let raw = r#"{
            "name": "Jordan",
            "email": "jordan@example.com",
            "message": "Hi",
            "_replyto": "jordan@example.com"
        }"#;
        let submission: FormSubmission = serde_json::from_str(raw).unwrap();
        assert_eq!(
            submission,
            FormSubmission::new("Jordan", "jordan@example.com", "Hi")
        );
    }
}
