//! Contact form inquiries.
//!
//! Inquiries are validated and acknowledged only; nothing is stored or sent
//! anywhere.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/* --------------------------------------------------------------------------
   Validation limits
   -------------------------------------------------------------------------- */

/// Maximum length of the sender's name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the sender's email address.
pub const MAX_EMAIL_LEN: usize = 255;

/// Maximum length of the sender's phone number.
pub const MAX_PHONE_LEN: usize = 20;

/// Maximum length of the free-text message.
pub const MAX_MESSAGE_LEN: usize = 2000;

/* --------------------------------------------------------------------------
   Acknowledgement
   -------------------------------------------------------------------------- */

pub const ACK_TITLE: &str = "Message Sent!";

pub const ACK_DESCRIPTION: &str =
    "Thank you for your inquiry. We'll get back to you within 24 hours.";

/// A contact form submission as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&joined.join("; "))
    }
}

/// Reply shown to the visitor once an inquiry is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactAcknowledgement {
    pub title: &'static str,
    pub description: &'static str,
}

impl Default for ContactAcknowledgement {
    fn default() -> Self {
        Self {
            title: ACK_TITLE,
            description: ACK_DESCRIPTION,
        }
    }
}

impl ContactInquiry {
    /// Copy with every field trimmed; a blank message becomes `None`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
        }
    }

    /// Trim and validate, returning the normalized inquiry or one message
    /// per invalid field.
    pub fn validate(&self) -> Result<Self, FieldErrors> {
        let inquiry = self.normalized();
        let mut errors = FieldErrors::default();

        let name_len = inquiry.name.chars().count();
        if name_len == 0 {
            errors.insert("name", "Name is required");
        } else if name_len > MAX_NAME_LEN {
            errors.insert("name", "Name must be less than 100 characters");
        }

        if !inquiry.email.validate_email() {
            errors.insert("email", "Please enter a valid email address");
        } else if inquiry.email.chars().count() > MAX_EMAIL_LEN {
            errors.insert("email", "Email must be less than 255 characters");
        }

        let phone_len = inquiry.phone.chars().count();
        if phone_len == 0 {
            errors.insert("phone", "Phone number is required");
        } else if phone_len > MAX_PHONE_LEN {
            errors.insert("phone", "Phone number must be less than 20 characters");
        }

        if let Some(message) = &inquiry.message {
            if message.chars().count() > MAX_MESSAGE_LEN {
                errors.insert("message", "Message must be less than 2000 characters");
            }
        }

        if errors.is_empty() {
            Ok(inquiry)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid() -> ContactInquiry {
        ContactInquiry {
            name: "Layla Hassan".to_string(),
            email: "layla@example.com".to_string(),
            phone: "+971 50 123 4567".to_string(),
            message: Some("Looking for a walk-in closet quote.".to_string()),
        }
    }

    #[test]
    fn valid_inquiry_passes() {
        assert_matches!(valid().validate(), Ok(_));
    }

    #[test]
    fn fields_are_trimmed() {
        let inquiry = ContactInquiry {
            name: "  Layla  ".to_string(),
            email: " layla@example.com ".to_string(),
            phone: " 0501234567 ".to_string(),
            message: Some("   ".to_string()),
        };
        let ok = inquiry.validate().unwrap();
        assert_eq!(ok.name, "Layla");
        assert_eq!(ok.email, "layla@example.com");
        assert_eq!(ok.phone, "0501234567");
        assert!(ok.message.is_none());
    }

    #[test]
    fn blank_name_is_required() {
        let inquiry = ContactInquiry {
            name: "   ".to_string(),
            ..valid()
        };
        let errors = inquiry.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn long_name_rejected() {
        let inquiry = ContactInquiry {
            name: "a".repeat(MAX_NAME_LEN + 1),
            ..valid()
        };
        let errors = inquiry.validate().unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some("Name must be less than 100 characters")
        );
    }

    #[test]
    fn name_at_limit_accepted() {
        let inquiry = ContactInquiry {
            name: "a".repeat(MAX_NAME_LEN),
            ..valid()
        };
        assert!(inquiry.validate().is_ok());
    }

    #[test]
    fn invalid_email_rejected() {
        let inquiry = ContactInquiry {
            email: "not-an-email".to_string(),
            ..valid()
        };
        let errors = inquiry.validate().unwrap_err();
        assert_eq!(
            errors.get("email"),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn phone_required_and_bounded() {
        let missing = ContactInquiry {
            phone: String::new(),
            ..valid()
        };
        assert_eq!(
            missing.validate().unwrap_err().get("phone"),
            Some("Phone number is required")
        );

        let long = ContactInquiry {
            phone: "1".repeat(MAX_PHONE_LEN + 1),
            ..valid()
        };
        assert_eq!(
            long.validate().unwrap_err().get("phone"),
            Some("Phone number must be less than 20 characters")
        );
    }

    #[test]
    fn message_is_optional_but_bounded() {
        let none = ContactInquiry {
            message: None,
            ..valid()
        };
        assert!(none.validate().is_ok());

        let long = ContactInquiry {
            message: Some("m".repeat(MAX_MESSAGE_LEN + 1)),
            ..valid()
        };
        assert_eq!(
            long.validate().unwrap_err().get("message"),
            Some("Message must be less than 2000 characters")
        );
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ContactInquiry::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["email", "name", "phone"]);
    }

    #[test]
    fn field_errors_serialize_as_map() {
        let errors = ContactInquiry::default().validate().unwrap_err();
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value["name"], "Name is required");
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let inquiry: ContactInquiry = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(inquiry.name, "A");
        assert!(inquiry.email.is_empty());
        assert!(inquiry.message.is_none());
    }
}
