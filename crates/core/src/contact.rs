//! # Contact Form
//!
//! Validation and acknowledgement of contact-page submissions. Messages
//! are logged and acknowledged; nothing is stored.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We'll get back to you soon.";

/// Fields of the contact form, all required
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// Receipt returned for an accepted submission
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement {
    pub message: &'static str,
    pub received_at: DateTime<Utc>,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"))
}

impl ContactForm {
    /// Check that every field is filled in and the email looks like one
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::InvalidContact(format!("{} is required", field)));
            }
        }

        if !email_pattern().is_match(self.email.trim()) {
            return Err(Error::InvalidContact(format!(
                "'{}' is not an email address",
                self.email.trim()
            )));
        }

        Ok(())
    }

    /// Validate and acknowledge a submission
    pub fn submit(&self) -> Result<Acknowledgement> {
        if let Err(e) = self.validate() {
            tracing::warn!("Rejected contact submission: {}", e);
            return Err(e);
        }

        tracing::info!(
            from = %self.email.trim(),
            subject = %self.subject.trim(),
            "Contact message received"
        );
        Ok(Acknowledgement {
            message: ACKNOWLEDGEMENT,
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Course question".to_string(),
            message: "Is Python Basics suitable for a 10 year old?".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_acknowledged() {
        let ack = filled().submit().unwrap();
        assert_eq!(ack.message, ACKNOWLEDGEMENT);
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let form = ContactForm {
            subject: "   ".to_string(),
            ..filled()
        };

        let err = form.validate().unwrap_err();
        assert!(err.to_string().contains("subject is required"));
    }

    #[test]
    fn test_email_needs_at_sign() {
        let form = ContactForm {
            email: "ada.example.com".to_string(),
            ..filled()
        };
        assert!(matches!(form.submit(), Err(Error::InvalidContact(_))));
    }
}
