use unicode_segmentation::UnicodeSegmentation;

use super::sanitize::sanitize;
use super::validation::{ValidationFailure, validate_email, validate_phone};

/// A contact-form submission whose fields have been sanitized on
/// construction. The fields are private so a raw string can never sneak past
/// `new`: anything holding a `ContactSubmission` may treat its contents as
/// markup-free.
#[derive(Debug)]
pub struct ContactSubmission {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
}

impl ContactSubmission {
    /// Sanitizes every field. A phone that sanitizes down to the empty
    /// string is treated as not provided.
    pub fn new(name: String, email: String, phone: Option<String>, message: String) -> Self {
        Self {
            name: sanitize(&name),
            email: sanitize(&email),
            phone: phone.map(|p| sanitize(&p)).filter(|p| !p.is_empty()),
            message: sanitize(&message),
        }
    }

    /// Runs every field check, accumulating failures in a fixed order
    /// (name, email, phone, message) so the caller can report them all at
    /// once. No short-circuiting.
    pub fn validate(&self) -> Result<(), Vec<ValidationFailure>> {
        let mut failures = Vec::new();
        if self.name.graphemes(true).count() < 2 {
            failures.push(ValidationFailure::NameTooShort);
        }
        if !validate_email(&self.email) {
            failures.push(ValidationFailure::EmailInvalid);
        }
        if let Some(phone) = &self.phone {
            if !validate_phone(phone) {
                failures.push(ValidationFailure::PhoneInvalid);
            }
        }
        if self.message.graphemes(true).count() < 10 {
            failures.push(ValidationFailure::MessageTooShort);
        }
        if failures.is_empty() { Ok(()) } else { Err(failures) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
