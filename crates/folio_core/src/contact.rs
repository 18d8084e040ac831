//! Contact form validation and the simulated send.
//!
//! Nothing is sent anywhere: a valid submission shows a "sending" status,
//! waits [`ContactConfig::send_delay_ms`], then shows a thank-you message.

use serde::{Deserialize, Serialize};

/// Form tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Delay of the simulated send (milliseconds).
    pub send_delay_ms: u32,
    /// Status shown while "sending".
    pub sending_message: String,
    /// Status shown afterwards.
    pub sent_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 800,
            sending_message: "Sending…".to_owned(),
            sent_message: "Thanks! I’ll get back to you within 24 hours.".to_owned(),
        }
    }
}

/// A form field (and its element id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `#name`
    Name,
    /// `#email`
    Email,
    /// `#message`
    Message,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Inline error shown when the field is invalid.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name.",
            Self::Email => "Please enter a valid email.",
            Self::Message => "Please write a slightly longer message.",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

/// Submitted values, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Builds a form from raw input values, trimming each.
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            message: message.trim().to_owned(),
        }
    }

    /// Checks every field.
    #[must_use]
    pub fn validate(&self) -> Validation {
        let mut errors = [None; 3];
        if utf16_len(&self.name) < 2 {
            errors[Field::Name.index()] = Some(Field::Name.error_message());
        }
        if !looks_like_email(&self.email) {
            errors[Field::Email.index()] = Some(Field::Email.error_message());
        }
        if utf16_len(&self.message) < 10 {
            errors[Field::Message.index()] = Some(Field::Message.error_message());
        }
        Validation { errors }
    }
}

/// Per-field validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    errors: [Option<&'static str>; 3],
}

impl Validation {
    /// Returns true if every field passed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }

    /// Error for one field, if it failed.
    #[must_use]
    pub const fn error(&self, field: Field) -> Option<&'static str> {
        self.errors[field.index()]
    }

    /// Inline text for every field (empty when it passed).
    pub fn messages(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.error(field).unwrap_or("")))
    }
}

/// Length as the browser reports it for form values (UTF-16 units), so a
/// non-BMP char such as an emoji counts twice.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// `something@something.something` with no whitespace anywhere.
///
/// Some character must precede the `@`, and the domain part needs a dot with
/// at least one character on each side.
fn looks_like_email(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    // Any '@' may be the separator, and any later '.' the domain dot.
    s.match_indices('@').any(|(at, _)| {
        let (local, domain) = (&s[..at], &s[at + 1..]);
        !local.is_empty()
            && domain
                .match_indices('.')
                .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = ContactForm::new("  Ada ", "ada@example.com", "Hello there, let's talk.");
        assert!(form.validate().is_ok());
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_each_field_fails_independently() {
        let v = ContactForm::new("A", "nope", "short").validate();
        assert!(!v.is_ok());
        assert_eq!(v.error(Field::Name), Some("Please enter your name."));
        assert_eq!(v.error(Field::Email), Some("Please enter a valid email."));
        assert_eq!(v.error(Field::Message), Some("Please write a slightly longer message."));

        let v = ContactForm::new("Ada", "ada@example.com", "short").validate();
        let messages: Vec<_> = v.messages().collect();
        assert_eq!(messages[0], (Field::Name, ""));
        assert_eq!(messages[2].1, "Please write a slightly longer message.");
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("a@b@c.d"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a@.c"));
        assert!(!looks_like_email("a b@c.d"));
        assert!(!looks_like_email("ab.c"));
    }

    #[test]
    fn test_trimmed_before_length_checks() {
        let v = ContactForm::new("   ", "a@b.c", "          x         ").validate();
        assert!(v.error(Field::Name).is_some());
        assert!(v.error(Field::Message).is_some());
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // One emoji is two UTF-16 units: long enough for a name.
        let v = ContactForm::new("😀", "a@b.c", "😀😀😀😀😀").validate();
        assert_eq!(v.error(Field::Name), None);
        assert_eq!(v.error(Field::Message), None);

        let v = ContactForm::new("é", "a@b.c", "ééééééééé").validate();
        assert!(v.error(Field::Name).is_some());
        assert!(v.error(Field::Message).is_some());
    }
}
