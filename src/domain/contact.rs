// src/domain/contact.rs
use crate::domain::errors::{DomainResult, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// RFC 5322 shaped: dot-atom or quoted local part, host name or address literal.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\])$"#,
    )
    .expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{2} [0-9]{3} [0-9]{3} [0-9]{3}$").expect("valid phone regex"));

pub fn is_valid_mail(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Optional mail and phone. Stored as a JSON document on advert headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl ContactDetails {
    /// Validate raw inputs. Empty strings become absent fields; every
    /// non-empty field must match its own pattern, and at least one field
    /// must be present.
    pub fn new(mail: &str, phone_number: &str) -> DomainResult<Self> {
        let mail = non_empty(mail);
        let phone_number = non_empty(phone_number);

        if mail.as_deref().is_some_and(|m| !is_valid_mail(m))
            || phone_number.as_deref().is_some_and(|p| !is_valid_phone(p))
        {
            return Err(ValidationError::InvalidContactData.into());
        }

        let details = Self { mail, phone_number };
        if details.is_empty() {
            return Err(ValidationError::InvalidContactData.into());
        }
        Ok(details)
    }

    /// Build from already-stored values without re-validating them.
    pub fn from_stored(mail: Option<String>, phone_number: Option<String>) -> Self {
        Self { mail, phone_number }
    }

    pub fn is_empty(&self) -> bool {
        self.mail.is_none() && self.phone_number.is_none()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn assert_invalid(result: DomainResult<ContactDetails>) {
        assert!(matches!(
            result,
            Err(DomainError::Invalid(ValidationError::InvalidContactData))
        ));
    }

    #[test]
    fn accepts_mail_and_phone() {
        let details = ContactDetails::new("foo@gmail.com", "+48 222 222 222").unwrap();
        assert_eq!(details.mail.as_deref(), Some("foo@gmail.com"));
        assert_eq!(details.phone_number.as_deref(), Some("+48 222 222 222"));
    }

    #[test]
    fn empty_strings_become_absent() {
        let details = ContactDetails::new("", "+38 050 123 456").unwrap();
        assert!(details.mail.is_none());
        assert!(!details.is_empty());

        let details = ContactDetails::new("Jan.Kowalski@example.pl", "").unwrap();
        assert!(details.phone_number.is_none());
    }

    #[test]
    fn rejects_any_invalid_non_empty_field() {
        assert_invalid(ContactDetails::new("not-a-mail", "+48 222 222 222"));
        assert_invalid(ContactDetails::new("foo@gmail.com", "+482222222"));
        assert_invalid(ContactDetails::new("nope", "nope"));
    }

    #[test]
    fn rejects_when_nothing_is_given() {
        assert_invalid(ContactDetails::new("", ""));
    }

    #[test]
    fn empty_means_both_absent() {
        assert!(ContactDetails::default().is_empty());
        assert!(!ContactDetails::from_stored(Some("a@b.cd".into()), None).is_empty());
    }

    #[test]
    fn phone_pattern_is_strict() {
        assert!(is_valid_phone("+48 123 456 789"));
        assert!(!is_valid_phone("48 123 456 789"));
        assert!(!is_valid_phone("+48 123 456 7890"));
        assert!(!is_valid_phone("+48123456789"));
    }

    #[test]
    fn mail_pattern_accepts_common_shapes() {
        assert!(is_valid_mail("user.name+tag@sub.example.com"));
        assert!(is_valid_mail("admin@[192.168.0.1]"));
        assert!(!is_valid_mail("user@"));
        assert!(!is_valid_mail("@example.com"));
        assert!(!is_valid_mail("user name@example.com"));
    }
}
