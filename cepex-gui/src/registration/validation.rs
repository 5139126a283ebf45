//! Pre-submit checks standing in for the native constraints of an HTML form.
//!
//! Every failure is local to the form: it is recorded against the offending field and
//! rendered inline next to it, it never aborts the application.
use std::collections::BTreeMap;

use super::record::{Field, Identity};

pub const TAX_ID_DIGITS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Tax ID must have 11 digits (000.000.000-00).")]
    InvalidTaxId,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required.",
            Self::InvalidEmail => "Invalid email address.",
            Self::InvalidTaxId => "Tax ID must have 11 digits (000.000.000-00).",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

pub fn is_valid_email(email: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        email,
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

/// Accepts `000.000.000-00` as well as the bare eleven digits.
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    let mut digits = 0;
    for c in tax_id.trim().chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' | '-' | ' ' => {}
            _ => return false,
        }
    }
    digits == TAX_ID_DIGITS
}

/// Check every identity field. Password equality is not part of this: it is tracked on its own
/// by the form.
pub fn validate(identity: &Identity) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        let value = identity.get(field);
        if value.trim().is_empty() {
            errors.insert(field, FieldError::Required);
            continue;
        }
        match field {
            Field::Email if !is_valid_email(value.trim()) => {
                errors.insert(field, FieldError::InvalidEmail);
            }
            Field::TaxId if !is_valid_tax_id(value) => {
                errors.insert(field, FieldError::InvalidTaxId);
            }
            _ => {}
        }
    }
    errors
}
