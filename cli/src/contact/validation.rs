//! # Contact Form Validation
//!
//! File: cli/src/contact/validation.rs
//!
//! ## Overview
//!
//! `validate` maps a `ContactFormInput` snapshot to the set of field-level
//! error messages shown under the inputs. It is pure: every rule runs on
//! every call, nothing is mutated, and the same input always yields the same
//! `FieldErrors`.
//!
//! | Field      | Rule                                  | Message                               |
//! |------------|---------------------------------------|---------------------------------------|
//! | first name | non-empty after trim                  | First name is required                |
//! | last name  | non-empty after trim                  | Last name is required                 |
//! | email      | non-empty after trim                  | Email is required                     |
//! | email      | `local@domain.tld`, no whitespace     | Please enter a valid email address    |
//! | message    | non-empty after trim                  | Message is required                   |
//!
use super::form::ContactFormInput;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// `\s` plus U+FEFF, which browsers count as whitespace and Unicode does not.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

#[allow(dead_code)] // Backs `is_valid_phone`; the contact form has no phone field.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("phone pattern compiles"));

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// The validated text fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to message. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Whitespace as a browser's `String.prototype.trim` sees it: Unicode
/// White_Space plus the byte-order mark.
fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// True when `value` has at least one non-whitespace character.
pub fn is_present(value: &str) -> bool {
    !value.trim_matches(is_blank_char).is_empty()
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Optional phone number: empty, or digits, spaces and `-+()` only.
#[allow(dead_code)] // Standalone helper kept for forms that collect a phone number.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || PHONE_PATTERN.is_match(phone)
}

/// Runs every contact-form rule against `input`.
pub fn validate(input: &ContactFormInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if !is_present(&input.first_name) {
        errors.insert(FormField::FirstName, FIRST_NAME_REQUIRED);
    }

    if !is_present(&input.last_name) {
        errors.insert(FormField::LastName, LAST_NAME_REQUIRED);
    }

    if !is_present(&input.email) {
        errors.insert(FormField::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&input.email) {
        errors.insert(FormField::Email, EMAIL_INVALID);
    }

    if !is_present(&input.message) {
        errors.insert(FormField::Message, MESSAGE_REQUIRED);
    }

    errors
}
