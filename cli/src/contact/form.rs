//! # Contact Form State
//!
//! File: cli/src/contact/form.rs
//!
//! The record typed into the contact form, the fixed list of service
//! interests, and `ContactForm`, which pairs the current input with the
//! field errors from the last submit attempt.
//!
use super::validation::{FieldErrors, FormField};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The service a visitor is enquiring about. Always has a value, so it is never validated.
///
/// Deserializes from its label. `null` gives the default and an unknown
/// label gives `Other`, so a stale or hand-written client still reaches the
/// validator instead of being rejected by the JSON layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
pub enum ServiceInterest {
    #[default]
    #[serde(rename = "Edutech Solutions")]
    EdutechSolutions,
    #[serde(rename = "System Integration")]
    SystemIntegration,
    #[serde(rename = "Business Strategy")]
    BusinessStrategy,
    #[serde(rename = "Verification")]
    Verification,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceInterest {
    pub const ALL: [ServiceInterest; 5] = [
        ServiceInterest::EdutechSolutions,
        ServiceInterest::SystemIntegration,
        ServiceInterest::BusinessStrategy,
        ServiceInterest::Verification,
        ServiceInterest::Other,
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.label() == label.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceInterest::EdutechSolutions => "Edutech Solutions",
            ServiceInterest::SystemIntegration => "System Integration",
            ServiceInterest::BusinessStrategy => "Business Strategy",
            ServiceInterest::Verification => "Verification",
            ServiceInterest::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ServiceInterest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<String>::deserialize(deserializer)? {
            None => ServiceInterest::default(),
            Some(label) => ServiceInterest::from_label(&label).unwrap_or(ServiceInterest::Other),
        })
    }
}

/// Text fields accept `null` as empty.
fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One snapshot of the contact form. Missing or `null` JSON fields
/// deserialize to their defaults so that an incomplete body is reported as
/// field errors rather than rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormInput {
    #[serde(deserialize_with = "text_or_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub email: String,
    pub service_interest: ServiceInterest,
    #[serde(deserialize_with = "text_or_empty")]
    pub message: String,
}

impl ContactFormInput {
    /// Sender display name as delivered to the mailbox: "First Last".
    pub fn sender_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// The mounted form: current input plus the errors from the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub input: ContactFormInput,
    pub errors: FieldErrors,
}

impl ContactForm {
    pub fn new(input: ContactFormInput) -> Self {
        Self {
            input,
            errors: FieldErrors::default(),
        }
    }

    /// Updates one text field and clears that field's error, if any.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::FirstName => self.input.first_name = value,
            FormField::LastName => self.input.last_name = value,
            FormField::Email => self.input.email = value,
            FormField::Message => self.input.message = value,
        }
        self.errors.clear(field);
    }

    pub fn set_service_interest(&mut self, interest: ServiceInterest) {
        self.input.service_interest = interest;
    }

    /// Back to the freshly mounted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
