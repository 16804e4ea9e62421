//! # Contact Form Submission
//!
//! File: cli/src/contact/submit.rs
//!
//! ## Overview
//!
//! `submit` runs one user-initiated submission end to end:
//!
//! 1. Validate. Any field error stores the errors on the form and stops
//!    before the network.
//! 2. Check the provider configuration. Missing identifiers are a deployment
//!    problem: logged for operators, reported to the user in general terms.
//! 3. Deliver once through the `Mailer`.
//! 4. On success, reset the form. On failure, keep the input so nothing has
//!    to be retyped.
//!
//! Failures are values (`SubmissionOutcome::Failure`), never errors.
//!
use super::form::ContactForm;
use super::mailer::{Mailer, MailerError};
use super::validation::validate;
use serde::Serialize;
use tracing::{error, info, warn};

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
pub const INVALID_INPUT_MESSAGE: &str = "Please fill in all required fields correctly.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service is not configured. Please contact info@oracoafrica.com directly.";
pub const DELIVERY_FALLBACK_MESSAGE: &str =
    "Failed to send message. Please try again or email us directly at info@oracoafrica.com";

/// Which stage stopped a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Validation,
    Configuration,
    Provider,
}

/// Result of one submission, carrying the text for the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Success { message: String },
    Failure { kind: FailureKind, reason: String },
}

impl SubmissionOutcome {
    fn failure(kind: FailureKind, reason: impl Into<String>) -> Self {
        SubmissionOutcome::Failure {
            kind,
            reason: reason.into(),
        }
    }

    /// The outcome for input that cannot be accepted as entered.
    pub fn invalid_input() -> Self {
        Self::failure(FailureKind::Validation, INVALID_INPUT_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Success { message } => message,
            SubmissionOutcome::Failure { reason, .. } => reason,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            SubmissionOutcome::Success { .. } => None,
            SubmissionOutcome::Failure { kind, .. } => Some(*kind),
        }
    }
}

/// Submits the form's current input. See the module docs for the sequence.
pub async fn submit(form: &mut ContactForm, mailer: &Mailer) -> SubmissionOutcome {
    let errors = validate(&form.input);
    if !errors.is_empty() {
        info!("Contact form rejected with {} field error(s)", errors.len());
        form.errors = errors;
        return SubmissionOutcome::invalid_input();
    }
    form.errors = errors;

    if !mailer.is_configured() {
        error!("Contact form cannot be delivered: email provider credentials are not configured");
        return SubmissionOutcome::failure(FailureKind::Configuration, NOT_CONFIGURED_MESSAGE);
    }

    match mailer.send(&form.input).await {
        Ok(()) => {
            info!("Contact message delivered");
            form.reset();
            SubmissionOutcome::Success {
                message: SUCCESS_MESSAGE.to_string(),
            }
        }
        Err(err @ MailerError::NotConfigured { .. }) => {
            error!("Contact form cannot be delivered: {}", err);
            SubmissionOutcome::failure(FailureKind::Configuration, NOT_CONFIGURED_MESSAGE)
        }
        Err(err) => {
            warn!("Contact message delivery failed: {}", err);
            let reason = err
                .provider_text()
                .map(str::to_string)
                .unwrap_or_else(|| DELIVERY_FALLBACK_MESSAGE.to_string());
            SubmissionOutcome::failure(FailureKind::Provider, reason)
        }
    }
}
