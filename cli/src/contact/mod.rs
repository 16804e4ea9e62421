//! # Contact Form
//!
//! File: cli/src/contact/mod.rs
//!
//! ## Overview
//!
//! Everything behind the site's "Get in Touch" form:
//! - `form`: the input record, the service-interest list and the mounted form state
//! - `validation`: the pure field validator
//! - `mailer`: the email-delivery provider client
//! - `submit`: the validate → check configuration → send → reset sequence
//! - `notification`: the auto-dismissing toast that reports an outcome
//!
//! Both `oraco contact` and the server's `POST /api/contact` endpoint drive
//! `submit::submit`.
//!
pub mod form;
pub mod mailer;
pub mod notification;
pub mod submit;
pub mod validation;

pub use form::{ContactForm, ContactFormInput, ServiceInterest};
pub use mailer::Mailer;
pub use notification::{Notification, NotificationKind};
pub use submit::{submit, FailureKind, SubmissionOutcome};
pub use validation::{FieldErrors, FormField};
