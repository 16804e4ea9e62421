//! # Oraco CLI Contact Integration Tests
//!
//! File: cli/tests/contact.rs
//!
//! Runs `oraco contact` end to end. Delivery against a live provider is
//! covered by the unit tests with a mock server; here the provider is
//! either unconfigured or never reached.
//!
mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_invalid_fields_are_reported() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args([
            "contact",
            "--last-name",
            "Doe",
            "--email",
            "bad",
            "--message",
            "hi",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please fill in all required fields correctly.",
        ))
        .stderr(predicate::str::contains("firstName: First name is required"))
        .stderr(predicate::str::contains(
            "email: Please enter a valid email address",
        ))
        .stderr(predicate::str::contains("lastName").not());
}

#[test]
fn test_unconfigured_provider_is_reported() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args([
            "contact",
            "--first-name",
            "Jane",
            "--last-name",
            "Doe",
            "--email",
            "jane@company.com",
            "--service",
            "verification",
            "--message",
            "Tell me more",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Email service is not configured. Please contact info@oracoafrica.com directly.",
        ));
}

#[test]
fn test_partial_configuration_counts_as_unconfigured() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .env("EMAILJS_SERVICE_ID", "service_abc")
        .env("EMAILJS_TEMPLATE_ID", "template_xyz")
        .env("EMAILJS_PUBLIC_KEY", "   ")
        .args([
            "contact",
            "--first-name",
            "Jane",
            "--last-name",
            "Doe",
            "--email",
            "jane@company.com",
            "--message",
            "Tell me more",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Email service is not configured"));
}

#[test]
fn test_unknown_service_rejected_by_parser() {
    let dir = tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["contact", "--service", "astrology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
