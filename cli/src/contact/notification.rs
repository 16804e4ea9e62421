//! # Submission Notification
//!
//! File: cli/src/contact/notification.rs
//!
//! The toast shown after a submit. It stays visible until `AUTO_DISMISS` has
//! elapsed since it was shown, or until it is dismissed explicitly.
//!
//! Serialized for `/api/contact` as `{ kind, message, dismissAfterMs }`,
//! where `dismissAfterMs` is the time left before the toast hides itself.
//!
use super::submit::SubmissionOutcome;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::time::{Duration, Instant};

pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    kind: NotificationKind,
    message: String,
    shown_at: Instant,
    dismissed: bool,
}

impl Notification {
    pub fn show(outcome: &SubmissionOutcome) -> Self {
        Self::show_at(outcome, Instant::now())
    }

    pub fn show_at(outcome: &SubmissionOutcome, shown_at: Instant) -> Self {
        let kind = if outcome.is_success() {
            NotificationKind::Success
        } else {
            NotificationKind::Error
        };
        Self {
            kind,
            message: outcome.message().to_string(),
            shown_at,
            dismissed: false,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    #[allow(dead_code)] // Close button of the toast; the terminal and the API let it expire.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        !self.dismissed && now.saturating_duration_since(self.shown_at) < AUTO_DISMISS
    }

    /// Time left on screen at `now`; zero once hidden.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        if self.is_visible_at(now) {
            AUTO_DISMISS - now.saturating_duration_since(self.shown_at)
        } else {
            Duration::ZERO
        }
    }
}

impl Serialize for Notification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Notification", 3)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("message", self.message())?;
        state.serialize_field(
            "dismissAfterMs",
            &(self.remaining_at(Instant::now()).as_millis() as u64),
        )?;
        state.end()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::submit::FailureKind;

    fn failure() -> SubmissionOutcome {
        SubmissionOutcome::Failure {
            kind: FailureKind::Validation,
            reason: "Please fill in all required fields correctly.".into(),
        }
    }

    #[test]
    fn test_auto_dismiss_after_five_seconds() {
        let start = Instant::now();
        let toast = Notification::show_at(&failure(), start);

        assert_eq!(toast.kind(), NotificationKind::Error);
        assert!(toast.is_visible_at(start));
        assert!(toast.is_visible_at(start + Duration::from_millis(4_999)));
        assert!(!toast.is_visible_at(start + AUTO_DISMISS));
    }

    #[test]
    fn test_explicit_dismiss() {
        let start = Instant::now();
        let mut toast = Notification::show_at(
            &SubmissionOutcome::Success {
                message: "sent".into(),
            },
            start,
        );
        assert_eq!(toast.kind(), NotificationKind::Success);
        toast.dismiss();
        assert!(!toast.is_visible_at(start));
    }

    #[test]
    fn test_remaining_time() {
        let start = Instant::now();
        let mut toast = Notification::show_at(&failure(), start);
        assert_eq!(toast.remaining_at(start), AUTO_DISMISS);
        assert_eq!(
            toast.remaining_at(start + Duration::from_secs(2)),
            Duration::from_secs(3)
        );
        assert_eq!(toast.remaining_at(start + Duration::from_secs(9)), Duration::ZERO);

        toast.dismiss();
        assert_eq!(toast.remaining_at(start), Duration::ZERO);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Notification::show(&failure())).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "Please fill in all required fields correctly.");
        let remaining = json["dismissAfterMs"].as_u64().unwrap();
        assert!(remaining > 0 && remaining <= 5_000);

        let mut dismissed = Notification::show(&failure());
        dismissed.dismiss();
        assert_eq!(serde_json::to_value(dismissed).unwrap()["dismissAfterMs"], 0);
    }

    #[test]
    fn test_display_includes_message() {
        let toast = Notification::show(&failure());
        assert_eq!(
            toast.to_string(),
            "✖ Please fill in all required fields correctly."
        );
        assert_eq!(toast.message(), "Please fill in all required fields correctly.");
    }
}
