//! # Site API Handlers
//!
//! File: cli/src/commands/serve/api.rs
//!
//! ## Overview
//!
//! The dynamic part of the site server. The browser bundle calls these
//! endpoints instead of holding provider credentials itself:
//!
//! | Route               | Handler          | Response                                             |
//! |---------------------|------------------|------------------------------------------------------|
//! | `GET  /health`      | `health`         | `200 OK`, body `OK`                                  |
//! | `POST /api/contact` | `submit_contact` | `{ outcome, fieldErrors, form, notification }`       |
//! | `POST /api/chat`    | `chat_reply`     | `{ reply }`, always `200`                            |
//!
//! Status codes for `/api/contact`: `200` delivered, `422` field errors or
//! an undecodable body, `503` email provider not configured, `502` provider
//! failure. Every status carries the same JSON shape.
//!
//! A blank chat message gets the "didn't catch that" reply without calling
//! the assistant, matching the chat window, which never sends one.
//!
//! `recovery_page` is the last-resort response used by the panic-catching
//! middleware in `server_logic`.
//!
use crate::chat::persona::EMPTY_REPLY;
use crate::chat::Assistant;
use crate::contact::{
    submit, ContactForm, ContactFormInput, FailureKind, FieldErrors, Mailer, Notification,
    SubmissionOutcome,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Shared, immutable handles used by every request.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub mailer: Arc<Mailer>,
}

/// Routes served ahead of the static bundle.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(submit_contact))
        .route("/api/chat", post(chat_reply))
        .with_state(state)
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub outcome: SubmissionOutcome,
    pub field_errors: FieldErrors,
    /// Form state after the attempt: reset on success, unchanged otherwise.
    pub form: ContactFormInput,
    pub notification: Notification,
}

impl ContactResponse {
    fn new(outcome: SubmissionOutcome, form: ContactForm) -> Self {
        Self {
            notification: Notification::show(&outcome),
            outcome,
            field_errors: form.errors,
            form: form.input,
        }
    }

    fn status(&self) -> StatusCode {
        match self.outcome.failure_kind() {
            None => StatusCode::OK,
            Some(FailureKind::Validation) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(FailureKind::Configuration) => StatusCode::SERVICE_UNAVAILABLE,
            Some(FailureKind::Provider) => StatusCode::BAD_GATEWAY,
        }
    }
}

async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactFormInput>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let response = match payload {
        Ok(Json(input)) => {
            let mut form = ContactForm::new(input);
            let outcome = submit(&mut form, &state.mailer).await;
            ContactResponse::new(outcome, form)
        }
        Err(rejection) => {
            warn!("Rejected contact form body: {}", rejection.body_text());
            ContactResponse::new(SubmissionOutcome::invalid_input(), ContactForm::default())
        }
    };

    (response.status(), Json(response))
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatReply {
    pub reply: String,
}

async fn chat_reply(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatReply> {
    let message = request.message.trim();
    if message.is_empty() {
        debug!("Blank chat message, not calling the assistant");
        return Json(ChatReply {
            reply: EMPTY_REPLY.to_string(),
        });
    }

    let reply = state.assistant.generate_response(message).await;
    Json(ChatReply { reply })
}

const RECOVERY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Something went wrong</title></head>
<body>
  <h1>Something went wrong</h1>
  <p>We're sorry, an unexpected error occurred. Please reload the page to try again.</p>
  <p><a href="/">Reload</a></p>
</body>
</html>
"#;

/// Response for a request whose handler panicked.
pub fn recovery_page(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        RECOVERY_PAGE,
    )
        .into_response()
}
