//! # Chat Assistant (Text-Generation Adapter)
//!
//! File: cli/src/chat/assistant.rs
//!
//! ## Overview
//!
//! Turns one visitor message into one reply string. Every failure mode ends
//! here as a fixed, user-safe string; callers never see an error.
//!
//! - No credential: `OFFLINE_REPLY`, without building an HTTP client or
//!   touching the network.
//! - Provider answered with text: that text.
//! - Provider answered with no text: `EMPTY_REPLY`.
//! - Transport failure, non-2xx, or an undecodable body: logged, `ERROR_REPLY`.
//!
//! ## Wire format
//!
//! ```text
//! POST {base_url}/v1beta/models/{model}:generateContent
//! x-goog-api-key: <credential>
//! {
//!   "systemInstruction": { "parts": [{ "text": "<persona>" }] },
//!   "contents": [{ "role": "user", "parts": [{ "text": "<message>" }] }]
//! }
//! ```
//!
//! The HTTP client is built lazily, at most once per assistant, on the first
//! call that has a credential.
//!
use super::persona::{EMPTY_REPLY, ERROR_REPLY, OFFLINE_REPLY, SYSTEM_INSTRUCTION};
use crate::core::config::ChatConfig;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("request to text-generation provider failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("text-generation provider returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("could not decode text-generation response: {0}")]
    Parse(#[source] reqwest::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate; empty when there are none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// The chat widget's connection to the text-generation provider.
#[derive(Debug)]
pub struct Assistant {
    api_key: Option<String>,
    model: String,
    base_url: String,
    http: OnceCell<reqwest::Client>,
}

impl Assistant {
    pub fn from_config(config: &ChatConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: OnceCell::new(),
        }
    }

    /// Whether a provider credential is configured.
    pub fn is_online(&self) -> bool {
        self.api_key.is_some()
    }

    /// One reply for one message. Never fails.
    pub async fn generate_response(&self, user_message: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("No chat credential configured, answering offline");
            return OFFLINE_REPLY.to_string();
        };

        match self.request(api_key, user_message).await {
            Ok(text) if text.is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(e) => {
                error!("Text-generation API error: {}", e);
                ERROR_REPLY.to_string()
            }
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn request(&self, api_key: &str, user_message: &str) -> Result<String, ChatError> {
        let http = self.http.get_or_init(reqwest::Client::new);
        let body = GenerateContentRequest {
            system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
            contents: vec![Content::text(Some("user"), user_message)],
        };

        let response = http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(ChatError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(ChatError::Parse)?;
        Ok(parsed.text())
    }
}
