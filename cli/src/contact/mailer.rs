//! # Email-Delivery Client
//!
//! File: cli/src/contact/mailer.rs
//!
//! ## Overview
//!
//! Sends a validated contact-form submission to the email-delivery provider
//! (an EmailJS-compatible REST endpoint). The provider is addressed by a
//! service id, a template id and a public key, all taken from deployment
//! configuration. No part of the response is interpreted beyond
//! success/failure and, on failure, the provider's error text.
//!
//! ## Wire format
//!
//! ```text
//! POST {base_url}/api/v1.0/email/send
//! {
//!   "service_id": "...", "template_id": "...", "user_id": "<public key>",
//!   "template_params": {
//!     "from_name": "Jane Doe", "from_email": "jane@company.com",
//!     "service_interest": "Edutech Solutions", "message": "...",
//!     "to_name": "Oraco Africa"
//!   }
//! }
//! ```
//!
use super::form::ContactFormInput;
use crate::core::config::EmailConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Display name of the receiving mailbox, filled into every template.
pub const RECIPIENT_NAME: &str = "Oraco Africa";

const SEND_PATH: &str = "/api/v1.0/email/send";

/// Why a delivery attempt did not succeed.
#[derive(Error, Debug)]
pub enum MailerError {
    #[error("email delivery is not configured (missing {missing})")]
    NotConfigured { missing: String },

    #[error("email provider unreachable: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

impl MailerError {
    /// Text the provider sent back with a rejection, if it sent any.
    pub fn provider_text(&self) -> Option<&str> {
        match self {
            MailerError::Rejected { body, .. } if !body.trim().is_empty() => Some(body.trim()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Credentials {
    service_id: String,
    template_id: String,
    public_key: String,
}

#[derive(Serialize, Debug)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize, Debug)]
struct TemplateParams<'a> {
    from_name: String,
    from_email: &'a str,
    service_interest: &'static str,
    message: &'a str,
    to_name: &'static str,
}

/// Client for the email-delivery provider.
#[derive(Debug, Clone)]
pub struct Mailer {
    credentials: Option<Credentials>,
    missing: Vec<&'static str>,
    endpoint: String,
    http: reqwest::Client,
}

impl Mailer {
    pub fn from_config(config: &EmailConfig) -> Self {
        let mut missing = Vec::new();
        if config.service_id.is_none() {
            missing.push("service id");
        }
        if config.template_id.is_none() {
            missing.push("template id");
        }
        if config.public_key.is_none() {
            missing.push("public key");
        }

        let credentials = match (&config.service_id, &config.template_id, &config.public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(Credentials {
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
            }),
            _ => None,
        };

        Self {
            credentials,
            missing,
            endpoint: format!("{}{}", config.base_url.trim_end_matches('/'), SEND_PATH),
            http: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// One delivery attempt. No retry.
    pub async fn send(&self, input: &ContactFormInput) -> Result<(), MailerError> {
        let credentials = self.credentials.as_ref().ok_or_else(|| MailerError::NotConfigured {
            missing: self.missing.join(", "),
        })?;

        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: TemplateParams {
                from_name: input.sender_name(),
                from_email: input.email.trim(),
                service_interest: input.service_interest.label(),
                message: &input.message,
                to_name: RECIPIENT_NAME,
            },
        };

        debug!("Sending contact message to {}", self.endpoint);
        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn config_for(base_url: &str) -> EmailConfig {
        EmailConfig {
            service_id: Some("service_abc".into()),
            template_id: Some("template_xyz".into()),
            public_key: Some("pk_123".into()),
            base_url: base_url.to_string(),
        }
    }

    fn input() -> ContactFormInput {
        ContactFormInput {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@company.com".into(),
            message: "Tell me more".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_fields_reported() {
        let mailer = Mailer::from_config(&EmailConfig {
            service_id: Some("svc".into()),
            ..EmailConfig::default()
        });
        assert!(!mailer.is_configured());
        assert_eq!(mailer.missing, vec!["template id", "public key"]);
    }

    #[tokio::test]
    async fn test_send_posts_expected_payload() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", SEND_PATH)
            .match_body(Matcher::Json(json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Jane Doe",
                    "from_email": "jane@company.com",
                    "service_interest": "Edutech Solutions",
                    "message": "Tell me more",
                    "to_name": "Oraco Africa"
                }
            })))
            .with_status(200)
            .with_body("OK")
            .expect(1)
            .create_async()
            .await;

        let mailer = Mailer::from_config(&config_for(&server.url()));
        mailer.send(&input()).await.expect("delivery should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_carries_provider_text() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", SEND_PATH)
            .with_status(400)
            .with_body("The template ID is invalid")
            .create_async()
            .await;

        let mailer = Mailer::from_config(&config_for(&server.url()));
        let err = mailer.send(&input()).await.unwrap_err();
        assert!(matches!(err, MailerError::Rejected { status: 400, .. }));
        assert_eq!(err.provider_text(), Some("The template ID is invalid"));
    }

    #[tokio::test]
    async fn test_not_configured_never_touches_network() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

        let mailer = Mailer::from_config(&EmailConfig {
            base_url: server.url(),
            ..EmailConfig::default()
        });
        let err = mailer.send(&input()).await.unwrap_err();
        assert!(matches!(err, MailerError::NotConfigured { .. }));
        assert!(err.provider_text().is_none());
        mock.assert_async().await;
    }
}
