//! # Oraco Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads, merges and validates the settings shared by all `oraco` commands:
//! the server section used by `oraco serve`, the chat section holding the
//! text-generation credential, and the email section holding the
//! email-delivery identifiers.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Environment variables (`GEMINI_API_KEY`, `EMAILJS_SERVICE_ID`, ...)
//! 2. A TOML file: `--config <path>` if given, else `.oraco.toml` in the
//!    current directory (if present)
//! 3. Default values defined in the code
//!
//! `HOST` and `PORT` are read by `oraco serve` through its own arguments,
//! which sit above all three layers for the server section.
//!
//! Blank strings are treated as absent, so an exported-but-empty credential
//! behaves exactly like a missing one.
//!
//! ## Examples
//!
//! ```toml
//! [server]
//! port = 8080
//! directory = "dist"
//!
//! [chat]
//! model = "gemini-2.5-flash"
//!
//! [email]
//! service_id = "service_abc"
//! template_id = "template_xyz"
//! public_key = "pk_123"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(cli.config.as_deref())?;
//! let assistant = Assistant::from_config(&cfg.chat);
//! ```
//!
use crate::core::error::{Result, SiteError};
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::{
    fs,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Name of the project configuration file looked up in the working directory.
pub const PROJECT_CONFIG_FILENAME: &str = ".oraco.toml";

/// Model used for chat replies unless configured otherwise.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_CHAT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_EMAIL_BASE_URL: &str = "https://api.emailjs.com";

/// Top-level configuration, as read from TOML and then overridden from the environment.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub email: EmailConfig,
    /// The file this configuration was read from, if any. Relative paths in
    /// the `[server]` section are resolved against its parent directory.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Settings for `oraco serve`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the pre-built front-end bundle.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Entry document returned for every non-asset path.
    #[serde(default = "default_index_file")]
    pub index_file: String,
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

/// Settings for the text-generation provider behind the chat assistant.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Provider credential. When absent the assistant runs in offline mode.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_chat_model")]
    pub model: String,
    #[serde(default = "default_chat_base_url")]
    pub base_url: String,
}

/// Settings for the email-delivery provider behind the contact form.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EmailConfig {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}
fn default_port() -> u16 {
    3000
}
fn default_directory() -> String {
    "dist".to_string()
}
fn default_index_file() -> String {
    "index.html".to_string()
}
fn default_true() -> bool {
    true
}
fn default_chat_model() -> String {
    DEFAULT_CHAT_MODEL.to_string()
}
fn default_chat_base_url() -> String {
    DEFAULT_CHAT_BASE_URL.to_string()
}
fn default_email_base_url() -> String {
    DEFAULT_EMAIL_BASE_URL.to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            directory: default_directory(),
            index_file: default_index_file(),
            enable_cors: true,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_chat_model(),
            base_url: default_chat_base_url(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            base_url: default_email_base_url(),
        }
    }
}

impl ServerSection {
    /// The bundle directory with `~` expanded and, when relative, anchored at
    /// `base` (the config file's directory, or the working directory).
    pub fn directory_path(&self, base: &Path) -> PathBuf {
        let expanded = PathBuf::from(shellexpand::tilde(&self.directory).into_owned());
        if expanded.is_absolute() {
            expanded
        } else {
            base.join(expanded)
        }
    }
}

/// # Load Configuration (`load_config`)
///
/// Reads the TOML layer (explicit path or `.oraco.toml` in the working
/// directory), applies environment overrides, normalizes blank values and
/// validates the result.
///
/// ## Errors
///
/// Returns an error if an explicit `path` does not exist, if a config file
/// cannot be read or parsed, or if validation fails.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let mut config = match path {
        Some(explicit) => {
            let expanded = PathBuf::from(shellexpand::tilde(&explicit.to_string_lossy()).into_owned());
            if !expanded.is_file() {
                return Err(anyhow!(SiteError::Config(format!(
                    "Configuration file '{}' does not exist.",
                    expanded.display()
                ))));
            }
            load_config_from_path(&expanded)?
        }
        None => {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            let candidate = current_dir.join(PROJECT_CONFIG_FILENAME);
            if candidate.is_file() {
                load_config_from_path(&candidate)?
            } else {
                debug!("No {} found in {}", PROJECT_CONFIG_FILENAME, current_dir.display());
                SiteConfig::default()
            }
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    normalize(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!(
        "Final configuration: server={:?} chat_model={} chat_online={} email_configured={}",
        config.server,
        config.chat.model,
        config.chat.api_key.is_some(),
        config.email.service_id.is_some()
            && config.email.template_id.is_some()
            && config.email.public_key.is_some()
    );
    Ok(config)
}

fn load_config_from_path(path: &Path) -> Result<SiteConfig> {
    info!("Loading configuration from: {}", path.display());
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: SiteConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Applies environment-variable overrides. `lookup` is `std::env::var` in
/// production and a map lookup in tests.
fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let present = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = present("GEMINI_API_KEY").or_else(|| present("API_KEY")) {
        config.chat.api_key = Some(key);
    }
    if let Some(model) = present("GEMINI_MODEL") {
        config.chat.model = model;
    }
    if let Some(id) = present("EMAILJS_SERVICE_ID") {
        config.email.service_id = Some(id);
    }
    if let Some(id) = present("EMAILJS_TEMPLATE_ID") {
        config.email.template_id = Some(id);
    }
    if let Some(key) = present("EMAILJS_PUBLIC_KEY") {
        config.email.public_key = Some(key);
    }
}

/// Blank optional values become `None`; surrounding whitespace is dropped.
fn normalize(config: &mut SiteConfig) {
    fn clean(value: &mut Option<String>) {
        *value = value
            .take()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
    }
    clean(&mut config.chat.api_key);
    clean(&mut config.email.service_id);
    clean(&mut config.email.template_id);
    clean(&mut config.email.public_key);
    config.chat.model = config.chat.model.trim().to_string();
}

fn validate_config(config: &SiteConfig) -> Result<()> {
    if config.chat.model.is_empty() {
        return Err(anyhow!(SiteError::Config(
            "Chat model name cannot be empty.".to_string()
        )));
    }
    for (name, url) in [
        ("chat.base_url", &config.chat.base_url),
        ("email.base_url", &config.email.base_url),
    ] {
        reqwest::Url::parse(url).map_err(|e| {
            anyhow!(SiteError::Config(format!(
                "Invalid {} '{}': {}",
                name, url, e
            )))
        })?;
    }
    if config.server.index_file.trim().is_empty() {
        return Err(anyhow!(SiteError::Config(
            "Index file name cannot be empty.".to_string()
        )));
    }
    Ok(())
}
