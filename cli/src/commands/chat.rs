//! # Terminal Chat
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! `oraco chat` opens the OracoBot chat window in the terminal. The greeting
//! is printed first, then each line read from stdin is sent as one message
//! and the reply printed. Blank lines are ignored. `exit`, `/exit` or end of
//! input closes the session.
//!
//! Without a chat credential the assistant is offline and every message is
//! answered with the contact-the-team reply; the command still succeeds.
//!
//! ```bash
//! GEMINI_API_KEY=... oraco chat
//! echo "What services do you offer?" | oraco chat
//! ```
//!
use crate::chat::{Assistant, ChatSession, Role};
use crate::core::config::SiteConfig;
use crate::core::error::{Result, SiteError};
use clap::Parser;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const EXIT_COMMANDS: [&str; 2] = ["exit", "/exit"];

/// Arguments for `oraco chat`.
#[derive(Parser, Debug, Default, Clone)]
pub struct ChatArgs {
    /// Model to ask instead of the configured one.
    #[arg(long)]
    pub model: Option<String>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs an interactive session on stdin/stdout.
///
/// ## Errors
///
/// Only terminal I/O failures are errors. Provider problems come back as
/// replies.
pub async fn handle_chat(args: ChatArgs, site: &SiteConfig) -> Result<()> {
    let mut chat_config = site.chat.clone();
    if let Some(model) = args.model.filter(|m| !m.trim().is_empty()) {
        chat_config.model = model.trim().to_string();
    }

    let assistant = Assistant::from_config(&chat_config);
    if assistant.is_online() {
        info!("Chat assistant using model '{}'", chat_config.model);
    } else {
        warn!("No chat credential configured; replies will point to the contact address.");
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout();
    run_session(ChatSession::new(&assistant), stdin, &mut stdout.lock()).await
}

/// Drives `session` from `input` until an exit command or end of input,
/// writing every assistant turn to `output`.
async fn run_session<R, W>(mut session: ChatSession<'_>, input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(greeting) = session.conversation().last() {
        print_turn(output, greeting.role(), greeting.text())?;
    }

    let mut lines = input.lines();
    loop {
        write!(output, "> ").map_err(SiteError::from)?;
        output.flush().map_err(SiteError::from)?;

        let Some(line) = lines.next_line().await.map_err(SiteError::from)? else {
            writeln!(output).map_err(SiteError::from)?;
            break;
        };
        if EXIT_COMMANDS.contains(&line.trim()) {
            break;
        }
        if let Some(reply) = session.send(&line).await {
            print_turn(output, reply.role(), reply.text())?;
        }
    }

    let conversation = session.conversation();
    let sent = conversation
        .turns()
        .iter()
        .filter(|turn| turn.role() == Role::User)
        .count();
    info!(
        "Chat session closed: {} message(s) sent, {} turn(s) logged",
        sent,
        conversation.len()
    );
    Ok(())
}

fn print_turn<W: Write>(output: &mut W, role: Role, text: &str) -> Result<()> {
    let speaker = match role {
        Role::Assistant => "OracoBot",
        Role::User => "You",
    };
    writeln!(output, "{}: {}", speaker, text).map_err(SiteError::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::persona::{GREETING, OFFLINE_REPLY};
    use crate::core::config::ChatConfig;

    async fn transcript(input: &str) -> String {
        let assistant = Assistant::from_config(&ChatConfig::default());
        let mut output = Vec::new();
        run_session(ChatSession::new(&assistant), input.as_bytes(), &mut output)
            .await
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_greeting_then_offline_reply() {
        let out = transcript("Hello\n").await;
        assert!(out.starts_with(&format!("OracoBot: {}\n", GREETING)));
        assert!(out.contains(&format!("OracoBot: {}\n", OFFLINE_REPLY)));
    }

    #[tokio::test]
    async fn test_blank_lines_get_no_reply() {
        let out = transcript("\n   \n").await;
        assert!(!out.contains(OFFLINE_REPLY));
    }

    #[tokio::test]
    async fn test_exit_stops_reading() {
        let out = transcript("exit\nHello\n").await;
        assert!(!out.contains(OFFLINE_REPLY));

        let out = transcript("  /exit  \nHello\n").await;
        assert!(!out.contains(OFFLINE_REPLY));
    }

    #[tokio::test]
    async fn test_each_message_gets_one_reply() {
        let out = transcript("one\ntwo\n").await;
        assert_eq!(out.matches(OFFLINE_REPLY).count(), 2);
    }
}
