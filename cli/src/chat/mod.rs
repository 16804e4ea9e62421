//! # Chat Assistant
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! The OracoBot chat feature:
//! - `persona`: the fixed system instruction, greeting and fallback replies
//! - `assistant`: the fail-soft text-generation adapter
//! - `conversation`: the append-only turn log
//! - `session`: a conversation bound to an assistant, one message at a time
//!
//! `oraco chat` runs a `ChatSession` in the terminal; the server's
//! `POST /api/chat` endpoint calls the `Assistant` directly, since the browser
//! keeps its own conversation log.
//!
pub mod assistant;
pub mod conversation;
pub mod persona;
pub mod session;

pub use assistant::Assistant;
pub use conversation::Role;
pub use session::ChatSession;
