//! # Commands
//!
//! Each command takes raw user input, validates it, calls into a store, and
//! describes the outcome as a [`CmdResult`]. Commands never print; rendering
//! is the front end's job.
//!
//! Validation of what the user typed (blank fields, non-numeric ids) lives
//! here rather than in the stores. Those failures come back as
//! [`NotepassError`](crate::error::NotepassError) values for which
//! `is_user_error()` holds.

use crate::config::NotepassConfig;
use crate::model::ServiceKey;

pub mod config;
pub mod notes;
pub mod passwords;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A password revealed by `get-password`, with the name the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedPassword {
    pub service: String,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Formatted note listing, printed after the messages
    pub listing: Option<String>,
    pub revealed: Option<RevealedPassword>,
    pub services: Vec<ServiceKey>,
    pub config: Option<NotepassConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: String) -> Self {
        self.listing = Some(listing);
        self
    }

    pub fn with_revealed(mut self, revealed: RevealedPassword) -> Self {
        self.revealed = Some(revealed);
        self
    }

    pub fn with_services(mut self, services: Vec<ServiceKey>) -> Self {
        self.services = services;
        self
    }

    pub fn with_config(mut self, config: NotepassConfig) -> Self {
        self.config = Some(config);
        self
    }
}
