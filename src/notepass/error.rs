use crate::codec::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotepassError {
    #[error("Invalid ID. Please enter a number.")]
    InvalidNoteId(String),

    #[error("{0}")]
    BlankInput(String),

    #[error("Obfuscation error: {0}")]
    Codec(#[from] CodecError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),
}

impl NotepassError {
    /// Errors caused by what the user typed. A session reports these and keeps going.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            NotepassError::InvalidNoteId(_)
                | NotepassError::BlankInput(_)
                | NotepassError::Codec(_)
                | NotepassError::UnknownConfigKey(_)
                | NotepassError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NotepassError>;
