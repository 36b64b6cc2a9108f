use std::path::PathBuf;

use thiserror::Error;

/// Every way a run can fail. All of them are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PwgenError {
    #[error("You need to generate at least one password! (got {amount})")]
    InvalidAmount { amount: i64 },

    #[error("Min length ({min}) is greater than the max length ({max})")]
    InvalidLengthRange { min: i64, max: i64 },

    #[error("Please provide a format. See help for more information")]
    EmptyFormat,

    #[error(
        "Format is incorrect: '{character}' at position {position} is not one of w, n, s, ?. See help for more information"
    )]
    InvalidFormatCharacter { character: char, position: usize },

    #[error("Wordlist file not found: {}", path.display())]
    WordlistNotFound { path: PathBuf },

    #[error("Failed to read wordlist {}: {message}", path.display())]
    WordlistRead { path: PathBuf, message: String },

    #[error("Wordlist contains no words but the format asks for one")]
    EmptyWordlist,

    #[error("Symbol set is empty but the format asks for a symbol")]
    EmptySymbols,

    #[error("Failed to gather entropy: {message}")]
    Entropy { message: String },

    #[error(
        "Could not generate a valid password {attempts} times in a row (password #{})",
        index + 1
    )]
    GenerationExhausted { index: usize, attempts: usize },
}

impl PwgenError {
    pub fn wordlist_read(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::WordlistRead {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn entropy(message: impl Into<String>) -> Self {
        Self::Entropy {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PwgenError>;
