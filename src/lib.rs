pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod keystream;
pub mod wordlist;

pub use config::Settings;
pub use error::{PwgenError, Result};
pub use format::{Format, Token, title_case};
pub use generator::{Generator, MAX_ATTEMPTS, Passwords};
pub use keystream::Keystream;
pub use wordlist::Wordlist;
