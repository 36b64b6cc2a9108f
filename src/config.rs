use crate::error::{PwgenError, Result};

pub const DEFAULT_MIN_LEN: i64 = 7;
pub const DEFAULT_MAX_LEN: i64 = 20;
pub const DEFAULT_SYMBOLS: &str = "!@$^*().,;";

/// Validated run parameters. Fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub amount: usize,
    pub min_len: i64,
    pub max_len: i64,
    pub symbols: Vec<char>,
    pub seed: Option<String>,
}

impl Settings {
    /// Checks amount first, then the length range. A negative `min_len` is
    /// clamped to 0 afterwards; a negative `max_len` is kept, so nothing fits.
    pub fn new(
        amount: i64,
        min_len: i64,
        max_len: i64,
        symbols: &str,
        seed: Option<String>,
    ) -> Result<Self> {
        if amount <= 0 {
            return Err(PwgenError::InvalidAmount { amount });
        }

        if min_len > max_len {
            return Err(PwgenError::InvalidLengthRange {
                min: min_len,
                max: max_len,
            });
        }

        let amount = usize::try_from(amount).map_err(|_| PwgenError::InvalidAmount { amount })?;

        Ok(Self {
            amount,
            min_len: min_len.max(0),
            max_len,
            symbols: symbols.chars().collect(),
            seed: seed.filter(|s| !s.is_empty()),
        })
    }

    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }
}
