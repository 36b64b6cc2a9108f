use crate::config::Settings;
use crate::error::{PwgenError, Result};
use crate::format::Format;
use crate::wordlist::Wordlist;
use rand::Rng;
use zeroize::Zeroizing;

/// Consecutive rejected candidates allowed for one requested password.
pub const MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Clone)]
pub struct Generator<'a> {
    format: &'a Format,
    words: &'a [String],
    symbols: &'a [char],
    min_len: i64,
    max_len: i64,
    amount: usize,
}

impl<'a> Generator<'a> {
    pub fn new(
        format: &'a Format,
        words: &'a [String],
        symbols: &'a [char],
        min_len: i64,
        max_len: i64,
        amount: usize,
    ) -> Self {
        Self {
            format,
            words,
            symbols,
            min_len,
            max_len,
            amount,
        }
    }

    pub fn from_settings(
        format: &'a Format,
        wordlist: &'a Wordlist,
        settings: &'a Settings,
    ) -> Self {
        Self::new(
            format,
            wordlist.words(),
            &settings.symbols,
            settings.min_len,
            settings.max_len,
            settings.amount,
        )
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        let len = i64::try_from(candidate.chars().count()).unwrap_or(i64::MAX);
        len >= self.min_len && len <= self.max_len
    }

    pub fn passwords<'r, R: Rng + ?Sized>(&'r self, rng: &'r mut R) -> Passwords<'a, 'r, R> {
        Passwords {
            generator: self,
            rng,
            index: 0,
            rejected: 0,
            done: false,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Zeroizing<String>>> {
        self.passwords(rng).collect()
    }

    fn next_password<R: Rng + ?Sized>(
        &self,
        index: usize,
        rng: &mut R,
        rejected: &mut usize,
    ) -> Result<Zeroizing<String>> {
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                log::warn!("skipped");
            }

            let candidate = self.format.render(self.words, self.symbols, rng)?;

            if self.accepts(&candidate) {
                log::debug!(
                    "password #{} accepted after {} attempt(s)",
                    index + 1,
                    attempt + 1
                );
                return Ok(candidate);
            }

            *rejected += 1;
        }

        Err(PwgenError::GenerationExhausted {
            index,
            attempts: MAX_ATTEMPTS,
        })
    }
}

pub struct Passwords<'a, 'r, R: ?Sized> {
    generator: &'r Generator<'a>,
    rng: &'r mut R,
    index: usize,
    rejected: usize,
    done: bool,
}

impl<R: ?Sized> Passwords<'_, '_, R> {
    /// Candidates discarded so far for failing the length check.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl<R: Rng + ?Sized> Iterator for Passwords<'_, '_, R> {
    type Item = Result<Zeroizing<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.index >= self.generator.amount {
            return None;
        }

        let result = self
            .generator
            .next_password(self.index, &mut *self.rng, &mut self.rejected);

        match result {
            Ok(_) => self.index += 1,
            Err(_) => self.done = true,
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some(self.generator.amount - self.index))
        }
    }
}
