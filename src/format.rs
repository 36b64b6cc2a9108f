use std::fmt;

use crate::error::{PwgenError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::Zeroizing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Word,
    Digit,
    Symbol,
    Optional,
}

impl Token {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Self::Word),
            'n' => Some(Self::Digit),
            's' => Some(Self::Symbol),
            '?' => Some(Self::Optional),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Word => 'w',
            Self::Digit => 'n',
            Self::Symbol => 's',
            Self::Optional => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    PendingOptional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    tokens: Vec<Token>,
}

impl Format {
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(PwgenError::EmptyFormat);
        }

        let tokens = input
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Token::from_char(character).ok_or(PwgenError::InvalidFormatCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn uses_words(&self) -> bool {
        self.tokens.contains(&Token::Word)
    }

    pub fn uses_symbols(&self) -> bool {
        self.tokens.contains(&Token::Symbol)
    }

    pub fn required_tokens(&self) -> usize {
        self.tokens.iter().filter(|t| **t != Token::Optional).count()
    }

    // A token after `?` costs one fair bit first and the pending state is
    // cleared on both outcomes, so a kept `?` re-arms it.
    pub fn render<R: Rng + ?Sized>(
        &self,
        words: &[String],
        symbols: &[char],
        rng: &mut R,
    ) -> Result<Zeroizing<String>> {
        let mut password = Zeroizing::new(String::new());
        let mut state = State::Normal;

        for &token in &self.tokens {
            if state == State::PendingOptional {
                state = State::Normal;
                if rng.gen_bool(0.5) {
                    continue;
                }
            }

            match token {
                Token::Word => {
                    let word = words.choose(rng).ok_or(PwgenError::EmptyWordlist)?;
                    push_title_case(&mut password, word);
                }
                Token::Digit => {
                    let digit = rng.gen_range(0..10u8);
                    password.push(char::from(b'0' + digit));
                }
                Token::Symbol => {
                    let symbol = symbols.choose(rng).ok_or(PwgenError::EmptySymbols)?;
                    password.push(*symbol);
                }
                Token::Optional => state = State::PendingOptional,
            }
        }

        Ok(password)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.as_char())?;
        }
        Ok(())
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    push_title_case(&mut out, word);
    out
}

fn push_title_case(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
