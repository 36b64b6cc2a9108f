// This file is part of pwgen.
//
// Copyright (c) 2025  The pwgen developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PwgenError, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Words loaded once per run. Only [`Wordlist::shuffle`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let data = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PwgenError::WordlistNotFound {
                path: path.to_path_buf(),
            },
            _ => PwgenError::wordlist_read(path, e.to_string()),
        })?;

        let wordlist = Self::parse(&data);
        log::debug!(
            "loaded {} words from {}",
            wordlist.len(),
            path.display()
        );
        Ok(wordlist)
    }

    /// One word per line, trailing whitespace stripped. Unlike a plain
    /// line split, blank lines are dropped rather than kept as empty words.
    pub fn parse(data: &str) -> Self {
        let words = data
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        Self { words }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for Wordlist {
    fn from(words: Vec<String>) -> Self {
        Self { words }
    }
}
