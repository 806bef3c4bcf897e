// This file is part of Fraza.
//
// Copyright (c) 2025  The Fraza authors
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

use crate::error::{FrazaError, Result};
use crate::layout::transform;
use crate::wordlist::WordList;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::ops::RangeInclusive;
use zeroize::Zeroizing;

/// Always two digits, so the prefix reads the same in the phrase and the password.
pub const PREFIX_RANGE: RangeInclusive<u8> = 10..=99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub words: usize,
    pub letters: usize,
    pub capitalize: bool,
    pub number: bool,
    pub passwords: usize,
}

impl GenerationConfig {
    pub const DEFAULT: Self = Self {
        words: 4,
        letters: 3,
        capitalize: false,
        number: false,
        passwords: 1,
    };

    pub const HARD: Self = Self {
        words: 4,
        letters: 3,
        capitalize: true,
        number: true,
        passwords: 1,
    };

    /// Forces the word and password shape of [`Self::HARD`], keeping the repeat count.
    pub fn hardened(self) -> Self {
        Self {
            passwords: self.passwords,
            ..Self::HARD
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseResult {
    pub phrase: String,
    pub password: Zeroizing<String>,
}

/// Draws `count` distinct entries without replacement, in random order.
pub fn sample<'a, R>(rng: &mut R, wordlist: &'a WordList, count: usize) -> Result<Vec<&'a str>>
where
    R: Rng + ?Sized,
{
    let words = wordlist.words();
    if count > words.len() {
        return Err(FrazaError::SampleSize {
            requested: count,
            max: words.len(),
        });
    }

    Ok(words
        .choose_multiple(rng, count)
        .map(String::as_str)
        .collect())
}

pub fn draw_prefix<R>(rng: &mut R) -> u8
where
    R: Rng + ?Sized,
{
    rng.random_range(PREFIX_RANGE)
}

fn password_part(word: &str, letters: usize, capitalize: bool) -> String {
    let mut chars = word.chars().take(letters);
    let head: String = match chars.next() {
        Some(first) if capitalize => first.to_uppercase().chain(chars).collect(),
        Some(first) => std::iter::once(first).chain(chars).collect(),
        None => String::new(),
    };
    transform(&head)
}

/// Builds the phrase and the password for an already drawn sample.
///
/// Deterministic: all randomness lives in `selected` and `prefix`.
pub fn assemble(
    selected: &[&str],
    config: &GenerationConfig,
    prefix: Option<u8>,
) -> PassphraseResult {
    let prefix = prefix.map(|n| n.to_string());

    let core = selected.join(" ");
    let phrase = match &prefix {
        Some(p) => format!("{} {}", p, core).trim().to_string(),
        None => core,
    };

    let mut password = Zeroizing::new(String::new());
    if let Some(p) = &prefix {
        password.push_str(p);
    }
    for word in selected {
        password.push_str(&password_part(word, config.letters, config.capitalize));
    }

    PassphraseResult { phrase, password }
}

pub fn generate_passphrase<R>(
    rng: &mut R,
    wordlist: &WordList,
    config: &GenerationConfig,
) -> Result<PassphraseResult>
where
    R: Rng + ?Sized,
{
    let selected = sample(rng, wordlist, config.words)?;
    let prefix = config.number.then(|| draw_prefix(rng));
    Ok(assemble(&selected, config, prefix))
}

/// `config.passwords` independent results, each with its own sample and prefix.
pub fn generate_batch<R>(
    rng: &mut R,
    wordlist: &WordList,
    config: &GenerationConfig,
) -> Result<Vec<PassphraseResult>>
where
    R: Rng + ?Sized,
{
    let results = (0..config.passwords)
        .map(|_| generate_passphrase(rng, wordlist, config))
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "Generated {} passphrase(s) of {} words from {} entries",
        results.len(),
        config.words,
        wordlist.len()
    );

    Ok(results)
}

/// Entropy of one result in bits: ordered draw of `words` out of `wordlist_len`,
/// plus the prefix when enabled.
pub fn entropy_bits(wordlist_len: usize, config: &GenerationConfig) -> f64 {
    let draw: f64 = (0..config.words.min(wordlist_len))
        .map(|i| ((wordlist_len - i) as f64).log2())
        .sum();
    let prefix = if config.number {
        (PREFIX_RANGE.len() as f64).log2()
    } else {
        0.0
    };
    draw + prefix
}
