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
use crate::wordlist::WordList;
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Source dictionaries are usually published in the Windows Cyrillic code page.
pub const DEFAULT_ENCODING: &str = "windows-1251";

pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| FrazaError::UnknownEncoding(label.to_string()))
}

/// Decodes raw bytes with exactly `encoding`; no BOM sniffing.
pub fn decode_source(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        log::warn!(
            "Source contains bytes that are not valid {}; they were replaced",
            encoding.name()
        );
    }
    text.into_owned()
}

/// One word per line: trimmed, NFC-normalized, empty lines skipped.
pub fn collect_words(text: &str) -> WordList {
    WordList::from_words(
        text.lines()
            .map(|line| line.trim().nfc().collect::<String>()),
    )
}

/// Reads `source`, writes the word list to `dest` and returns how many words were written.
pub fn build<S, D>(
    source: S,
    dest: D,
    compress: bool,
    encoding: &'static Encoding,
) -> Result<usize>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let source = source.as_ref();
    let bytes = fs::read(source).map_err(|e| FrazaError::BuilderIo {
        path: source.to_path_buf(),
        source: e,
    })?;

    log::info!(
        "Read {} bytes from {} as {}",
        bytes.len(),
        source.display(),
        encoding.name()
    );

    let words = collect_words(&decode_source(&bytes, encoding));
    words.save(dest, compress)?;

    Ok(words.len())
}
