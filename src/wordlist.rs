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
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub const FORMAT_VERSION: u16 = 1;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Serialize, Deserialize)]
struct Container {
    format: u16,
    words: Vec<String>,
}

/// In-memory dictionary. Every entry is non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Trims each entry and drops the empty ones, keeping the original order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
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

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let load_error = |reason: String| FrazaError::DictionaryLoad {
            path: path.to_path_buf(),
            reason,
        };

        let raw = fs::read(path).map_err(|e| load_error(e.to_string()))?;

        let payload = if is_gzip(&raw) {
            let mut decoded = Vec::new();
            GzDecoder::new(raw.as_slice())
                .read_to_end(&mut decoded)
                .map_err(|e| load_error(format!("corrupt gzip stream ({})", e)))?;
            decoded
        } else {
            raw
        };

        let (container, rest): (Container, &[u8]) = postcard::take_from_bytes(&payload)
            .map_err(|e| load_error(format!("not a word list ({})", e)))?;

        if !rest.is_empty() {
            return Err(load_error(format!(
                "not a word list ({} trailing bytes)",
                rest.len()
            )));
        }

        if container.format != FORMAT_VERSION {
            return Err(load_error(format!(
                "unsupported format version {} (expected {})",
                container.format, FORMAT_VERSION
            )));
        }

        if let Some(index) = container.words.iter().position(|w| w.trim().is_empty()) {
            return Err(load_error(format!("entry {} is empty", index + 1)));
        }

        log::debug!(
            "Loaded {} words from {}",
            container.words.len(),
            path.display()
        );

        Ok(Self {
            words: container.words,
        })
    }

    /// Writes the list to `path`, gzip-wrapped when `compress` is set.
    pub fn save<P: AsRef<Path>>(&self, path: P, compress: bool) -> Result<()> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| FrazaError::BuilderIo {
            path: path.to_path_buf(),
            source,
        };

        let container = Container {
            format: FORMAT_VERSION,
            words: self.words.clone(),
        };
        let payload = postcard::to_stdvec(&container)
            .map_err(|e| io_error(std::io::Error::other(e)))?;

        let file = File::create(path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);

        if compress {
            let mut encoder = GzEncoder::new(&mut writer, Compression::best());
            encoder.write_all(&payload).map_err(io_error)?;
            encoder.finish().map_err(io_error)?;
        } else {
            writer.write_all(&payload).map_err(io_error)?;
        }

        writer.flush().map_err(io_error)?;

        log::debug!(
            "Wrote {} words to {} (compressed: {})",
            self.words.len(),
            path.display(),
            compress
        );

        Ok(())
    }
}

pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}
