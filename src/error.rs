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

use std::path::PathBuf;

/// Errors raised by the word-list, sampling and builder layers.
#[derive(Debug, thiserror::Error)]
pub enum FrazaError {
    #[error("cannot load dictionary {}: {reason}", path.display())]
    DictionaryLoad { path: PathBuf, reason: String },
    #[error("cannot pick {requested} words from the dictionary (max {max})")]
    SampleSize { requested: usize, max: usize },
    #[error("cannot access {}", path.display())]
    BuilderIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown text encoding \"{0}\"")]
    UnknownEncoding(String),
}

pub type Result<T> = std::result::Result<T, FrazaError>;
