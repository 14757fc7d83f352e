// Copyright (C) 2026  Caprica Software Limited
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

//! Catalog error types.
//!
//! Catalog failures cross the worker channel inside a search completion, so
//! they are kept as a typed error rather than an `anyhow::Error`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("catalog database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("media path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),
}
