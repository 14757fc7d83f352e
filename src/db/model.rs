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

//! Database row mapping for domain models.
//!
//! Converts raw SQLite result rows into the catalog items returned by a
//! search.

use rusqlite::Row;

use crate::model::CatalogItem;

impl CatalogItem {
    /// Maps an SQLite row to a [`CatalogItem`] instance.
    ///
    /// This is a helper function designed to be used with
    /// [`rusqlite::Statement::query_map`]. The row must hold the track id,
    /// track title, album title, album art and duration, in that order.
    ///
    /// The artist list is left empty; artists live in their own table and
    /// are attached by the caller.
    ///
    /// # Errors
    ///
    /// Returns a [`rusqlite::Error`] if:
    /// * The row does not contain enough columns.
    /// * The data in a column cannot be converted to the required Rust type.
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            artists: vec![],
            album_name: row.get(2)?,
            album_art: row.get(3)?,
            duration: row.get(4)?,
        })
    }
}
