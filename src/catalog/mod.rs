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

//! The catalog service.
//!
//! The search core only ever talks to a catalog through [`CatalogService`].
//! [`LibraryCatalog`] is the implementation backed by the local music
//! library database.

use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

use crate::{
    db::{self, scan},
    error::CatalogError,
    model::search::CatalogResponse,
};

/// A catalog that can be searched and rebuilt.
///
/// Implementations run on the task worker thread, never on the UI thread, so
/// they are free to block.
pub(crate) trait CatalogService {
    /// Runs one search. An empty result is reported as
    /// [`ResponseStatus::NoContent`](crate::model::search::ResponseStatus::NoContent).
    fn search_catalog(&mut self, term: &str) -> Result<CatalogResponse, CatalogError>;

    /// Rebuilds the catalog from the given media directories, returning the
    /// number of tracks it now holds.
    fn rescan(&mut self, media_dirs: &[String]) -> Result<u64, CatalogError>;
}

/// The catalog of the user's music library, stored in SQLite.
pub(crate) struct LibraryCatalog {
    conn: Connection,
    result_limit: u32,
}

impl LibraryCatalog {
    /// Opens (creating if needed) the catalog database at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - The SQLite database file.
    /// * `result_limit` - The most items a single search returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened, cannot be switched
    /// to WAL mode, or the schema cannot be created.
    pub(crate) fn open(path: &str, result_limit: u32) -> Result<Self> {
        let conn = db::init_db(path)?;
        Ok(Self::with_connection(conn, result_limit))
    }

    pub(crate) fn with_connection(conn: Connection, result_limit: u32) -> Self {
        Self { conn, result_limit }
    }
}

impl CatalogService for LibraryCatalog {
    fn search_catalog(&mut self, term: &str) -> Result<CatalogResponse, CatalogError> {
        let items = db::search_tracks(&self.conn, term, self.result_limit)?;
        debug!(term, matches = items.len(), "catalog search");

        if items.is_empty() {
            Ok(CatalogResponse::no_content())
        } else {
            Ok(CatalogResponse::with_items(items))
        }
    }

    fn rescan(&mut self, media_dirs: &[String]) -> Result<u64, CatalogError> {
        scan::process_media_dirs(&mut self.conn, media_dirs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{init_memory_db, scan::{TrackRecord, insert_track}},
        model::search::ResponseStatus,
    };

    fn catalog(limit: u32) -> LibraryCatalog {
        let conn = init_memory_db().unwrap();
        for n in 1..=3 {
            let record = TrackRecord {
                filename: format!("/m/boc/{n}.mp3"),
                title: format!("Roygbiv {n}"),
                artists: vec!["Boards of Canada".into()],
                album_artist: "Boards of Canada".into(),
                album_title: "Music Has the Right to Children".into(),
                album_art: None,
                track_number: Some(n),
                duration: 150,
            };
            insert_track(&conn, &record).unwrap();
        }
        LibraryCatalog::with_connection(conn, limit)
    }

    #[test]
    fn no_matches_is_no_content() {
        let response = catalog(20).search_catalog("autechre").unwrap();
        assert_eq!(response.status, ResponseStatus::NoContent);
        assert!(response.payload.is_none());
    }

    #[test]
    fn matches_are_returned_in_track_order_up_to_the_limit() {
        let response = catalog(2).search_catalog("roygbiv").unwrap();
        assert_eq!(response.status, ResponseStatus::Ok);

        let items = response.payload.unwrap();
        let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Roygbiv 1", "Roygbiv 2"]);
    }
}
