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

//! SQLite storage for the music catalog.
//!
//! Holds the schema and the queries used by the library catalog. The catalog
//! contents are written by [`scan`] and only read everywhere else.

mod model;
pub(crate) mod scan;

use anyhow::Result;
use rusqlite::{Connection, params};

use crate::{
    error::CatalogError,
    model::{Artist, CatalogItem},
};

const LIKE_ESCAPE: char = '\\';

/// Opens the catalog database in WAL mode and creates the schema.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * SQLite refuses to switch to WAL mode.
/// * The schema cannot be created.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    configure(&conn)?;

    Ok(conn)
}

#[cfg(test)]
pub(crate) fn init_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -64000; -- Use 64MB of RAM for cache
    ",
    )?;

    conn.set_prepared_statement_cache_capacity(100);

    create_schema(conn)?;

    Ok(())
}

fn create_schema(conn: &Connection) -> Result<(), CatalogError> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL COLLATE NOCASE UNIQUE
        );

        CREATE TABLE IF NOT EXISTS albums (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            artist_id INTEGER NOT NULL,
            title TEXT NOT NULL COLLATE NOCASE,
            art TEXT,
            UNIQUE (artist_id, title),
            FOREIGN KEY (artist_id) REFERENCES artists (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_albums_artist_id ON albums (artist_id);

        CREATE TABLE IF NOT EXISTS tracks (
            id TEXT PRIMARY KEY,
            album_id INTEGER NOT NULL,
            track_number INTEGER,
            title TEXT NOT NULL COLLATE NOCASE,
            duration INTEGER NOT NULL,
            filename TEXT NOT NULL UNIQUE,
            FOREIGN KEY (album_id) REFERENCES albums (id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_tracks_album_id ON tracks (album_id);

        CREATE TABLE IF NOT EXISTS track_artists (
            track_id TEXT NOT NULL,
            artist_id INTEGER NOT NULL,
            position INTEGER NOT NULL,
            PRIMARY KEY (track_id, artist_id),
            FOREIGN KEY (track_id) REFERENCES tracks (id) ON DELETE CASCADE,
            FOREIGN KEY (artist_id) REFERENCES artists (id) ON DELETE CASCADE
        );

        COMMIT;",
    )?;

    Ok(())
}

/// Finds tracks whose title, album title or any artist name contains `term`.
///
/// Matching is case-insensitive. Results are ordered by album artist, album
/// and track number, and at most `limit` rows are returned.
pub(crate) fn search_tracks(
    conn: &Connection,
    term: &str,
    limit: u32,
) -> Result<Vec<CatalogItem>, CatalogError> {
    let sql = "
        SELECT tr.id, tr.title, al.title, al.art, tr.duration
        FROM tracks tr
        JOIN albums al ON tr.album_id = al.id
        JOIN artists aa ON al.artist_id = aa.id
        WHERE tr.title LIKE ?1 ESCAPE '\\'
           OR al.title LIKE ?1 ESCAPE '\\'
           OR EXISTS (
               SELECT 1
               FROM track_artists ta
               JOIN artists ar ON ta.artist_id = ar.id
               WHERE ta.track_id = tr.id AND ar.name LIKE ?1 ESCAPE '\\'
           )
        ORDER BY aa.name, al.title, tr.track_number, tr.title
        LIMIT ?2";

    let pattern = format!("%{}%", escape_like(term));

    let mut stmt = conn.prepare_cached(sql)?;
    let mut items = stmt
        .query_map(params![pattern, limit], CatalogItem::from_row)?
        .collect::<Result<Vec<_>, _>>()?;

    for item in items.iter_mut() {
        item.artists = fetch_track_artists(conn, &item.id)?;
    }

    Ok(items)
}

pub(crate) fn fetch_track_artists(
    conn: &Connection,
    track_id: &str,
) -> Result<Vec<Artist>, CatalogError> {
    let mut stmt = conn.prepare_cached(
        "SELECT ar.id, ar.name
         FROM track_artists ta
         JOIN artists ar ON ta.artist_id = ar.id
         WHERE ta.track_id = ?
         ORDER BY ta.position",
    )?;

    let artists = stmt
        .query_map([track_id], |row| {
            Ok(Artist {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(artists)
}

/// Escapes the `LIKE` wildcards so user input is always matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
