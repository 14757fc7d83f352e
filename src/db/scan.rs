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

//! Media library scanning.
//!
//! Walks the configured media directories, reads the tags of every audio file
//! found, and rebuilds the catalog tables in a single transaction.

use std::path::Path;

use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::ItemKey;
use rusqlite::{Connection, params};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use xxhash_rust::xxh3::xxh3_64;

use crate::error::CatalogError;

const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "ogg", "m4a"];

const COVER_FILES: [&str; 3] = ["cover.jpg", "folder.jpg", "cover.png"];

const UNKNOWN_ARTIST: &str = "Unknown Artist";
const UNKNOWN_ALBUM: &str = "Unknown Album";

/// The tag data of one audio file, ready to be written to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackRecord {
    pub(crate) filename: String,
    pub(crate) title: String,
    pub(crate) artists: Vec<String>,
    pub(crate) album_artist: String,
    pub(crate) album_title: String,
    pub(crate) album_art: Option<String>,
    pub(crate) track_number: Option<u32>,
    pub(crate) duration: i64,
}

/// Replaces the catalog contents with the tracks found under `media_dirs`.
///
/// Returns the number of tracks in the catalog afterwards.
pub(crate) fn process_media_dirs(
    conn: &mut Connection,
    media_dirs: &[String],
) -> Result<u64, CatalogError> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM track_artists", [])?;
    tx.execute("DELETE FROM tracks", [])?;
    tx.execute("DELETE FROM albums", [])?;
    tx.execute("DELETE FROM artists", [])?;

    for dir in media_dirs {
        info!(dir = %dir, "scanning media directory");

        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_audio_file(entry.path()) {
                continue;
            }

            match read_track(entry.path()) {
                Ok(Some(record)) => insert_track(&tx, &record)?,
                Ok(None) => {}
                Err(e) => warn!(error = %e, "skipping file"),
            }
        }
    }

    tx.commit()?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM tracks", [], |row| row.get(0))?;

    Ok(u64::try_from(count).unwrap_or_default())
}

/// Reads the tags of a single file.
///
/// Files that cannot be probed or carry no tags are skipped with a warning
/// and yield `None`.
fn read_track(path: &Path) -> Result<Option<TrackRecord>, CatalogError> {
    let filename = path
        .to_str()
        .ok_or_else(|| CatalogError::InvalidPath(path.to_path_buf()))?
        .to_string();

    let tagged_file = match Probe::open(path).and_then(|p| p.read()) {
        Ok(file) => file,
        Err(e) => {
            warn!(file = %filename, error = %e, "skipping unreadable file");
            return Ok(None);
        }
    };

    let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.first_tag()) else {
        debug!(file = %filename, "skipping file without tags");
        return Ok(None);
    };

    let mut artists = split_artists(&tag.artist().unwrap_or_default());
    if artists.is_empty() {
        artists.push(UNKNOWN_ARTIST.to_string());
    }

    let album_artist = tag
        .get(ItemKey::AlbumArtist)
        .and_then(|item| item.value().text())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| artists[0].clone());

    let title = tag
        .title()
        .map(|t| t.to_string())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| filename.clone())
        });

    let album_title = tag
        .album()
        .map(|a| a.to_string())
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ALBUM.to_string());

    let duration = i64::try_from(tagged_file.properties().duration().as_secs()).unwrap_or(-1);

    Ok(Some(TrackRecord {
        album_art: path.parent().and_then(find_cover),
        filename,
        title,
        artists,
        album_artist,
        album_title,
        track_number: tag.track(),
        duration,
    }))
}

/// Writes one track, creating its artists and album as needed.
pub(crate) fn insert_track(conn: &Connection, record: &TrackRecord) -> Result<(), CatalogError> {
    let album_artist_id = upsert_artist(conn, &record.album_artist)?;

    conn.prepare_cached("INSERT OR IGNORE INTO albums (artist_id, title, art) VALUES (?, ?, ?)")?
        .execute(params![album_artist_id, record.album_title, record.album_art])?;
    let album_id: i64 = conn
        .prepare_cached("SELECT id FROM albums WHERE artist_id = ? AND title = ?")?
        .query_row(params![album_artist_id, record.album_title], |r| r.get(0))?;

    let track_id = track_id(&record.filename);

    conn.prepare_cached(
        "INSERT OR IGNORE INTO tracks (id, album_id, track_number, title, duration, filename)
         VALUES (?, ?, ?, ?, ?, ?)",
    )?
    .execute(params![
        track_id,
        album_id,
        record.track_number,
        record.title,
        record.duration,
        record.filename
    ])?;

    for (position, name) in record.artists.iter().enumerate() {
        let artist_id = upsert_artist(conn, name)?;
        conn.prepare_cached(
            "INSERT OR IGNORE INTO track_artists (track_id, artist_id, position) VALUES (?, ?, ?)",
        )?
        .execute(params![track_id, artist_id, position as i64])?;
    }

    Ok(())
}

fn upsert_artist(conn: &Connection, name: &str) -> Result<i64, CatalogError> {
    conn.prepare_cached("INSERT OR IGNORE INTO artists (name) VALUES (?)")?
        .execute([name])?;

    let id = conn
        .prepare_cached("SELECT id FROM artists WHERE name = ?")?
        .query_row([name], |r| r.get(0))?;

    Ok(id)
}

/// Stable identifier for a track, derived from its path.
pub(crate) fn track_id(filename: &str) -> String {
    format!("{:016x}", xxh3_64(filename.as_bytes()))
}

/// Splits a tag's artist field into individual names.
///
/// Handles the common "A; B", "A / B" and "A feat. B" conventions and drops
/// duplicates while keeping the original order.
pub(crate) fn split_artists(field: &str) -> Vec<String> {
    let normalised = field.replace(" feat. ", ";").replace(" ft. ", ";");

    let mut artists: Vec<String> = Vec::new();
    for name in normalised.split([';', '/']).map(str::trim) {
        if name.is_empty() || artists.iter().any(|a| a.eq_ignore_ascii_case(name)) {
            continue;
        }
        artists.push(name.to_string());
    }

    artists
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn find_cover(dir: &Path) -> Option<String> {
    COVER_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
        .and_then(|cover| cover.to_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_memory_db, search_tracks};

    #[test]
    fn splits_common_artist_separators() {
        assert_eq!(split_artists("Massive Attack"), ["Massive Attack"]);
        assert_eq!(split_artists("Daft Punk; Pharrell"), ["Daft Punk", "Pharrell"]);
        assert_eq!(split_artists("A / B/C"), ["A", "B", "C"]);
        assert_eq!(split_artists("Calvin Harris feat. Rihanna"), ["Calvin Harris", "Rihanna"]);
        assert_eq!(split_artists("Moby ft. Gwen Stefani"), ["Moby", "Gwen Stefani"]);
        assert_eq!(split_artists("Air; air"), ["Air"]);
        assert!(split_artists("  ").is_empty());
    }

    #[test]
    fn recognises_audio_extensions_case_insensitively() {
        assert!(is_audio_file(Path::new("/m/a/track.mp3")));
        assert!(is_audio_file(Path::new("/m/a/track.FLAC")));
        assert!(!is_audio_file(Path::new("/m/a/cover.jpg")));
        assert!(!is_audio_file(Path::new("/m/a/README")));
    }

    #[test]
    fn track_ids_are_stable_and_distinct() {
        assert_eq!(track_id("/m/a/1.mp3"), track_id("/m/a/1.mp3"));
        assert_ne!(track_id("/m/a/1.mp3"), track_id("/m/a/2.mp3"));
        assert_eq!(track_id("/m/a/1.mp3").len(), 16);
    }

    #[test]
    fn inserting_a_track_links_every_artist() {
        let conn = init_memory_db().unwrap();
        let record = TrackRecord {
            filename: "/m/x/1.flac".into(),
            title: "One More Time".into(),
            artists: vec!["Daft Punk".into(), "Romanthony".into()],
            album_artist: "Daft Punk".into(),
            album_title: "Discovery".into(),
            album_art: Some("/m/x/cover.jpg".into()),
            track_number: Some(1),
            duration: 320,
        };

        insert_track(&conn, &record).unwrap();
        // Re-inserting the same file must not duplicate anything
        insert_track(&conn, &record).unwrap();

        let items = search_tracks(&conn, "romanthony", 20).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, track_id("/m/x/1.flac"));
        assert_eq!(items[0].artist_names(), "Daft Punk, Romanthony");
        assert_eq!(items[0].album_art.as_deref(), Some("/m/x/cover.jpg"));
        assert_eq!(items[0].duration, 320);
    }

    #[test]
    fn scanning_an_empty_directory_clears_the_catalog() {
        let mut conn = init_memory_db().unwrap();
        let record = TrackRecord {
            filename: "/m/y/1.mp3".into(),
            title: "Stale".into(),
            artists: vec!["Nobody".into()],
            album_artist: "Nobody".into(),
            album_title: "Gone".into(),
            album_art: None,
            track_number: None,
            duration: 10,
        };
        insert_track(&conn, &record).unwrap();

        let dir = std::env::temp_dir().join(format!("tunefind-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let count = process_media_dirs(&mut conn, &[dir.to_string_lossy().into_owned()]).unwrap();

        assert_eq!(count, 0);
        assert!(search_tracks(&conn, "stale", 20).unwrap().is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }
}
