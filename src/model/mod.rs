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

//! Domain models and core data structures.
//!
//! This module defines the entities that flow between the catalog and the
//! search view: the catalog items returned by a search and the normalised
//! record handed on when the user picks one of them.

pub(crate) mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Artist {
    pub(crate) id: i64,
    pub(crate) name: String,
}

/// A single track as returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogItem {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artists: Vec<Artist>,
    pub(crate) album_name: String,
    pub(crate) album_art: Option<String>,
    pub(crate) duration: i64,
}

impl CatalogItem {
    /// Joins the artist names for display, e.g. "Artist A, Artist B".
    pub(crate) fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The normalised record passed to the selection collaborator when the user
/// picks a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectedSong {
    pub(crate) id: String,
    pub(crate) album_art: Option<String>,
    pub(crate) song_name: String,
    pub(crate) artists: Vec<Artist>,
    pub(crate) album_name: String,
}

impl From<&CatalogItem> for SelectedSong {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            album_art: item.album_art.clone(),
            song_name: item.title.clone(),
            artists: item.artists.clone(),
            album_name: item.album_name.clone(),
        }
    }
}
