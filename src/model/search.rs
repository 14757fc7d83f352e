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

//! Search request and response types.
//!
//! These are the values exchanged between the search coordinator on the UI
//! thread and the catalog worker.

use crate::{error::CatalogError, model::CatalogItem};

/// Identifies the most recently issued search.
///
/// Every new search, including the empty search issued when the input is
/// cleared, moves to the next generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Generation(u64);

impl Generation {
    /// The generation after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub(crate) fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResponseStatus {
    /// The search completed with a payload.
    Ok,
    /// The search completed but there was nothing to return.
    NoContent,
    /// The catalog call itself failed.
    Failed,
}

impl ResponseStatus {
    /// The equivalent HTTP status code, used when logging.
    pub(crate) fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::NoContent => 204,
            ResponseStatus::Failed => 500,
        }
    }
}

/// What the catalog returns for one search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogResponse {
    pub(crate) payload: Option<Vec<CatalogItem>>,
    pub(crate) status: ResponseStatus,
}

impl CatalogResponse {
    pub(crate) fn with_items(items: Vec<CatalogItem>) -> Self {
        Self {
            payload: Some(items),
            status: ResponseStatus::Ok,
        }
    }

    pub(crate) fn no_content() -> Self {
        Self {
            payload: None,
            status: ResponseStatus::NoContent,
        }
    }
}

/// The last committed search outcome.
///
/// Payload and status live together so they can only ever be replaced as a
/// pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchOutcome {
    pub(crate) payload: Option<Vec<CatalogItem>>,
    pub(crate) status: ResponseStatus,
}

impl From<CatalogResponse> for SearchOutcome {
    fn from(response: CatalogResponse) -> Self {
        Self {
            payload: response.payload,
            status: response.status,
        }
    }
}

impl SearchOutcome {
    pub(crate) fn failed() -> Self {
        Self {
            payload: None,
            status: ResponseStatus::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchRequest {
    pub(crate) generation: Generation,
    pub(crate) term: String,
}

#[derive(Debug)]
pub(crate) struct SearchCompletion {
    pub(crate) generation: Generation,
    pub(crate) result: Result<CatalogResponse, CatalogError>,
}
