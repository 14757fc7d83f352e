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

//! Display-state resolution.
//!
//! The view never stores what it is showing. It is recomputed from the input
//! text and the last committed outcome every time it is drawn.

use crate::model::{CatalogItem, search::ResponseStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderState<'a> {
    /// Nothing typed and nothing to show.
    Idle,
    /// A search for `term` has not come back yet.
    Loading { term: &'a str },
    /// The catalog had nothing for the last search.
    Empty,
    /// The catalog call for the last search failed.
    Failed,
    Results { items: &'a [CatalogItem] },
}

/// Picks the render state, first match wins:
///
/// 1. a payload is present, even an empty one
/// 2. the status is no-content
/// 3. the status is failed
/// 4. the input is not empty
/// 5. idle
///
/// A present payload wins over an empty input, so the last completed search
/// stays on screen until a new search clears it.
pub(crate) fn resolve<'a>(
    input_text: &'a str,
    payload: Option<&'a [CatalogItem]>,
    status: Option<ResponseStatus>,
) -> RenderState<'a> {
    if let Some(items) = payload {
        return RenderState::Results { items };
    }

    match status {
        Some(ResponseStatus::NoContent) => RenderState::Empty,
        Some(ResponseStatus::Failed) => RenderState::Failed,
        _ if !input_text.is_empty() => RenderState::Loading { term: input_text },
        _ => RenderState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Artist;

    fn items() -> Vec<CatalogItem> {
        vec![CatalogItem {
            id: "1".into(),
            title: "Avril 14th".into(),
            artists: vec![Artist { id: 1, name: "Aphex Twin".into() }],
            album_name: "Drukqs".into(),
            album_art: None,
            duration: 125,
        }]
    }

    #[test]
    fn every_combination_resolves_in_priority_order() {
        let items = items();
        let payloads: [Option<&[CatalogItem]>; 2] = [None, Some(items.as_slice())];
        let statuses = [
            None,
            Some(ResponseStatus::Ok),
            Some(ResponseStatus::NoContent),
            Some(ResponseStatus::Failed),
        ];
        let inputs = ["", "avril"];

        for payload in payloads {
            for status in statuses {
                for input in inputs {
                    let expected = if let Some(items) = payload {
                        RenderState::Results { items }
                    } else if status == Some(ResponseStatus::NoContent) {
                        RenderState::Empty
                    } else if status == Some(ResponseStatus::Failed) {
                        RenderState::Failed
                    } else if !input.is_empty() {
                        RenderState::Loading { term: input }
                    } else {
                        RenderState::Idle
                    };

                    assert_eq!(
                        resolve(input, payload, status),
                        expected,
                        "payload={} status={status:?} input={input:?}",
                        payload.is_some()
                    );
                }
            }
        }
    }

    #[test]
    fn empty_payload_is_results_not_empty() {
        let none: &[CatalogItem] = &[];
        let state = resolve("xyz", Some(none), Some(ResponseStatus::Ok));
        assert_eq!(state, RenderState::Results { items: &[] });

        let state = resolve("xyz", None, Some(ResponseStatus::NoContent));
        assert_eq!(state, RenderState::Empty);
    }

    #[test]
    fn payload_wins_over_cleared_input() {
        let items = items();
        let state = resolve("", Some(items.as_slice()), Some(ResponseStatus::Ok));
        assert!(matches!(state, RenderState::Results { items } if items.len() == 1));
    }

    #[test]
    fn pending_search_shows_the_typed_term() {
        assert_eq!(resolve("avr", None, None), RenderState::Loading { term: "avr" });
        assert_eq!(resolve("", None, None), RenderState::Idle);
    }
}
