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

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    catalog::CatalogService,
    events::AppEvent,
    model::search::{SearchCompletion, SearchRequest},
    tasks::TaskContext,
};

/// Rebuilds the catalog from the configured media directories, reporting the
/// start and the final track count.
pub(super) fn scan_catalog<C: CatalogService>(ctx: &mut TaskContext<'_, C>) -> Result<()> {
    ctx.event_tx.send(AppEvent::ScanStarted)?;

    let count = ctx.catalog.rescan(&ctx.config.media_dirs)?;
    info!(tracks = count, "catalog rescanned");

    ctx.event_tx.send(AppEvent::ScanFinished(count))?;

    Ok(())
}

/// Runs one search and always answers with a completion, whether the
/// catalog succeeded or not. Catalog failures travel inside the completion.
pub(super) fn search<C: CatalogService>(
    ctx: &mut TaskContext<'_, C>,
    request: SearchRequest,
) -> Result<()> {
    debug!(generation = request.generation.value(), term = %request.term, "searching catalog");

    let result = ctx.catalog.search_catalog(&request.term);

    ctx.event_tx.send(AppEvent::SearchCompleted(SearchCompletion {
        generation: request.generation,
        result,
    }))?;

    Ok(())
}
