//! Row-by-row enrichment pass.
//!
//! Each row is looked up independently and strictly in table order. A row
//! that yields no candidate or fails anywhere in its lookup is logged and
//! left out of the update map, so its cells keep their prior values when the
//! map is merged into the table.

mod lookup;
mod pacer;

use std::collections::BTreeMap;
use std::time::Duration;

use placefill_core::{AppConfig, EnrichedPlace};

use crate::table::PlaceTable;

use lookup::{lookup_row, PlaceLookup, RowOutcome};
use pacer::Pacer;

/// Per-run knobs for the enrichment pass.
#[derive(Debug, Clone)]
pub(crate) struct EnrichSettings {
    pub language: String,
    /// Minimum time between the start of one row's lookup and the next.
    pub min_interval: Duration,
}

impl EnrichSettings {
    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self {
            language: config.language.clone(),
            min_interval: Duration::from_millis(config.request_delay_ms),
        }
    }
}

/// Results of an enrichment pass, keyed by row index.
#[derive(Debug, Default)]
pub(crate) struct EnrichmentReport {
    pub updates: BTreeMap<usize, EnrichedPlace>,
    pub skipped: usize,
    pub failed: usize,
}

/// Free-text search query for a row: `"{name} {location}"`, with an empty
/// location when the row has none.
pub(crate) fn build_query(name: &str, location: Option<&str>) -> String {
    format!("{name} {}", location.unwrap_or(""))
}

/// Looks up every row of `table` in order and collects the successful
/// results. Never fails: per-row errors are logged and counted.
pub(crate) async fn enrich_table<L: PlaceLookup>(
    lookup: &L,
    table: &PlaceTable,
    settings: &EnrichSettings,
) -> EnrichmentReport {
    let mut pacer = Pacer::new(settings.min_interval);
    let mut report = EnrichmentReport::default();

    for (row, name, location) in table.place_inputs() {
        pacer.pace().await;
        let query = build_query(name, location);

        match lookup_row(lookup, &query, &settings.language).await {
            RowOutcome::Enriched(place) => {
                report.updates.insert(row, place);
            }
            RowOutcome::NoCandidates => {
                tracing::info!(row, query = %query, "no result for query; row left unchanged");
                report.skipped += 1;
            }
            RowOutcome::LookupFailed(reason) => {
                tracing::warn!(
                    row,
                    query = %query,
                    error = %reason,
                    "place lookup failed; row left unchanged"
                );
                report.failed += 1;
            }
        }
    }

    report
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
