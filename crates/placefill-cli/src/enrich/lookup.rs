use placefill_core::EnrichedPlace;
use placefill_places::{normalize_place, PlaceCandidate, PlaceDetail, PlacesClient, PlacesError};

/// Search and detail operations the enrichment pass needs from a place
/// directory.
pub(crate) trait PlaceLookup {
    async fn search(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError>;

    async fn details(&self, place_id: &str, language: &str) -> Result<PlaceDetail, PlacesError>;
}

impl PlaceLookup for PlacesClient {
    async fn search(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        self.text_search(query, language).await
    }

    async fn details(&self, place_id: &str, language: &str) -> Result<PlaceDetail, PlacesError> {
        self.place_details(place_id, language).await
    }
}

/// What happened to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RowOutcome {
    Enriched(EnrichedPlace),
    NoCandidates,
    LookupFailed(String),
}

/// Searches for `query`, fetches details for the first candidate, and maps
/// them. Fields are only mapped once the detail fetch has succeeded.
pub(crate) async fn lookup_row<L: PlaceLookup>(
    lookup: &L,
    query: &str,
    language: &str,
) -> RowOutcome {
    let candidates = match lookup.search(query, language).await {
        Ok(candidates) => candidates,
        Err(e) => return RowOutcome::LookupFailed(e.to_string()),
    };

    let Some(top) = candidates.first() else {
        return RowOutcome::NoCandidates;
    };

    match lookup.details(&top.place_id, language).await {
        Ok(detail) => RowOutcome::Enriched(normalize_place(&top.place_id, &detail)),
        Err(e) => RowOutcome::LookupFailed(e.to_string()),
    }
}
