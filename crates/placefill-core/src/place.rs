//! Table column names and the enriched attribute set written for one place.

pub const NAME_COLUMN: &str = "Name";
pub const LOCATION_COLUMN: &str = "Location";
pub const VISITED_COLUMN: &str = "Visited";
pub const MAPS_LINK_COLUMN: &str = "Google Maps Link";

/// Output columns guaranteed to exist in the written table, in the order they
/// are appended when missing.
///
/// `Visited` is created for the user to fill in by hand; enrichment never
/// writes to it.
pub const ENRICHMENT_COLUMNS: [&str; 9] = [
    VISITED_COLUMN,
    "Address",
    "Phone",
    "Rating",
    "Price",
    "Website",
    "Category",
    "Neighborhood",
    MAPS_LINK_COLUMN,
];

/// Attributes resolved for a single place, already formatted as cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichedPlace {
    pub address: String,
    pub phone: String,
    pub rating: String,
    pub price: String,
    pub website: String,
    pub category: String,
    pub neighborhood: String,
    pub maps_link: String,
}

impl EnrichedPlace {
    /// Pairs every populated column name with its cell value.
    #[must_use]
    pub fn column_values(&self) -> [(&'static str, &str); 8] {
        [
            ("Address", self.address.as_str()),
            ("Phone", self.phone.as_str()),
            ("Rating", self.rating.as_str()),
            ("Price", self.price.as_str()),
            ("Website", self.website.as_str()),
            ("Category", self.category.as_str()),
            ("Neighborhood", self.neighborhood.as_str()),
            (MAPS_LINK_COLUMN, self.maps_link.as_str()),
        ]
    }
}
