//! Places web-service response types.
//!
//! Both endpoints wrap their payload in a `{"status": "OK", ...}` envelope,
//! optionally with an `error_message`. Every attribute of a place is optional
//! on the wire, so detail fields are modelled as `Option` or defaulted
//! collections rather than looked up by key.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// textsearch
// ---------------------------------------------------------------------------

/// Envelope for the `textsearch/json` response.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceCandidate>,
}

/// One ranked text-search hit.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Envelope for the `details/json` response.
///
/// A missing `result` object is read as an empty [`PlaceDetail`].
#[derive(Debug, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: PlaceDetail,
}

/// Attributes of one place as returned by `details/json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    /// Kept as the raw JSON number so it is written back exactly as received
    /// (`4.0` stays `4.0`).
    #[serde(default)]
    pub rating: Option<serde_json::Number>,
    /// 0 (free) through 4 (very expensive).
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// One piece of a structured address, e.g. a street, neighborhood or city.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    #[must_use]
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }
}
