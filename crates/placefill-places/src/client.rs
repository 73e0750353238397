//! HTTP client for the Google Maps Places web service.
//!
//! Wraps `reqwest` with Places-specific credential handling, URL building and
//! typed response deserialization. Both endpoints check the `"status"` field
//! in the JSON envelope and surface API-level failures as
//! [`PlacesError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{PlaceCandidate, PlaceDetail, PlaceDetailsResponse, TextSearchResponse};

/// Detail fields requested for every place.
pub const DETAIL_FIELDS: [&str; 7] = [
    "formatted_address",
    "formatted_phone_number",
    "rating",
    "price_level",
    "website",
    "types",
    "address_components",
];

/// Client for the Places `textsearch` and `details` endpoints.
///
/// The base URL is always supplied by the caller, either the production
/// endpoint from configuration or a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so that joining "textsearch/json" appends
        // to the path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a free-text place search and returns the ranked candidates.
    ///
    /// A `ZERO_RESULTS` status yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns any other non-`OK` status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(
        &self,
        query: &str,
        language: &str,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = self.build_url("textsearch/json", &[("query", query), ("language", language)])?;
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let envelope: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        Ok(envelope.results)
    }

    /// Fetches the [`DETAIL_FIELDS`] of one place by its identifier.
    ///
    /// A `ZERO_RESULTS` status yields an empty [`PlaceDetail`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns any other non-`OK`
    ///   status, including `NOT_FOUND`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(
        &self,
        place_id: &str,
        language: &str,
    ) -> Result<PlaceDetail, PlacesError> {
        let fields = DETAIL_FIELDS.join(",");
        let url = self.build_url(
            "details/json",
            &[
                ("place_id", place_id),
                ("fields", &fields),
                ("language", language),
            ],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let envelope: PlaceDetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(envelope.result)
    }

    /// Builds the full request URL for `endpoint` with percent-encoded query
    /// parameters, followed by the API key.
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        tracing::debug!(endpoint = url.path(), "places request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error unless it is
    /// `OK` or `ZERO_RESULTS`.
    ///
    /// A body without a `status` field passes here and fails typed
    /// deserialization instead.
    fn check_api_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let Some(status) = body.get("status").and_then(serde_json::Value::as_str) else {
            return Ok(());
        };
        if status == "OK" || status == "ZERO_RESULTS" {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no error message")
            .to_string();
        Err(PlacesError::ApiError {
            status: status.to_string(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
