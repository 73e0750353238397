//! Normalization of Places detail records into [`EnrichedPlace`] cell values.

use placefill_core::EnrichedPlace;

use crate::types::{AddressComponent, PlaceDetail};

const MAPS_PLACE_URL: &str = "https://www.google.com/maps/place/?q=place_id:";

/// Renders a price level as repeated `$` signs; level 0 and absent both
/// render empty.
#[must_use]
pub fn price_tier(price_level: Option<u8>) -> String {
    price_level.map_or_else(String::new, |n| "$".repeat(usize::from(n)))
}

/// First category tag, or empty when the place has none.
#[must_use]
pub fn primary_category(types: &[String]) -> String {
    types.first().cloned().unwrap_or_default()
}

/// Picks the finest-grained area name from the address components.
///
/// The first `neighborhood` component wins outright. Otherwise the last
/// `locality` seen before the end of the list is used.
#[must_use]
pub fn pick_neighborhood(components: &[AddressComponent]) -> String {
    let mut locality: Option<&str> = None;
    for component in components {
        if component.has_type("neighborhood") {
            return component.long_name.clone();
        }
        if component.has_type("locality") {
            locality = Some(component.long_name.as_str());
        }
    }
    locality.map(str::to_string).unwrap_or_default()
}

/// Canonical Google Maps link for a place identifier.
#[must_use]
pub fn maps_link(place_id: &str) -> String {
    format!("{MAPS_PLACE_URL}{place_id}")
}

/// Converts a [`PlaceDetail`] into the cell values written for one row.
#[must_use]
pub fn normalize_place(place_id: &str, detail: &PlaceDetail) -> EnrichedPlace {
    EnrichedPlace {
        address: detail.formatted_address.clone().unwrap_or_default(),
        phone: detail.formatted_phone_number.clone().unwrap_or_default(),
        rating: detail
            .rating
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default(),
        price: price_tier(detail.price_level),
        website: detail.website.clone().unwrap_or_default(),
        category: primary_category(&detail.types),
        neighborhood: pick_neighborhood(&detail.address_components),
        maps_link: maps_link(place_id),
    }
}
