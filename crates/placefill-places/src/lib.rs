pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::{PlacesClient, DETAIL_FIELDS};
pub use error::PlacesError;
pub use normalize::{maps_link, normalize_place, pick_neighborhood, price_tier, primary_category};
pub use types::{AddressComponent, PlaceCandidate, PlaceDetail};
