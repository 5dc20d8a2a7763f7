//! Places provider
//!
//! The capability interface the autocomplete widget talks to, the Google Maps
//! Places implementation of it, and the background worker that runs provider
//! calls off the UI thread.

mod google;
mod provider;
mod types;
mod worker;

pub use google::GoogleMapsClient;
pub use provider::{PlacesError, PlacesProvider};
pub use types::{LatLng, PlaceDetail, Suggestion};
pub use worker::{PlacesHandle, PlacesRequest, PlacesResponse, spawn_worker};

#[cfg(test)]
pub(crate) use worker::{TestWorker, test_channel};
