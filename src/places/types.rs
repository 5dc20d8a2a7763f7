use serde::Deserialize;

/// A single place candidate returned by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Provider-assigned unique identifier
    pub place_id: String,
    /// Primary label, e.g. "123 Main St"
    pub main_text: String,
    /// Secondary label, e.g. "Springfield, IL, USA"
    pub secondary_text: String,
    /// Full description; this is what a selection writes into the input
    pub description: String,
}

impl Suggestion {
    pub fn new(
        place_id: impl Into<String>,
        main_text: impl Into<String>,
        secondary_text: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            place_id: place_id.into(),
            main_text: main_text.into(),
            secondary_text: secondary_text.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Resolved place details
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetail {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub location: Option<LatLng>,
}
