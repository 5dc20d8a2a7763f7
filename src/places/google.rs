//! Google Maps Places API client
//!
//! Talks to the Places web service (`place/autocomplete` and
//! `place/details`). Both endpoints report failures in a `status` field of a
//! 200 response, so HTTP status and body status are checked separately.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

use super::provider::{PlacesError, PlacesProvider};
use super::types::{LatLng, PlaceDetail, Suggestion};
use crate::config::PlacesConfig;

const DETAIL_FIELDS: &str = "place_id,name,formatted_address,geometry";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Google Maps Places client
pub struct GoogleMapsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    language: Option<String>,
    region: Option<String>,
    session_seed: i64,
    /// Bumped after each details call, which ends an autocomplete session
    session: AtomicU64,
}

impl fmt::Debug for GoogleMapsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleMapsClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

impl GoogleMapsClient {
    /// Load the client
    ///
    /// Fails with `NotConfigured` when no API key was found. Nothing is sent
    /// over the network until the first query.
    pub async fn load(config: PlacesConfig, api_key: Option<String>) -> Result<Self, PlacesError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                PlacesError::NotConfigured(format!(
                    "Missing or empty API key in ${}",
                    config.api_key_env
                ))
            })?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| PlacesError::Network(e.to_string()))?;

        let session_seed = chrono::Utc::now().timestamp_micros();
        log::debug!("Places client loaded for {}", config.base_url);

        Ok(Self {
            http,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.filter(|l| !l.is_empty()),
            region: config.region.filter(|r| !r.is_empty()),
            session_seed,
            session: AtomicU64::new(0),
        })
    }

    fn session_token(&self) -> String {
        format!(
            "{:x}-{:x}",
            self.session_seed,
            self.session.load(Ordering::Relaxed)
        )
    }

    fn end_session(&self) {
        self.session.fetch_add(1, Ordering::Relaxed);
    }

    fn autocomplete_params(&self, input: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("input", input.to_string()),
            ("key", self.api_key.clone()),
            ("sessiontoken", self.session_token()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        if let Some(region) = &self.region {
            params.push(("components", format!("country:{}", region)));
        }
        params
    }

    fn details_params(&self, place_id: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("place_id", place_id.to_string()),
            ("key", self.api_key.clone()),
            ("fields", DETAIL_FIELDS.to_string()),
            ("sessiontoken", self.session_token()),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.clone()));
        }
        params
    }

    async fn get(&self, path: &str, params: &[(&'static str, String)]) -> Result<String, PlacesError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(network_error)?;

        if !status.is_success() {
            return Err(PlacesError::Http {
                code: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

/// The request URL carries the API key, so it is stripped from the message
fn network_error(e: reqwest::Error) -> PlacesError {
    PlacesError::Network(e.without_url().to_string())
}

impl PlacesProvider for GoogleMapsClient {
    async fn predictions(&self, input: &str) -> Result<Vec<Suggestion>, PlacesError> {
        let params = self.autocomplete_params(input);
        let body = self.get("place/autocomplete/json", &params).await?;
        parse_autocomplete(&body)
    }

    async fn details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let params = self.details_params(place_id);
        self.end_session();
        let body = self.get("place/details/json", &params).await?;
        parse_details(&body, place_id)
    }
}

#[derive(Debug, Deserialize)]
struct AutocompleteBody {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
    #[serde(default)]
    structured_formatting: Option<StructuredFormatting>,
}

#[derive(Debug, Deserialize)]
struct StructuredFormatting {
    main_text: String,
    #[serde(default)]
    secondary_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsBody {
    status: String,
    #[serde(default)]
    result: Option<DetailsResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

/// Map the body `status` field to an error unless it is OK or ZERO_RESULTS
fn check_status(status: &str, error_message: Option<String>) -> Result<(), PlacesError> {
    match status {
        STATUS_OK | STATUS_ZERO_RESULTS => Ok(()),
        other => Err(PlacesError::Status {
            status: other.to_string(),
            message: error_message.unwrap_or_default(),
        }),
    }
}

/// Parse an autocomplete response body into suggestions, keeping provider order
pub(crate) fn parse_autocomplete(body: &str) -> Result<Vec<Suggestion>, PlacesError> {
    let parsed: AutocompleteBody =
        serde_json::from_str(body).map_err(|e| PlacesError::Parse(e.to_string()))?;

    check_status(&parsed.status, parsed.error_message)?;

    let suggestions = parsed
        .predictions
        .into_iter()
        .map(|p| {
            let (main_text, secondary_text) = match p.structured_formatting {
                Some(f) => (f.main_text, f.secondary_text.unwrap_or_default()),
                None => (p.description.clone(), String::new()),
            };
            Suggestion {
                place_id: p.place_id,
                main_text,
                secondary_text,
                description: p.description,
            }
        })
        .collect();

    Ok(suggestions)
}

/// Parse a details response body
///
/// ZERO_RESULTS has no `result`, which is reported as a status error.
pub(crate) fn parse_details(body: &str, requested_id: &str) -> Result<PlaceDetail, PlacesError> {
    let parsed: DetailsBody =
        serde_json::from_str(body).map_err(|e| PlacesError::Parse(e.to_string()))?;

    check_status(&parsed.status, parsed.error_message)?;

    let result = parsed.result.ok_or_else(|| PlacesError::Status {
        status: parsed.status.clone(),
        message: "response has no result".to_string(),
    })?;

    Ok(PlaceDetail {
        place_id: result
            .place_id
            .unwrap_or_else(|| requested_id.to_string()),
        name: result.name.unwrap_or_default(),
        formatted_address: result.formatted_address.unwrap_or_default(),
        location: result.geometry.map(|g| g.location),
    })
}

#[cfg(test)]
#[path = "google_tests.rs"]
mod google_tests;
