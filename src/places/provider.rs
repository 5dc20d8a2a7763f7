//! Places provider abstraction
//!
//! Defines the PlacesProvider trait and PlacesError types.

use std::future::Future;

use thiserror::Error;

use super::types::{PlaceDetail, Suggestion};

/// Errors that can occur during places operations
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Provider is not configured (missing API key)
    #[error("Places not configured: {0}")]
    NotConfigured(String),

    /// Network error during API request
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("HTTP error ({code}): {message}")]
    Http { code: u16, message: String },

    /// The service answered with a non-OK status field
    #[error("Places API status {status}: {message}")]
    Status { status: String, message: String },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    /// Request was superseded or the worker shut down
    #[error("Request cancelled")]
    Cancelled,
}

/// Capability interface over a hosted places service
///
/// Implementations are created by a load future handed to
/// [`spawn_worker`](super::spawn_worker) and shared with every task the
/// worker spawns, hence the `Send + Sync + 'static` bound.
pub trait PlacesProvider: Send + Sync + 'static {
    /// Predictions for a partial text query, in provider order
    ///
    /// An empty list means the service found nothing.
    fn predictions(
        &self,
        input: &str,
    ) -> impl Future<Output = Result<Vec<Suggestion>, PlacesError>> + Send;

    /// Details for a place previously returned by `predictions`
    fn details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<PlaceDetail, PlacesError>> + Send;
}
