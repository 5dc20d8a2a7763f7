//! Places Worker Thread
//!
//! Runs provider calls on a background thread so the UI never blocks.
//! The thread owns a current-thread tokio runtime: it first awaits the
//! provider load, then spawns one task per request and sends results back
//! over a std channel that the UI polls.

use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::provider::{PlacesError, PlacesProvider};
use super::types::Suggestion;

/// Request messages sent to the places worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacesRequest {
    /// Query predictions for the given text
    Predictions {
        input: String,
        /// Generation of the text change that issued this query
        request_id: u64,
    },
    /// Fire-and-forget detail lookup for a selected place
    Details { place_id: String },
}

/// Response messages received from the places worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacesResponse {
    /// The provider finished loading and accepts queries
    Ready,
    /// The provider could not be loaded; no queries will ever be answered
    LoadFailed(String),
    Predictions {
        request_id: u64,
        suggestions: Vec<Suggestion>,
    },
    PredictionsFailed {
        request_id: u64,
        error: String,
    },
}

/// UI-side handle to the places worker
///
/// Dropping the handle shuts the worker down, cancelling a load or any
/// request still in flight.
#[derive(Debug)]
pub struct PlacesHandle {
    request_tx: UnboundedSender<PlacesRequest>,
    response_rx: Receiver<PlacesResponse>,
    shutdown: CancellationToken,
}

impl PlacesHandle {
    /// Queue a request; returns false if the worker is gone
    pub fn send(&self, request: PlacesRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    /// Next pending response, without blocking
    pub fn try_recv(&self) -> Option<PlacesResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for PlacesHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the places worker thread
///
/// # Arguments
/// * `load` - Future producing the provider; awaited exactly once
/// * `timeout` - Upper bound for each predictions call
pub fn spawn_worker<P, L>(load: L, timeout: Duration) -> PlacesHandle
where
    P: PlacesProvider,
    L: Future<Output = Result<P, PlacesError>> + Send + 'static,
{
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();
    let worker_shutdown = shutdown.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start places runtime: {}", e);
                let _ = response_tx.send(PlacesResponse::LoadFailed(e.to_string()));
                return;
            }
        };

        runtime.block_on(worker_loop(
            load,
            request_rx,
            response_tx,
            worker_shutdown,
            timeout,
        ));
    });

    PlacesHandle {
        request_tx,
        response_rx,
        shutdown,
    }
}

/// Main worker loop - loads the provider, then serves requests until the
/// channel closes or shutdown is signalled
async fn worker_loop<P, L>(
    load: L,
    mut request_rx: UnboundedReceiver<PlacesRequest>,
    response_tx: Sender<PlacesResponse>,
    shutdown: CancellationToken,
    timeout: Duration,
) where
    P: PlacesProvider,
    L: Future<Output = Result<P, PlacesError>>,
{
    let provider = tokio::select! {
        _ = shutdown.cancelled() => {
            log::debug!("Places load cancelled");
            return;
        }
        result = load => match result {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                log::warn!("Places provider failed to load: {}", e);
                let _ = response_tx.send(PlacesResponse::LoadFailed(e.to_string()));
                return;
            }
        },
    };

    if response_tx.send(PlacesResponse::Ready).is_err() {
        return;
    }
    log::debug!("Places provider ready");

    // Cancellation token of the latest predictions request
    let mut in_flight: Option<CancellationToken> = None;

    loop {
        let request = tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(request) => request,
                None => break,
            },
        };

        match request {
            PlacesRequest::Predictions { input, request_id } => {
                if let Some(previous) = in_flight.take() {
                    previous.cancel();
                }
                let cancel = shutdown.child_token();
                in_flight = Some(cancel.clone());

                tokio::spawn(handle_predictions(
                    Arc::clone(&provider),
                    input,
                    request_id,
                    cancel,
                    timeout,
                    response_tx.clone(),
                ));
            }
            PlacesRequest::Details { place_id } => {
                tokio::spawn(handle_details(
                    Arc::clone(&provider),
                    place_id,
                    shutdown.child_token(),
                ));
            }
        }
    }

    log::debug!("Places worker shutting down");
}

/// Run one predictions call, bounded by `timeout` and racing `cancel`
///
/// Cancelled calls send nothing: a newer request has taken their place.
async fn handle_predictions<P: PlacesProvider>(
    provider: Arc<P>,
    input: String,
    request_id: u64,
    cancel: CancellationToken,
    timeout: Duration,
    response_tx: Sender<PlacesResponse>,
) {
    let outcome = tokio::select! {
        _ = cancel.cancelled() => Err(PlacesError::Cancelled),
        result = tokio::time::timeout(timeout, provider.predictions(&input)) => match result {
            Ok(inner) => inner,
            Err(_) => Err(PlacesError::Timeout(timeout.as_millis() as u64)),
        },
    };

    let response = match outcome {
        Ok(suggestions) => {
            log::debug!(
                "Request {} returned {} suggestions",
                request_id,
                suggestions.len()
            );
            PlacesResponse::Predictions {
                request_id,
                suggestions,
            }
        }
        Err(PlacesError::Cancelled) => {
            log::debug!("Request {} superseded", request_id);
            return;
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request_id, e);
            PlacesResponse::PredictionsFailed {
                request_id,
                error: e.to_string(),
            }
        }
    };

    let _ = response_tx.send(response);
}

/// Fire-and-forget detail lookup; the result is only logged
async fn handle_details<P: PlacesProvider>(
    provider: Arc<P>,
    place_id: String,
    cancel: CancellationToken,
) {
    tokio::select! {
        _ = cancel.cancelled() => {}
        result = provider.details(&place_id) => match result {
            Ok(detail) => log::debug!(
                "Resolved {} to {:?} at {:?}",
                detail.place_id,
                detail.formatted_address,
                detail.location
            ),
            Err(e) => log::debug!("Detail lookup for {} failed: {}", place_id, e),
        },
    }
}

/// Worker-side ends of a handle, for driving the widget from tests
#[cfg(test)]
pub(crate) struct TestWorker {
    pub request_rx: UnboundedReceiver<PlacesRequest>,
    pub response_tx: Sender<PlacesResponse>,
    pub shutdown: CancellationToken,
}

#[cfg(test)]
pub(crate) fn test_channel() -> (PlacesHandle, TestWorker) {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let shutdown = CancellationToken::new();

    let handle = PlacesHandle {
        request_tx,
        response_rx,
        shutdown: shutdown.clone(),
    };
    let worker = TestWorker {
        request_rx,
        response_tx,
        shutdown,
    };
    (handle, worker)
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
