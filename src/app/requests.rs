// SymptomLens - app/requests.rs
//
// Request lifecycle management. Runs catalog and analysis calls on
// background threads, sending results to the UI thread via an mpsc channel.
//
// Architecture:
//   - `RequestManager` lives on the UI thread; each request runs on its own
//     short-lived thread with a clone of the sender.
//   - Every request sends exactly one terminal `ApiProgress` message, even if
//     the worker panics, so the outstanding count can be tracked by counting
//     messages and the Analyze button always comes back.
//   - No retry, no timeout, no cancellation: a request runs to completion even
//     if its result is no longer wanted.

use crate::app::client::ApiClient;
use crate::core::model::{AnalyzeRequest, ApiProgress};
use crate::util::error::Result;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

/// Dispatches API calls to background threads and collects their results.
pub struct RequestManager {
    client: ApiClient,
    progress_tx: mpsc::Sender<ApiProgress>,
    progress_rx: mpsc::Receiver<ApiProgress>,
    outstanding: usize,
}

impl RequestManager {
    pub fn new(client: ApiClient) -> Self {
        let (progress_tx, progress_rx) = mpsc::channel();
        Self {
            client,
            progress_tx,
            progress_rx,
            outstanding: 0,
        }
    }

    /// Build the HTTP client for `base_url` and wrap it in a manager.
    pub fn connect(base_url: &str) -> Result<Self> {
        Ok(Self::new(ApiClient::new(base_url)?))
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch the symptom catalog in the background.
    pub fn start_catalog_load(&mut self) {
        let client = self.client.clone();
        self.spawn(
            move || match client.fetch_catalog() {
                Ok(symptoms) => {
                    tracing::info!(symptoms = symptoms.len(), "Catalog loaded");
                    ApiProgress::CatalogLoaded { symptoms }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Catalog request failed");
                    ApiProgress::CatalogFailed {
                        error: e.to_string(),
                    }
                }
            },
            |error| ApiProgress::CatalogFailed { error },
        );
    }

    /// Submit `request` to the analysis endpoint in the background.
    pub fn start_analysis(&mut self, request: AnalyzeRequest) {
        tracing::info!(
            symptoms = request.symptoms.len(),
            lang = %request.lang,
            "Analysis started"
        );

        let client = self.client.clone();
        self.spawn(
            move || match client.analyze(&request) {
                Ok(result) => {
                    tracing::info!("Analysis completed");
                    ApiProgress::AnalysisCompleted { result }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Analysis request failed");
                    ApiProgress::AnalysisFailed {
                        error: e.to_string(),
                    }
                }
            },
            |error| ApiProgress::AnalysisFailed { error },
        );
    }

    /// Run `work` on a new thread. If it panics, `on_panic` builds the
    /// terminal message instead.
    fn spawn<W, P>(&mut self, work: W, on_panic: P)
    where
        W: FnOnce() -> ApiProgress + Send + 'static,
        P: FnOnce(String) -> ApiProgress + Send + 'static,
    {
        let tx = self.progress_tx.clone();
        self.outstanding += 1;

        std::thread::spawn(move || {
            let msg = run_to_message(work, on_panic);
            // Receiver dropped means the UI closed; nothing left to notify.
            let _ = tx.send(msg);
        });
    }

    /// Returns true while any request has not yet reported back.
    pub fn is_busy(&self) -> bool {
        self.outstanding > 0
    }

    /// Poll for finished requests without blocking. Returns all pending messages.
    pub fn poll_progress(&mut self) -> Vec<ApiProgress> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.progress_rx.try_recv() {
            messages.push(msg);
        }
        self.outstanding = self.outstanding.saturating_sub(messages.len());
        messages
    }
}

/// Run `work`, turning a panic into the message built by `on_panic`.
fn run_to_message<W, P>(work: W, on_panic: P) -> ApiProgress
where
    W: FnOnce() -> ApiProgress,
    P: FnOnce(String) -> ApiProgress,
{
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(msg) => msg,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(detail = %detail, "Request thread panicked");
            on_panic(format!("request worker panicked: {detail}"))
        }
    }
}
