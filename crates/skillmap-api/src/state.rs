//! Shared request state: the process-wide graph client.

use skillmap_graph::GraphClient;

use crate::error::ApiError;

/// State handed to every request handler.
///
/// The graph client is constructed once at startup and injected here; when
/// the store was unreachable at boot the slot stays `None` and every data
/// route reports the degraded state instead of the process crashing.
pub struct AppState {
    graph: Option<GraphClient>,
}

impl AppState {
    pub fn new(graph: Option<GraphClient>) -> Self {
        Self { graph }
    }

    /// The graph client, or the degraded-mode error when uninitialized.
    pub fn graph(&self) -> Result<&GraphClient, ApiError> {
        self.graph.as_ref().ok_or(ApiError::NotInitialized)
    }
}
