//! HTTP error mapping for the API surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use skillmap_graph::GraphError;

/// Errors surfaced to HTTP clients.
///
/// Absence is only an error on routes whose contract says so (the skill
/// detail route answers 404); other routes fold absence into empty results
/// before ever reaching this type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Skill not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("Graph manager not initialized")]
    NotInitialized,

    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: GraphError,
    },
}

impl ApiError {
    /// Wrap a store fault with the route's message context.
    pub fn store(context: &str, source: GraphError) -> Self {
        Self::Store {
            context: context.to_string(),
            source,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotInitialized | ApiError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
