//! skillmap-api: HTTP surface over the skill roadmap graph.
//!
//! Thin plumbing around the [`skillmap_graph::GraphClient`]: each route calls
//! one accessor operation and serializes the result. The interesting pieces
//! are the per-endpoint absence policy (404 on the skill detail route, empty
//! results elsewhere) and the degraded mode served when the graph store was
//! unreachable at startup.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
