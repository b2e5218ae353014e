//! Skillmap Graph — Neo4j accessor for the skill roadmap graph.
//!
//! This crate is the single point of access to the graph store. It owns the
//! process-wide connection pool and exposes the read operations the HTTP
//! surface is built on: skill lookup, ordered listing, adjacency in both
//! directions, per-skill roadmaps, and bounded shortest-path search. Nothing
//! in this crate mutates the store; seeding happens outside this service.

pub mod client;
pub mod paths;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError};
