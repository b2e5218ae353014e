//! Neo4j connection management and shared graph client.

use std::time::Duration;

use neo4rs::{ConfigBuilder, Graph, Query};

/// Errors from graph operations.
///
/// Absent entities are not errors; lookups return `Option`/empty collections
/// for those. Only connectivity, timeout, and store-internal faults land here.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Query timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
    /// Upper bound on any single query, so a store stall cannot hold a
    /// request task indefinitely.
    pub query_timeout_secs: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "skillmap-dev".to_string(),
            max_connections: 16,
            fetch_size: 256,
            query_timeout_secs: 30,
        }
    }
}

/// Thread-safe Neo4j graph client with connection pooling.
///
/// This is the single point of access for all roadmap graph reads. Clone is
/// cheap (inner Arc), and concurrent queries from multiple request tasks are
/// safe without external synchronization.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
    query_timeout: Duration,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self {
            graph,
            query_timeout: Duration::from_secs(config.query_timeout_secs),
        })
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        self.bounded(async {
            let mut stream = self.graph.execute(query).await?;
            let mut rows = Vec::new();
            while let Some(row) = stream.next().await? {
                rows.push(row);
            }
            Ok(rows)
        })
        .await
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        self.bounded(async {
            let mut stream = self.graph.execute(query).await?;
            Ok(stream.next().await?)
        })
        .await
    }

    /// Run a future under the configured per-query timeout.
    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, GraphError>>,
    ) -> Result<T, GraphError> {
        tokio::time::timeout(self.query_timeout, fut)
            .await
            .map_err(|_| GraphError::Timeout {
                seconds: self.query_timeout.as_secs(),
            })?
    }
}
