//! Configuration for the skillmap-api service.
//!
//! Loaded from (in priority order): `SKILLMAP__`-prefixed environment
//! variables over an optional `skillmap.toml` (prefix overridable with
//! `--config`) over built-in defaults.

use serde::Deserialize;

use skillmap_graph::GraphConfig;

/// HTTP listener configuration, `[http]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Listen address (default: "0.0.0.0").
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Listen port (default: 8008).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Optional prefix applied to the data routes, e.g. "/roadmap".
    #[serde(default)]
    pub url_prefix: String,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8008
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            url_prefix: String::new(),
        }
    }
}

/// Full service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub http: HttpConfig,
    pub graph: GraphConfig,
}

/// Load the service configuration.
///
/// Missing files and malformed sections fall back to defaults; the service
/// must come up with zero configuration in development.
pub fn load(file_prefix: &str) -> ApiConfig {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix("SKILLMAP")
                .separator("__")
                .try_parsing(true),
        )
        .build();

    match cfg {
        Ok(c) => {
            let mut http = c.get::<HttpConfig>("http").unwrap_or_default();
            http.url_prefix = normalize_url_prefix(&http.url_prefix);
            ApiConfig {
                http,
                graph: graph_config_from(&c),
            }
        }
        Err(_) => ApiConfig {
            http: HttpConfig::default(),
            graph: GraphConfig::default(),
        },
    }
}

fn graph_config_from(c: &config::Config) -> GraphConfig {
    let defaults = GraphConfig::default();
    GraphConfig {
        uri: c
            .get_string("neo4j.uri")
            .unwrap_or_else(|_| defaults.uri.clone()),
        user: c
            .get_string("neo4j.user")
            .unwrap_or_else(|_| defaults.user.clone()),
        password: c
            .get_string("neo4j.password")
            .unwrap_or_else(|_| defaults.password.clone()),
        query_timeout_secs: c
            .get_int("neo4j.query_timeout_secs")
            .map(|v| v as u64)
            .unwrap_or(defaults.query_timeout_secs),
        max_connections: defaults.max_connections,
        fetch_size: defaults.fetch_size,
    }
}

/// Normalize a configured URL prefix: strip trailing slashes and ensure a
/// leading one; an effectively empty prefix collapses to "".
pub fn normalize_url_prefix(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
