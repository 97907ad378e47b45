// Neo4j connection setup
use neo4rs::{ConfigBuilder, Graph};

use crate::errors::GraphStoreError;

/// Endpoint and credentials of the Neo4j instance being seeded.
#[derive(Debug, Clone)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Neo4jConfig {
    pub fn new(uri: impl Into<String>, user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            user: user.into(),
            password: password.into(),
        }
    }
}

/// Build a Graph handle for the configured instance.
///
/// The driver opens connections lazily, so this does not prove the instance
/// is reachable; see `GraphStore::verify_connectivity`.
pub fn connect(config: &Neo4jConfig) -> Result<Graph, GraphStoreError> {
    let neo4j_config = ConfigBuilder::default()
        .uri(config.uri.as_str())
        .user(config.user.as_str())
        .password(config.password.as_str())
        .build()
        .map_err(|e| GraphStoreError::connection(format!("Invalid Neo4j configuration: {}", e)))?;

    Graph::connect(neo4j_config)
        .map_err(|e| GraphStoreError::connection(format!("Failed to connect to Neo4j: {}", e)))
}
