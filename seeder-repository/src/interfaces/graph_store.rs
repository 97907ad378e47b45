//! Graph store trait definition.
//!
//! This module defines the abstract interface every loader writes through,
//! so the same upsert and link operations serve all node labels and
//! relationship types.

use async_trait::async_trait;

use crate::errors::GraphStoreError;
use crate::types::{EdgeSpec, EdgeType, NodeId, NodeLabel, NodeSpec};

/// Abstracts the underlying graph database.
///
/// Implementations are passed explicitly to each stage of a load. There is
/// exactly one writer per load and every call is awaited before the next one
/// is issued.
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Check that the store is reachable.
    ///
    /// Called once before any processing begins; a failure aborts the load.
    async fn verify_connectivity(&self) -> Result<(), GraphStoreError>;

    /// Create a node unconditionally.
    ///
    /// Only used when the caller guarantees no node with the same natural key
    /// exists yet.
    async fn create_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError>;

    /// Ensure exactly one node with the natural key of `node` exists.
    ///
    /// Properties are applied only when the node is created. Calling this
    /// repeatedly with the same key never produces a duplicate.
    async fn merge_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError>;

    /// Create a directed relationship between two existing nodes.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the relationship was written
    /// * `Err(GraphStoreError::EndpointNotFound)` - If either endpoint does not resolve
    ///
    /// Relationship creation is not idempotent: calling this twice writes two
    /// relationships.
    async fn create_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError>;

    /// Ensure a relationship of the given type exists between two existing nodes.
    async fn merge_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError>;

    /// Internal identifiers of every node carrying `label`.
    async fn node_ids(&self, label: NodeLabel) -> Result<Vec<NodeId>, GraphStoreError>;

    /// Natural keys of every node carrying `label`.
    async fn node_keys(&self, label: NodeLabel) -> Result<Vec<String>, GraphStoreError>;

    /// Number of nodes carrying `label`, or `None` when the query returned no rows.
    async fn count_nodes(&self, label: NodeLabel) -> Result<Option<u64>, GraphStoreError>;

    /// Number of relationships of `edge_type`, or `None` when the query returned no rows.
    async fn count_edges(&self, edge_type: EdgeType) -> Result<Option<u64>, GraphStoreError>;
}
