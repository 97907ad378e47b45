//! In-memory GraphStore
//!
//! Keeps nodes and relationships in plain vectors behind a mutex and mirrors
//! the Cypher semantics of the Neo4j store: `MATCH` on a natural key resolves
//! every node carrying that key, `MERGE` never duplicates, `CREATE` always
//! writes. Useful for tests and for inspecting what a load would write.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use crate::errors::GraphStoreError;
use crate::interfaces::GraphStore;
use crate::types::{EdgeSpec, EdgeType, Endpoint, NodeId, NodeLabel, NodeSpec, Properties};

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub id: NodeId,
    pub labels: Vec<NodeLabel>,
    pub key: String,
    pub properties: Properties,
}

impl MemoryNode {
    fn has_label(&self, label: NodeLabel) -> bool {
        self.labels.contains(&label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEdge {
    pub edge_type: EdgeType,
    pub from: NodeId,
    pub to: NodeId,
    pub properties: Properties,
}

#[derive(Debug, Default)]
struct MemoryGraph {
    next_id: i64,
    nodes: Vec<MemoryNode>,
    edges: Vec<MemoryEdge>,
}

impl MemoryGraph {
    fn insert_node(&mut self, node: &NodeSpec) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(MemoryNode {
            id,
            labels: node.labels().collect(),
            key: node.key.clone(),
            properties: node.properties.clone(),
        });
        id
    }

    fn resolve(&self, endpoint: &Endpoint) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| match endpoint {
                Endpoint::Key { label, key } => node.has_label(*label) && node.key == *key,
                Endpoint::Id { label, id } => node.has_label(*label) && node.id == *id,
            })
            .map(|node| node.id)
            .collect()
    }

    fn resolve_pair(&self, edge: &EdgeSpec) -> Result<Vec<(NodeId, NodeId)>, GraphStoreError> {
        let from = self.resolve(&edge.from);
        let to = self.resolve(&edge.to);
        if from.is_empty() || to.is_empty() {
            return Err(GraphStoreError::endpoint_not_found(
                edge.edge_type,
                &edge.from,
                &edge.to,
            ));
        }

        Ok(from
            .iter()
            .flat_map(|f| to.iter().map(move |t| (*f, *t)))
            .collect())
    }
}

/// GraphStore that keeps everything in process memory.
#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    graph: Mutex<MemoryGraph>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryGraph> {
        // A poisoned lock only means a test panicked mid-write; the data is still usable.
        self.graph.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every node carrying `label`, in creation order.
    pub fn nodes(&self, label: NodeLabel) -> Vec<MemoryNode> {
        self.lock()
            .nodes
            .iter()
            .filter(|node| node.has_label(label))
            .cloned()
            .collect()
    }

    /// Every relationship of `edge_type`, in creation order.
    pub fn edges(&self, edge_type: EdgeType) -> Vec<MemoryEdge> {
        self.lock()
            .edges
            .iter()
            .filter(|edge| edge.edge_type == edge_type)
            .cloned()
            .collect()
    }

    /// Natural keys of both endpoints of every relationship of `edge_type`.
    pub fn edge_keys(&self, edge_type: EdgeType) -> Vec<(String, String)> {
        let graph = self.lock();
        let key_of = |id: NodeId| {
            graph
                .nodes
                .iter()
                .find(|node| node.id == id)
                .map(|node| node.key.clone())
                .unwrap_or_default()
        };

        graph
            .edges
            .iter()
            .filter(|edge| edge.edge_type == edge_type)
            .map(|edge| (key_of(edge.from), key_of(edge.to)))
            .collect()
    }

    /// Total number of writes that reached the store.
    pub fn total_nodes(&self) -> usize {
        self.lock().nodes.len()
    }

    pub fn total_edges(&self) -> usize {
        self.lock().edges.len()
    }
}

#[async_trait]
impl GraphStore for InMemoryGraphStore {
    async fn verify_connectivity(&self) -> Result<(), GraphStoreError> {
        Ok(())
    }

    async fn create_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError> {
        self.lock().insert_node(node);
        Ok(())
    }

    async fn merge_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError> {
        let mut graph = self.lock();
        let position = graph
            .nodes
            .iter()
            .position(|existing| existing.has_label(node.label) && existing.key == node.key);

        match position {
            Some(idx) => {
                let existing = &mut graph.nodes[idx];
                for label in &node.extra_labels {
                    if !existing.has_label(*label) {
                        existing.labels.push(*label);
                    }
                }
            }
            None => {
                graph.insert_node(node);
            }
        }
        Ok(())
    }

    async fn create_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError> {
        let mut graph = self.lock();
        let pairs = graph.resolve_pair(edge)?;
        for (from, to) in pairs {
            graph.edges.push(MemoryEdge {
                edge_type: edge.edge_type,
                from,
                to,
                properties: edge.properties.clone(),
            });
        }
        Ok(())
    }

    async fn merge_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError> {
        let mut graph = self.lock();
        let pairs = graph.resolve_pair(edge)?;
        for (from, to) in pairs {
            let exists = graph
                .edges
                .iter()
                .any(|e| e.edge_type == edge.edge_type && e.from == from && e.to == to);
            if !exists {
                graph.edges.push(MemoryEdge {
                    edge_type: edge.edge_type,
                    from,
                    to,
                    properties: edge.properties.clone(),
                });
            }
        }
        Ok(())
    }

    async fn node_ids(&self, label: NodeLabel) -> Result<Vec<NodeId>, GraphStoreError> {
        Ok(self.nodes(label).into_iter().map(|node| node.id).collect())
    }

    async fn node_keys(&self, label: NodeLabel) -> Result<Vec<String>, GraphStoreError> {
        Ok(self.nodes(label).into_iter().map(|node| node.key).collect())
    }

    async fn count_nodes(&self, label: NodeLabel) -> Result<Option<u64>, GraphStoreError> {
        Ok(Some(self.nodes(label).len() as u64))
    }

    async fn count_edges(&self, edge_type: EdgeType) -> Result<Option<u64>, GraphStoreError> {
        Ok(Some(self.edges(edge_type).len() as u64))
    }
}
