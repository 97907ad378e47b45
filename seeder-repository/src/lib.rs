//! # Seeder Repository
//!
//! This crate provides the graph store abstraction used by the seeding
//! programs. It includes definitions for errors, the node and edge types,
//! the `GraphStore` interface, and concrete implementations for Neo4j and
//! for an in-memory graph.

pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod neo4j;
pub mod types;

pub use errors::GraphStoreError;
pub use interfaces::GraphStore;
pub use memory::InMemoryGraphStore;
pub use neo4j::{Neo4jConfig, Neo4jGraphStore};
pub use types::{EdgeSpec, EdgeType, Endpoint, NodeId, NodeLabel, NodeSpec, Properties, PropertyValue};
