//! Interfaces for the seeder repository.
mod graph_store;

pub use graph_store::GraphStore;
