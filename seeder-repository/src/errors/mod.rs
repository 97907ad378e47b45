//! Error types for the seeder repository.
mod graph_store_error;

pub use graph_store_error::GraphStoreError;
