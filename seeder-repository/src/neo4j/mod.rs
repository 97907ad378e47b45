// Neo4j module - connection setup and the GraphStore implementation
pub mod connection;
pub mod store;

pub use connection::{connect, Neo4jConfig};
pub use store::Neo4jGraphStore;
