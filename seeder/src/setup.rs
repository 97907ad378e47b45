// Startup helpers shared by the seeding binaries
use seeder_repository::{GraphStore, Neo4jConfig, Neo4jGraphStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::errors::SeedError;

/// Initialize tracing, honouring `RUST_LOG` and defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Connect to Neo4j and check the instance is reachable before any write.
pub async fn connect_store(config: &Neo4jConfig) -> Result<Neo4jGraphStore, SeedError> {
    let store = Neo4jGraphStore::connect(config)?;
    store.verify_connectivity().await?;
    info!("✓ Connected to Neo4j");
    Ok(store)
}
