// Loads users from the full and the minimal user files
use anyhow::{Context, Result};
use seeder::config::{self, MINIMAL_USERS_FILE, USERS_FILE};
use seeder::models::{MinimalUserRecord, UserRecord};
use seeder::{loaders, reader, setup};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup::init_tracing();

    let neo4j_config = config::get_neo4j_config()?;
    let store = setup::connect_store(&neo4j_config)
        .await
        .context("Connection to Neo4j failed")?;

    let users: Vec<UserRecord> = reader::read_records(config::data_file(USERS_FILE))?;
    let minimal_users: Vec<MinimalUserRecord> =
        reader::read_records(config::data_file(MINIMAL_USERS_FILE))?;

    info!("\n📥 Loading users...");
    let stats = loaders::load_users(&store, &users, &minimal_users).await?;
    info!(
        "✓ Created {} users ({} with profile, {} minimal)",
        stats.full + stats.minimal,
        stats.full,
        stats.minimal
    );

    Ok(())
}
