// Loads video games and their genres
use anyhow::{Context, Result};
use seeder::config::{self, GAME_GENRES_FILE};
use seeder::models::GameGenreRecord;
use seeder::{loaders, reader, setup};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup::init_tracing();

    let neo4j_config = config::get_neo4j_config()?;
    let store = setup::connect_store(&neo4j_config)
        .await
        .context("Connection to Neo4j failed")?;

    let records: Vec<GameGenreRecord> = reader::read_records(config::data_file(GAME_GENRES_FILE))?;
    loaders::load_game_genres(&store, &records).await?;

    Ok(())
}
