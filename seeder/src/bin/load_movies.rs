// Loads movies with their category and genres from the movie metadata dump
use anyhow::{Context, Result};
use seeder::config::{self, MOVIES_METADATA_FILE};
use seeder::models::MovieMetadataRecord;
use seeder::{loaders, reader, setup};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup::init_tracing();

    let neo4j_config = config::get_neo4j_config()?;
    let row_limit = config::get_movie_row_limit()?;
    let store = setup::connect_store(&neo4j_config)
        .await
        .context("Connection to Neo4j failed")?;

    let records: Vec<MovieMetadataRecord> =
        reader::read_records_limited(config::data_file(MOVIES_METADATA_FILE), row_limit)?;
    let pairs = loaders::extract_title_genres(&records, row_limit);

    info!("\n📥 Loading movies from the first {} rows...", row_limit);
    let stats = loaders::load_movie_genres(&store, &pairs).await?;
    info!(
        "✓ Merged {} movies and {} genres from {} pairs",
        stats.movies, stats.genres, stats.pairs
    );

    Ok(())
}
