// Loads interests, their hierarchy and their genres
use anyhow::{Context, Result};
use seeder::config::{self, HAS_GENRE_FILE, INTERESTS_FILE, SUBINTEREST_FILE};
use seeder::models::{HasGenreRecord, InterestRecord, SubinterestRecord};
use seeder::summary::{collect_summary, ALL_EDGE_TYPES};
use seeder::{loaders, reader, setup};
use seeder_repository::NodeLabel;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup::init_tracing();

    let neo4j_config = config::get_neo4j_config()?;
    let store = setup::connect_store(&neo4j_config)
        .await
        .context("Connection to Neo4j failed")?;

    info!("\n📥 Loading interests...");
    let interests: Vec<InterestRecord> = reader::read_records(config::data_file(INTERESTS_FILE))?;
    let created = loaders::load_interests(&store, &interests).await?;
    info!("✓ Created {} interests", created);

    info!("\n📥 Loading interest relationships...");
    let hierarchy: Vec<SubinterestRecord> =
        reader::read_records(config::data_file(SUBINTEREST_FILE))?;
    let linked = loaders::load_subinterests(&store, &hierarchy).await?;
    info!("✓ Created {} interest relationships", linked);

    info!("\n📥 Loading genre relationships...");
    let genre_links: Vec<HasGenreRecord> = reader::read_records(config::data_file(HAS_GENRE_FILE))?;
    let stats = loaders::load_genre_links(&store, &genre_links).await?;
    info!(
        "✓ Merged {} genres and created {} genre relationships",
        stats.genres, stats.links
    );

    let summary = collect_summary(
        &store,
        &[NodeLabel::Interest, NodeLabel::Genre],
        &ALL_EDGE_TYPES[..3],
    )
    .await?;
    summary.log();

    info!("\n✅ All data loaded successfully!");
    Ok(())
}
