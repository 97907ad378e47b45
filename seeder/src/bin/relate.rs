// Generates random likes and matches between the loaded users and interests
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use seeder::affinity::{generate_affinities, AffinityConfig};
use seeder::summary::{collect_summary, ALL_EDGE_TYPES, ALL_NODE_LABELS};
use seeder::{config, setup};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup::init_tracing();

    let neo4j_config = config::get_neo4j_config()?;
    let store = setup::connect_store(&neo4j_config)
        .await
        .context("Connection to Neo4j failed")?;

    let mut rng = StdRng::from_entropy();
    generate_affinities(&store, &mut rng, AffinityConfig::default()).await?;

    let summary = collect_summary(&store, &ALL_NODE_LABELS, &ALL_EDGE_TYPES).await?;
    summary.log();

    Ok(())
}
