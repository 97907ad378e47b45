// Video game and genre loading
use seeder_repository::{EdgeSpec, EdgeType, Endpoint, GraphStore, NodeLabel, NodeSpec, Properties};
use tracing::info;

use super::report_progress;
use crate::config::GAME_INTEREST_TYPE;
use crate::errors::SeedError;
use crate::models::GameGenreRecord;

/// Merge each game as an `Interest:Game`, merge its genre and link them.
///
/// Rows missing either a name or a genre are skipped. Returns the number of
/// rows written.
pub async fn load_game_genres<S: GraphStore + ?Sized>(
    store: &S,
    records: &[GameGenreRecord],
) -> Result<usize, SeedError> {
    let rows: Vec<(&str, &str)> = records
        .iter()
        .filter_map(|record| {
            let name = record.name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
            let genre = record.genre.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
            Some((name, genre))
        })
        .collect();

    if rows.is_empty() {
        info!("No valid rows with both a name and a genre");
        return Ok(0);
    }

    for (idx, (name, genre)) in rows.iter().enumerate() {
        let game = NodeSpec::new(NodeLabel::Interest, *name)
            .with_label(NodeLabel::Game)
            .with_properties(Properties::new().with("type", GAME_INTEREST_TYPE));
        store.merge_node(&game).await?;
        store.merge_node(&NodeSpec::new(NodeLabel::Genre, *genre)).await?;
        store
            .merge_edge(&EdgeSpec::new(
                EdgeType::HasGenre,
                Endpoint::key(NodeLabel::Interest, *name),
                Endpoint::key(NodeLabel::Genre, *genre),
            ))
            .await?;
        report_progress(idx + 1, rows.len(), "games");
    }

    info!("Inserted/updated {} games and their genres", rows.len());
    Ok(rows.len())
}
