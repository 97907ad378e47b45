// Interest, hierarchy and genre loading
use seeder_repository::{EdgeSpec, EdgeType, Endpoint, GraphStore, NodeLabel, NodeSpec, Properties};
use std::collections::HashSet;

use super::report_progress;
use crate::errors::SeedError;
use crate::models::{HasGenreRecord, InterestRecord, SubinterestRecord};

/// Create one Interest node per row.
///
/// Interest names are assumed unique within the file, so nodes are created
/// rather than merged.
pub async fn load_interests<S: GraphStore + ?Sized>(
    store: &S,
    records: &[InterestRecord],
) -> Result<usize, SeedError> {
    for (idx, record) in records.iter().enumerate() {
        let node = NodeSpec::new(NodeLabel::Interest, record.name.as_str()).with_properties(
            Properties::new()
                .with("type", record.kind.as_str())
                .with("description", record.description.as_str()),
        );
        store.create_node(&node).await?;
        report_progress(idx + 1, records.len(), "interests");
    }

    Ok(records.len())
}

/// Link each child interest to its parent with `HAS_SUBINTEREST`.
///
/// Both interests must already exist.
pub async fn load_subinterests<S: GraphStore + ?Sized>(
    store: &S,
    records: &[SubinterestRecord],
) -> Result<usize, SeedError> {
    for (idx, record) in records.iter().enumerate() {
        let edge = EdgeSpec::new(
            EdgeType::HasSubinterest,
            Endpoint::key(NodeLabel::Interest, record.child_interest.as_str()),
            Endpoint::key(NodeLabel::Interest, record.parent_interest.as_str()),
        );
        store.create_edge(&edge).await?;
        report_progress(idx + 1, records.len(), "interest relationships");
    }

    Ok(records.len())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenreLinkStats {
    pub genres: usize,
    pub links: usize,
}

/// Merge each distinct genre once, then link every interest to its genre.
pub async fn load_genre_links<S: GraphStore + ?Sized>(
    store: &S,
    records: &[HasGenreRecord],
) -> Result<GenreLinkStats, SeedError> {
    let mut genres_created: HashSet<&str> = HashSet::new();
    let mut stats = GenreLinkStats::default();

    for (idx, record) in records.iter().enumerate() {
        let genre_name = record.genre_name.as_str();

        if genres_created.insert(genre_name) {
            store
                .merge_node(&NodeSpec::new(NodeLabel::Genre, genre_name))
                .await?;
            stats.genres += 1;
        }

        let edge = EdgeSpec::new(
            EdgeType::HasGenre,
            Endpoint::key(NodeLabel::Interest, record.interest_name.as_str()),
            Endpoint::key(NodeLabel::Genre, genre_name),
        );
        store.create_edge(&edge).await?;
        stats.links += 1;

        report_progress(idx + 1, records.len(), "genre relationships");
    }

    Ok(stats)
}
