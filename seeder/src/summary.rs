//! Post-load summary of node and relationship counts.
use seeder_repository::{EdgeType, GraphStore, NodeLabel};
use tracing::info;

use crate::errors::SeedError;

pub const ALL_NODE_LABELS: [NodeLabel; 4] = [
    NodeLabel::Interest,
    NodeLabel::Genre,
    NodeLabel::Category,
    NodeLabel::User,
];

pub const ALL_EDGE_TYPES: [EdgeType; 5] = [
    EdgeType::HasSubinterest,
    EdgeType::HasGenre,
    EdgeType::BelongsTo,
    EdgeType::Likes,
    EdgeType::Matches,
];

/// Counts gathered after a load. Labels and types whose query returned no
/// rows are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryReport {
    pub nodes: Vec<(NodeLabel, u64)>,
    pub edges: Vec<(EdgeType, u64)>,
}

impl SummaryReport {
    pub fn node_count(&self, label: NodeLabel) -> u64 {
        self.nodes
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn edge_count(&self, edge_type: EdgeType) -> u64 {
        self.edges
            .iter()
            .find(|(t, _)| *t == edge_type)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn log(&self) {
        if self.is_empty() {
            info!("Nothing to report");
            return;
        }

        info!("\n📊 Summary:");
        for (label, count) in &self.nodes {
            info!("   • {} nodes: {}", label, count);
        }
        for (edge_type, count) in &self.edges {
            info!("   • {} relationships: {}", edge_type, count);
        }
    }
}

/// Count nodes per label and relationships per type with independent read queries.
pub async fn collect_summary<S: GraphStore + ?Sized>(
    store: &S,
    labels: &[NodeLabel],
    edge_types: &[EdgeType],
) -> Result<SummaryReport, SeedError> {
    let mut report = SummaryReport::default();

    for label in labels {
        if let Some(count) = store.count_nodes(*label).await? {
            report.nodes.push((*label, count));
        }
    }
    for edge_type in edge_types {
        if let Some(count) = store.count_edges(*edge_type).await? {
            report.edges.push((*edge_type, count));
        }
    }

    Ok(report)
}
