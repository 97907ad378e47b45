//! Integration tests for the randomized affinity generator.
//!
//! These tests use the in-memory graph store, optionally wrapped in a store
//! that starts failing writes after a given number of relationships.

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use seeder::affinity::{generate_affinities, AffinityConfig};
use seeder::errors::SeedError;
use seeder::summary::{collect_summary, ALL_EDGE_TYPES, ALL_NODE_LABELS};
use seeder_repository::{
    EdgeSpec, EdgeType, GraphStore, GraphStoreError, InMemoryGraphStore, NodeId, NodeLabel,
    NodeSpec, PropertyValue,
};

async fn seeded_store(users: usize, interests: usize) -> InMemoryGraphStore {
    let store = InMemoryGraphStore::new();
    for i in 0..interests {
        store
            .create_node(&NodeSpec::new(NodeLabel::Interest, format!("interest-{}", i)))
            .await
            .unwrap();
    }
    for u in 0..users {
        store
            .create_node(&NodeSpec::new(NodeLabel::User, format!("user-{}", u)))
            .await
            .unwrap();
    }
    store
}

fn first_pass_only() -> AffinityConfig {
    AffinityConfig {
        initiator_draws: 0,
        ..AffinityConfig::default()
    }
}

// Store that lets the first `allowed_edges` relationship writes through and
// then fails every following one with `failure`.
struct FailingStore {
    inner: InMemoryGraphStore,
    allowed_edges: usize,
    edge_calls: AtomicUsize,
    failure: GraphStoreError,
    report_counts: bool,
}

impl FailingStore {
    fn new(inner: InMemoryGraphStore, allowed_edges: usize, failure: GraphStoreError) -> Self {
        Self {
            inner,
            allowed_edges,
            edge_calls: AtomicUsize::new(0),
            failure,
            report_counts: true,
        }
    }

    fn without_counts(inner: InMemoryGraphStore) -> Self {
        Self {
            report_counts: false,
            ..Self::new(inner, usize::MAX, GraphStoreError::query("unused"))
        }
    }
}

#[async_trait::async_trait]
impl GraphStore for FailingStore {
    async fn verify_connectivity(&self) -> Result<(), GraphStoreError> {
        self.inner.verify_connectivity().await
    }

    async fn create_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError> {
        self.inner.create_node(node).await
    }

    async fn merge_node(&self, node: &NodeSpec) -> Result<(), GraphStoreError> {
        self.inner.merge_node(node).await
    }

    async fn create_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError> {
        if self.edge_calls.fetch_add(1, Ordering::SeqCst) >= self.allowed_edges {
            return Err(self.failure.clone());
        }
        self.inner.create_edge(edge).await
    }

    async fn merge_edge(&self, edge: &EdgeSpec) -> Result<(), GraphStoreError> {
        self.inner.merge_edge(edge).await
    }

    async fn node_ids(&self, label: NodeLabel) -> Result<Vec<NodeId>, GraphStoreError> {
        self.inner.node_ids(label).await
    }

    async fn node_keys(&self, label: NodeLabel) -> Result<Vec<String>, GraphStoreError> {
        self.inner.node_keys(label).await
    }

    async fn count_nodes(&self, label: NodeLabel) -> Result<Option<u64>, GraphStoreError> {
        if !self.report_counts {
            return Ok(None);
        }
        self.inner.count_nodes(label).await
    }

    async fn count_edges(&self, edge_type: EdgeType) -> Result<Option<u64>, GraphStoreError> {
        if !self.report_counts {
            return Ok(None);
        }
        self.inner.count_edges(edge_type).await
    }
}

#[tokio::test]
async fn test_no_users_means_no_writes() {
    let store = seeded_store(0, 20).await;
    let mut rng = StdRng::seed_from_u64(1);

    let report = generate_affinities(&store, &mut rng, AffinityConfig::default())
        .await
        .unwrap();

    assert_eq!(report.users, 0);
    assert_eq!(report.likes_created, 0);
    assert_eq!(report.matches_created, 0);
    assert_eq!(store.total_edges(), 0);
}

#[tokio::test]
async fn test_each_user_likes_distinct_interests() {
    let store = seeded_store(4, 40).await;
    let mut rng = StdRng::seed_from_u64(2);

    let report = generate_affinities(&store, &mut rng, first_pass_only())
        .await
        .unwrap();

    assert_eq!(report.likes_created, 4 * 15);
    let likes = store.edge_keys(EdgeType::Likes);
    for u in 0..4 {
        let username = format!("user-{}", u);
        let liked: Vec<&String> = likes
            .iter()
            .filter(|(from, _)| *from == username)
            .map(|(_, to)| to)
            .collect();
        let distinct: HashSet<&String> = liked.iter().copied().collect();
        assert_eq!(liked.len(), 15);
        assert_eq!(distinct.len(), 15);
    }
}

#[tokio::test]
async fn test_small_catalogue_is_liked_entirely() {
    let store = seeded_store(2, 5).await;
    let mut rng = StdRng::seed_from_u64(3);

    let report = generate_affinities(&store, &mut rng, first_pass_only())
        .await
        .unwrap();

    assert_eq!(report.likes_created, 2 * 5);
}

#[tokio::test]
async fn test_likes_target_enumerated_interests_with_valid_timestamps() {
    let store = seeded_store(10, 30).await;
    let interest_ids: HashSet<NodeId> = store
        .node_ids(NodeLabel::Interest)
        .await
        .unwrap()
        .into_iter()
        .collect();
    let mut rng = StdRng::seed_from_u64(4);

    let report = generate_affinities(&store, &mut rng, AffinityConfig::default())
        .await
        .unwrap();

    let likes = store.edges(EdgeType::Likes);
    assert_eq!(likes.len(), report.likes_created);
    assert_eq!(store.edges(EdgeType::Matches).len(), report.matches_created);

    for like in &likes {
        assert!(interest_ids.contains(&like.to));
        match like.properties.get("created_on") {
            Some(PropertyValue::DateTime(created_on)) => {
                assert!((2024..=2025).contains(&created_on.year()));
                assert!((1..=28).contains(&created_on.day()));
            }
            other => panic!("unexpected created_on: {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_initiators_share_likes_with_partners() {
    let store = seeded_store(3, 20).await;
    let mut rng = StdRng::seed_from_u64(5);

    let report = generate_affinities(&store, &mut rng, AffinityConfig::default())
        .await
        .unwrap();

    // 250 draws over 3 users practically always reach all of them.
    assert_eq!(report.initiators, 3);
    assert_eq!(report.initiators_skipped, 0);
    assert_eq!(report.likes_created, 3 * 15 + 3 * 5);
    assert!(report.matches_created <= 3);

    for (from, to) in store.edge_keys(EdgeType::Matches) {
        assert!(from.starts_with("user-"));
        assert!(to.starts_with("user-"));
    }
}

#[tokio::test]
async fn test_missing_endpoints_skip_initiators_without_error() {
    let inner = seeded_store(2, 3).await;
    let config = AffinityConfig {
        likes_per_user: 3,
        ..AffinityConfig::default()
    };
    // The first pass writes 2 * 3 likes; every write after that fails.
    let store = FailingStore::new(
        inner,
        6,
        GraphStoreError::endpoint_not_found(EdgeType::Likes, "user-0", "#0"),
    );
    let mut rng = StdRng::seed_from_u64(6);

    let report = generate_affinities(&store, &mut rng, config).await.unwrap();

    assert_eq!(report.likes_created, 6);
    assert_eq!(report.matches_created, 0);
    assert!(report.initiators > 0);
    assert_eq!(report.initiators_skipped, report.initiators);
}

#[tokio::test]
async fn test_other_store_failures_abort_generation() {
    let inner = seeded_store(2, 3).await;
    let config = AffinityConfig {
        likes_per_user: 3,
        ..AffinityConfig::default()
    };
    let store = FailingStore::new(inner, 6, GraphStoreError::query("connection reset"));
    let mut rng = StdRng::seed_from_u64(7);

    let err = generate_affinities(&store, &mut rng, config).await.unwrap_err();
    assert!(matches!(err, SeedError::Store(GraphStoreError::QueryError(_))));
}

#[tokio::test]
async fn test_users_without_interests_are_skipped() {
    let store = seeded_store(3, 0).await;
    let mut rng = StdRng::seed_from_u64(8);

    let report = generate_affinities(&store, &mut rng, AffinityConfig::default())
        .await
        .unwrap();

    assert_eq!(report.likes_created, 0);
    assert_eq!(report.matches_created, 0);
    assert_eq!(report.initiators_skipped, report.initiators);
}

#[tokio::test]
async fn test_summary_without_rows_reports_nothing() {
    let store = FailingStore::without_counts(seeded_store(1, 1).await);

    let summary = collect_summary(&store, &ALL_NODE_LABELS, &ALL_EDGE_TYPES)
        .await
        .unwrap();

    assert!(summary.is_empty());
    assert_eq!(summary.edge_count(EdgeType::Likes), 0);
}
