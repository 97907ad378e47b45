//! Loader scenarios run against the in-memory graph store.

use seeder::errors::SeedError;
use seeder::loaders::{
    extract_title_genres, load_game_genres, load_genre_links, load_interests, load_movie_genres,
    load_subinterests, load_users,
};
use seeder::models::{
    GameGenreRecord, HasGenreRecord, InterestRecord, MinimalUserRecord, MovieMetadataRecord,
    SubinterestRecord, UserRecord,
};
use seeder::reader::read_records_from;
use seeder::summary::{collect_summary, ALL_EDGE_TYPES, ALL_NODE_LABELS};
use seeder_repository::{EdgeType, GraphStoreError, InMemoryGraphStore, NodeLabel};

fn interests_csv() -> Vec<InterestRecord> {
    read_records_from("name,type,description\nRockSong,song,A loud song\nRockAlbum,album,A loud album\n".as_bytes())
        .unwrap()
}

#[tokio::test]
async fn test_subinterest_links_child_to_parent_only() {
    let store = InMemoryGraphStore::new();
    load_interests(&store, &interests_csv()).await.unwrap();

    let hierarchy: Vec<SubinterestRecord> =
        read_records_from("child_interest,parent_interest\nRockSong,RockAlbum\n".as_bytes()).unwrap();
    load_subinterests(&store, &hierarchy).await.unwrap();

    let edges = store.edge_keys(EdgeType::HasSubinterest);
    assert_eq!(edges, vec![("RockSong".to_string(), "RockAlbum".to_string())]);
    assert!(!edges.contains(&("RockAlbum".to_string(), "RockSong".to_string())));
}

#[tokio::test]
async fn test_interest_properties_are_stored() {
    let store = InMemoryGraphStore::new();
    load_interests(&store, &interests_csv()).await.unwrap();

    let nodes = store.nodes(NodeLabel::Interest);
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].properties.get_str("type"), Some("song"));
    assert_eq!(nodes[1].properties.get_str("description"), Some("A loud album"));
}

#[tokio::test]
async fn test_subinterest_with_unknown_parent_fails() {
    let store = InMemoryGraphStore::new();
    load_interests(&store, &interests_csv()).await.unwrap();

    let hierarchy = vec![SubinterestRecord {
        child_interest: "RockSong".to_string(),
        parent_interest: "JazzAlbum".to_string(),
    }];
    let err = load_subinterests(&store, &hierarchy).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Store(GraphStoreError::EndpointNotFound { edge_type: EdgeType::HasSubinterest, .. })
    ));
    assert!(store.edges(EdgeType::HasSubinterest).is_empty());
}

#[tokio::test]
async fn test_shared_genre_is_created_once() {
    let store = InMemoryGraphStore::new();
    load_interests(&store, &interests_csv()).await.unwrap();

    let links: Vec<HasGenreRecord> = read_records_from(
        "interest_name,genre_name\nRockSong,Rock\nRockAlbum,Rock\n".as_bytes(),
    )
    .unwrap();
    let stats = load_genre_links(&store, &links).await.unwrap();

    assert_eq!(stats.genres, 1);
    assert_eq!(stats.links, 2);
    assert_eq!(store.nodes(NodeLabel::Genre).len(), 1);
    assert_eq!(store.edges(EdgeType::HasGenre).len(), 2);
}

#[tokio::test]
async fn test_genre_merge_is_idempotent_across_runs() {
    let store = InMemoryGraphStore::new();
    load_interests(&store, &interests_csv()).await.unwrap();
    let links = vec![HasGenreRecord {
        interest_name: "RockSong".to_string(),
        genre_name: "Rock".to_string(),
    }];

    load_genre_links(&store, &links).await.unwrap();
    load_genre_links(&store, &links).await.unwrap();

    assert_eq!(store.nodes(NodeLabel::Genre).len(), 1);
    // Relationships are created, not merged, so a rerun duplicates them.
    assert_eq!(store.edges(EdgeType::HasGenre).len(), 2);
}

#[tokio::test]
async fn test_movie_load_merges_everything() {
    let store = InMemoryGraphStore::new();
    let records = vec![
        MovieMetadataRecord {
            title: Some("Toy Story".to_string()),
            genres: Some("[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}]".to_string()),
        },
        MovieMetadataRecord {
            title: Some("Jumanji".to_string()),
            genres: Some("[{'id': 35, 'name': 'Comedy'}]".to_string()),
        },
    ];
    let pairs = extract_title_genres(&records, 2500);

    let stats = load_movie_genres(&store, &pairs).await.unwrap();
    load_movie_genres(&store, &pairs).await.unwrap();

    assert_eq!(stats.pairs, 3);
    assert_eq!(stats.movies, 2);
    assert_eq!(stats.genres, 2);
    assert_eq!(store.nodes(NodeLabel::Interest).len(), 2);
    assert_eq!(store.nodes(NodeLabel::Category).len(), 1);
    assert_eq!(store.nodes(NodeLabel::Genre).len(), 2);
    assert_eq!(store.edges(EdgeType::BelongsTo).len(), 2);
    assert_eq!(store.edges(EdgeType::HasGenre).len(), 3);

    let comedy = store
        .nodes(NodeLabel::Genre)
        .into_iter()
        .find(|g| g.key == "Comedy")
        .unwrap();
    assert_eq!(comedy.properties.get_str("description"), Some("Comedy"));
}

#[tokio::test]
async fn test_game_load_skips_incomplete_rows() {
    let store = InMemoryGraphStore::new();
    let records: Vec<GameGenreRecord> = read_records_from(
        "name,genre\nPortal,Puzzle\n,Action\nDoom,\nHalf-Life,Shooter\nPortal,Puzzle\n".as_bytes(),
    )
    .unwrap();

    let written = load_game_genres(&store, &records).await.unwrap();

    assert_eq!(written, 3);
    let games = store.nodes(NodeLabel::Game);
    assert_eq!(games.len(), 2);
    assert!(games.iter().all(|g| g.labels.contains(&NodeLabel::Interest)));
    assert!(games
        .iter()
        .all(|g| g.properties.get_str("type") == Some("Videojuego")));
    assert_eq!(store.edges(EdgeType::HasGenre).len(), 2);
}

#[tokio::test]
async fn test_game_load_without_valid_rows_writes_nothing() {
    let store = InMemoryGraphStore::new();
    let records = vec![GameGenreRecord {
        name: None,
        genre: Some("Action".to_string()),
    }];

    assert_eq!(load_game_genres(&store, &records).await.unwrap(), 0);
    assert_eq!(store.total_nodes(), 0);
}

#[tokio::test]
async fn test_users_from_both_files() {
    let store = InMemoryGraphStore::new();
    let users: Vec<UserRecord> = read_records_from(
        "first_name,last_name,mail,description,profile_picture,username\n\
         Ada,Lovelace,ada@example.com,Engines,https://i.pravatar.cc/150?u=ada@example.com,ada\n"
            .as_bytes(),
    )
    .unwrap();
    let minimal: Vec<MinimalUserRecord> = read_records_from(
        "first_name,last_name,mail,username\nAlan,Turing,alan@example.com,alan\n".as_bytes(),
    )
    .unwrap();

    let stats = load_users(&store, &users, &minimal).await.unwrap();
    assert_eq!((stats.full, stats.minimal), (1, 1));

    let nodes = store.nodes(NodeLabel::User);
    assert_eq!(nodes.len(), 2);
    assert_eq!(
        nodes[0].properties.get_str("avatar"),
        Some("https://i.pravatar.cc/150?u=ada@example.com")
    );
    assert!(nodes[1].properties.get("description").is_none());
    assert!(nodes[1].properties.get("avatar").is_none());
}

#[tokio::test]
async fn test_duplicate_username_aborts_before_writing() {
    let store = InMemoryGraphStore::new();
    let users = vec![UserRecord {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        mail: "ada@example.com".to_string(),
        description: None,
        profile_picture: None,
        username: "ada".to_string(),
    }];
    let minimal = vec![MinimalUserRecord {
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        mail: "byron@example.com".to_string(),
        username: "ada".to_string(),
    }];

    let err = load_users(&store, &users, &minimal).await.unwrap_err();
    assert!(matches!(err, SeedError::DuplicateKey { label: NodeLabel::User, .. }));
    assert_eq!(store.total_nodes(), 0);
}

#[tokio::test]
async fn test_summary_of_empty_store_is_all_zero() {
    let store = InMemoryGraphStore::new();
    let summary = collect_summary(&store, &ALL_NODE_LABELS, &ALL_EDGE_TYPES)
        .await
        .unwrap();

    for label in ALL_NODE_LABELS {
        assert_eq!(summary.node_count(label), 0);
    }
    for edge_type in ALL_EDGE_TYPES {
        assert_eq!(summary.edge_count(edge_type), 0);
    }
}

#[tokio::test]
async fn test_summary_counts_loaded_data() {
    let store = InMemoryGraphStore::new();
    load_interests(&store, &interests_csv()).await.unwrap();
    let hierarchy = vec![SubinterestRecord {
        child_interest: "RockSong".to_string(),
        parent_interest: "RockAlbum".to_string(),
    }];
    load_subinterests(&store, &hierarchy).await.unwrap();

    let summary = collect_summary(&store, &ALL_NODE_LABELS, &ALL_EDGE_TYPES)
        .await
        .unwrap();
    assert_eq!(summary.node_count(NodeLabel::Interest), 2);
    assert_eq!(summary.edge_count(EdgeType::HasSubinterest), 1);
    assert_eq!(summary.edge_count(EdgeType::Likes), 0);
}
