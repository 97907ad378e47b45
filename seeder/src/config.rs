// Configuration constants and environment helpers
use std::path::PathBuf;

use seeder_repository::Neo4jConfig;

use crate::errors::SeedError;

// Neo4j defaults
pub const DEFAULT_NEO4J_URI: &str = "bolt://127.0.0.1:7687";
pub const DEFAULT_NEO4J_USER: &str = "neo4j";

// Input files, resolved inside the data directory
pub const DEFAULT_DATA_DIR: &str = "data/raw";
pub const INTERESTS_FILE: &str = "interests.csv";
pub const SUBINTEREST_FILE: &str = "subinterest.csv";
pub const HAS_GENRE_FILE: &str = "has_genre.csv";
pub const USERS_FILE: &str = "users.csv";
pub const MINIMAL_USERS_FILE: &str = "users2.csv";
pub const MOVIES_METADATA_FILE: &str = "movies_metadata.csv";
pub const GAME_GENRES_FILE: &str = "movies_genres.csv";

// Movie loading
pub const DEFAULT_MOVIE_ROW_LIMIT: usize = 2500;
pub const MOVIE_CATEGORY: &str = "movie";
pub const GAME_INTEREST_TYPE: &str = "Videojuego";

// Fake user generation
pub const DEFAULT_FAKE_USER_COUNT: usize = 200;

// Progress reporting interval for row-by-row loaders
pub const ROW_REPORT_INTERVAL: usize = 500;

/// Neo4j endpoint and credentials from `NEO4J_URI`, `NEO4J_USER` and `NEO4J_PASSWORD`.
pub fn get_neo4j_config() -> Result<Neo4jConfig, SeedError> {
    let uri = std::env::var("NEO4J_URI").unwrap_or_else(|_| DEFAULT_NEO4J_URI.to_string());
    let user = std::env::var("NEO4J_USER").unwrap_or_else(|_| DEFAULT_NEO4J_USER.to_string());
    let password = std::env::var("NEO4J_PASSWORD")
        .map_err(|_| SeedError::config("NEO4J_PASSWORD must be set"))?;

    Ok(Neo4jConfig::new(uri, user, password))
}

/// Directory holding the CSV inputs, from `SEED_DATA_DIR`.
pub fn get_data_dir() -> PathBuf {
    std::env::var("SEED_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Path of `file` inside the data directory.
pub fn data_file(file: &str) -> PathBuf {
    get_data_dir().join(file)
}

/// Number of movie metadata rows to load, from `MOVIE_ROW_LIMIT`.
pub fn get_movie_row_limit() -> Result<usize, SeedError> {
    parse_env_or("MOVIE_ROW_LIMIT", DEFAULT_MOVIE_ROW_LIMIT)
}

/// Number of fake users to generate, from `FAKE_USER_COUNT`.
pub fn get_fake_user_count() -> Result<usize, SeedError> {
    parse_env_or("FAKE_USER_COUNT", DEFAULT_FAKE_USER_COUNT)
}

fn parse_env_or(name: &str, default: usize) -> Result<usize, SeedError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SeedError::config(format!("{} must be a non-negative integer, got {:?}", name, raw))),
        Err(_) => Ok(default),
    }
}
