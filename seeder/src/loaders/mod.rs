//! Loaders turning CSV rows into nodes and relationships.
//!
//! Every loader writes through the `GraphStore` handed to it and issues one
//! write at a time, awaiting each before the next.
pub mod games;
pub mod interests;
pub mod movies;
pub mod users;

pub use games::load_game_genres;
pub use interests::{load_genre_links, load_interests, load_subinterests, GenreLinkStats};
pub use movies::{extract_title_genres, load_movie_genres, parse_genre_names, MovieLoadStats};
pub use users::{load_users, UserLoadStats};

use tracing::info;

use crate::config::ROW_REPORT_INTERVAL;

fn report_progress(done: usize, total: usize, what: &str) {
    if done % ROW_REPORT_INTERVAL == 0 || done == total {
        info!("  Progress: {}/{} {}", done, total, what);
    }
}
