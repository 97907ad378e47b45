// Movie, category and genre loading from the movie metadata dump
use seeder_repository::{EdgeSpec, EdgeType, Endpoint, GraphStore, NodeLabel, NodeSpec, Properties};
use std::collections::HashSet;
use tracing::{debug, info};

use super::report_progress;
use crate::config::MOVIE_CATEGORY;
use crate::errors::SeedError;
use crate::models::{MovieMetadataRecord, TitleGenre};

/// Genre names in a literal such as `[{'id': 16, 'name': 'Animation'}]`.
///
/// Unquoted names such as `None` are skipped. Returns `None` when the value is
/// not a bracketed list or a quoted name is never terminated.
pub fn parse_genre_names(literal: &str) -> Option<Vec<String>> {
    let body = literal.trim().strip_prefix('[')?.strip_suffix(']')?;

    let mut names = Vec::new();
    let mut rest = body;
    while let Some(end_of_key) = find_name_key(rest) {
        let value = rest[end_of_key..].trim_start().strip_prefix(':')?.trim_start();
        if !value.starts_with(|c: char| c == '\'' || c == '"') {
            rest = value;
            continue;
        }
        let (name, remaining) = read_quoted(value)?;
        if !name.is_empty() {
            names.push(name);
        }
        rest = remaining;
    }

    Some(names)
}

/// Offset just past the next `'name'` or `"name"` key.
fn find_name_key(s: &str) -> Option<usize> {
    ["'name'", "\"name\""]
        .iter()
        .filter_map(|key| s.find(key).map(|idx| idx + key.len()))
        .min()
}

/// Read a single or double quoted string, returning it and the remaining input.
fn read_quoted(s: &str) -> Option<(String, &str)> {
    let mut chars = s.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }

    let mut value = String::new();
    let mut escaped = false;
    for (idx, c) in chars {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((value, &s[idx + c.len_utf8()..]));
        } else {
            value.push(c);
        }
    }
    None
}

/// Pair every title in the first `limit` rows with each of its genres.
///
/// Rows without a title or with an unparseable genre list are skipped.
pub fn extract_title_genres(records: &[MovieMetadataRecord], limit: usize) -> Vec<TitleGenre> {
    let mut pairs = Vec::new();

    for record in records.iter().take(limit) {
        let (Some(title), Some(genres)) = (record.title.as_deref(), record.genres.as_deref()) else {
            continue;
        };
        let Some(names) = parse_genre_names(genres) else {
            debug!("Skipping {:?}: unparseable genres {:?}", title, genres);
            continue;
        };

        pairs.extend(names.into_iter().map(|genre| TitleGenre {
            title: title.to_string(),
            genre,
        }));
    }

    pairs
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovieLoadStats {
    pub pairs: usize,
    pub movies: usize,
    pub genres: usize,
}

/// Merge each movie, the movie category and each genre, and link them.
///
/// Everything is merged, so reloading the same pairs writes nothing new.
pub async fn load_movie_genres<S: GraphStore + ?Sized>(
    store: &S,
    pairs: &[TitleGenre],
) -> Result<MovieLoadStats, SeedError> {
    info!("Loaded {} title/genre pairs", pairs.len());

    let category = NodeSpec::new(NodeLabel::Category, MOVIE_CATEGORY);
    let mut movies = HashSet::new();
    let mut genres = HashSet::new();

    for (idx, pair) in pairs.iter().enumerate() {
        store
            .merge_node(&NodeSpec::new(NodeLabel::Interest, pair.title.as_str()))
            .await?;
        store.merge_node(&category).await?;
        store
            .merge_edge(&EdgeSpec::new(
                EdgeType::BelongsTo,
                Endpoint::key(NodeLabel::Interest, pair.title.as_str()),
                Endpoint::key(NodeLabel::Category, MOVIE_CATEGORY),
            ))
            .await?;

        let genre = NodeSpec::new(NodeLabel::Genre, pair.genre.as_str())
            .with_properties(Properties::new().with("description", pair.genre.as_str()));
        store.merge_node(&genre).await?;
        store
            .merge_edge(&EdgeSpec::new(
                EdgeType::HasGenre,
                Endpoint::key(NodeLabel::Interest, pair.title.as_str()),
                Endpoint::key(NodeLabel::Genre, pair.genre.as_str()),
            ))
            .await?;

        movies.insert(pair.title.as_str());
        genres.insert(pair.genre.as_str());
        report_progress(idx + 1, pairs.len(), "movie genres");
    }

    Ok(MovieLoadStats {
        pairs: pairs.len(),
        movies: movies.len(),
        genres: genres.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>, genres: Option<&str>) -> MovieMetadataRecord {
        MovieMetadataRecord {
            title: title.map(str::to_string),
            genres: genres.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_genre_names() {
        let literal = "[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}]";
        assert_eq!(
            parse_genre_names(literal),
            Some(vec!["Animation".to_string(), "Comedy".to_string()])
        );
    }

    #[test]
    fn test_parse_genre_names_with_double_quotes() {
        let literal = r#"[{'id': 10751, "name": "Children's"}]"#;
        assert_eq!(
            parse_genre_names(literal),
            Some(vec!["Children's".to_string()])
        );
    }

    #[test]
    fn test_parse_empty_and_invalid_lists() {
        assert_eq!(parse_genre_names("[]"), Some(vec![]));
        assert_eq!(parse_genre_names("nan"), None);
        assert_eq!(parse_genre_names("[{'name': 'Unterminated}]"), None);
    }

    #[test]
    fn test_unquoted_name_skips_only_that_genre() {
        let literal = "[{'id': 16, 'name': 'Animation'}, {'id': 99, 'name': None}, {'id': 35, 'name': 'Comedy'}]";
        assert_eq!(
            parse_genre_names(literal),
            Some(vec!["Animation".to_string(), "Comedy".to_string()])
        );
    }

    #[test]
    fn test_extract_title_genres_skips_bad_rows_and_honours_limit() {
        let records = vec![
            record(Some("Toy Story"), Some("[{'id': 16, 'name': 'Animation'}, {'id': 35, 'name': 'Comedy'}]")),
            record(None, Some("[{'id': 18, 'name': 'Drama'}]")),
            record(Some("Broken"), Some("not a list")),
            record(Some("Heat"), Some("[{'id': 28, 'name': 'Action'}]")),
        ];

        let pairs = extract_title_genres(&records, 3);
        assert_eq!(
            pairs,
            vec![
                TitleGenre { title: "Toy Story".into(), genre: "Animation".into() },
                TitleGenre { title: "Toy Story".into(), genre: "Comedy".into() },
            ]
        );
    }
}
