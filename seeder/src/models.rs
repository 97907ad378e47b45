// Row records for every CSV source, plus the fake user row written by the generator
use serde::{Deserialize, Serialize};

/// Row of `interests.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct InterestRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Row of `subinterest.csv`: the child belongs to the parent.
#[derive(Debug, Clone, Deserialize)]
pub struct SubinterestRecord {
    pub child_interest: String,
    pub parent_interest: String,
}

/// Row of `has_genre.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct HasGenreRecord {
    pub interest_name: String,
    pub genre_name: String,
}

/// Row of `users.csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub description: Option<String>,
    pub profile_picture: Option<String>,
    pub username: String,
}

/// Row of `users2.csv`, which carries no description or avatar.
#[derive(Debug, Clone, Deserialize)]
pub struct MinimalUserRecord {
    pub first_name: String,
    pub last_name: String,
    pub mail: String,
    pub username: String,
}

/// The columns of `movies_metadata.csv` the movie loader uses.
///
/// `genres` holds a Python literal such as `[{'id': 16, 'name': 'Animation'}]`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieMetadataRecord {
    pub title: Option<String>,
    pub genres: Option<String>,
}

/// Row of `movies_genres.csv`: one game and its genre.
#[derive(Debug, Clone, Deserialize)]
pub struct GameGenreRecord {
    #[serde(alias = "title")]
    pub name: Option<String>,
    pub genre: Option<String>,
}

/// A movie title paired with one of its genres.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleGenre {
    pub title: String,
    pub genre: String,
}

/// Row written by the fake user generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FakeUser {
    #[serde(rename = "Mail")]
    pub mail: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Profile Picture")]
    pub profile_picture: String,
}
