//! Synthetic user records for demo data.
use csv::WriterBuilder;
use rand::distributions::{Alphanumeric, Distribution};
use rand::Rng;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::errors::SeedError;
use crate::models::FakeUser;

pub const HEADERS: [&str; 8] = [
    "Mail",
    "Password",
    "Username",
    "First Name",
    "Last Name",
    "Country",
    "Description",
    "Profile Picture",
];

pub const PASSWORD_LENGTH: usize = 12;
pub const DESCRIPTION_WORDS: usize = 10;
pub const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?u=";
pub const MAIL_DOMAIN: &str = "example.com";

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bruno", "Camila", "Daniel", "Elena", "Felipe", "Grace", "Hugo", "Irene", "Jorge",
    "Karen", "Lucas", "Maria", "Nicolas", "Olivia", "Pablo", "Quinn", "Rosa", "Samuel", "Teresa",
    "Victor", "Wendy", "Xavier", "Yolanda", "Zoe", "Andres", "Beatriz", "Carlos", "Diana", "Emma",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Garcia", "Johnson", "Martinez", "Brown", "Lopez", "Davis", "Gonzalez", "Miller",
    "Rodriguez", "Wilson", "Perez", "Moore", "Sanchez", "Taylor", "Ramirez", "Anderson", "Torres",
    "Thomas", "Flores", "Jackson", "Rivera", "White", "Gomez", "Harris", "Diaz", "Clark", "Reyes",
];

const COUNTRIES: &[&str] = &[
    "Argentina", "Australia", "Brazil", "Canada", "Chile", "Colombia", "France", "Germany",
    "India", "Italy", "Japan", "Kenya", "Mexico", "Netherlands", "New Zealand", "Norway", "Peru",
    "Portugal", "South Africa", "Spain", "Sweden", "United Kingdom", "United States", "Uruguay",
];

const WORDS: &[&str] = &[
    "music", "travel", "coffee", "night", "movie", "guitar", "weekend", "mountain", "book",
    "friend", "game", "city", "summer", "dance", "story", "kitchen", "ocean", "road", "dream",
    "song", "morning", "garden", "river", "light", "photo", "team", "festival", "art", "sport",
    "always", "never", "love", "enjoy", "find", "share", "play", "watch", "read", "cook", "walk",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.gen_range(0..items.len())]
}

fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    let mut text = (0..words)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(first) = text.get(..1) {
        let upper = first.to_uppercase();
        text.replace_range(..1, &upper);
    }
    text.push('.');
    text
}

/// One fake user. The avatar URL is seeded with the mail address so the
/// picture stays the same for that user.
pub fn fake_user<R: Rng + ?Sized>(rng: &mut R) -> FakeUser {
    let first_name = pick(rng, FIRST_NAMES);
    let last_name = pick(rng, LAST_NAMES);
    let username = format!(
        "{}{}{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        rng.gen_range(1..=99)
    );
    let mail = format!("{}@{}", username, MAIL_DOMAIN);
    let password: String = (0..PASSWORD_LENGTH)
        .map(|_| char::from(Alphanumeric.sample(rng)))
        .collect();

    FakeUser {
        profile_picture: format!("{}{}", AVATAR_BASE_URL, mail),
        mail,
        password,
        username,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        country: pick(rng, COUNTRIES).to_string(),
        description: sentence(rng, DESCRIPTION_WORDS),
    }
}

/// Write a header row followed by `count` fake users.
pub fn write_fake_users<W: Write, R: Rng + ?Sized>(
    output: W,
    rng: &mut R,
    count: usize,
) -> Result<usize, SeedError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(HEADERS)?;

    for _ in 0..count {
        writer.serialize(fake_user(rng))?;
    }
    writer.flush()?;

    Ok(count)
}

/// Create (or truncate) the file at `path` and fill it with `count` fake users.
pub fn write_fake_users_to_path(path: impl AsRef<Path>, count: usize) -> Result<usize, SeedError> {
    let path = path.as_ref();
    info!("Generating {} users...", count);

    let file = File::create(path)?;
    let written = write_fake_users(file, &mut rand::thread_rng(), count)?;

    info!("Done! Wrote in {}", path.display());
    Ok(written)
}
