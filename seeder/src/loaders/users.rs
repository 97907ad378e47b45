// User loading
use seeder_repository::{GraphStore, NodeLabel, NodeSpec, Properties};
use std::collections::HashSet;

use super::report_progress;
use crate::errors::SeedError;
use crate::models::{MinimalUserRecord, UserRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserLoadStats {
    pub full: usize,
    pub minimal: usize,
}

/// Create User nodes from both user files.
///
/// Usernames are checked for uniqueness across both files before anything is
/// written, so a duplicate aborts the load without touching the store.
pub async fn load_users<S: GraphStore + ?Sized>(
    store: &S,
    users: &[UserRecord],
    minimal_users: &[MinimalUserRecord],
) -> Result<UserLoadStats, SeedError> {
    let mut seen = HashSet::new();
    let usernames = users
        .iter()
        .map(|u| u.username.as_str())
        .chain(minimal_users.iter().map(|u| u.username.as_str()));
    for username in usernames {
        if !seen.insert(username) {
            return Err(SeedError::DuplicateKey {
                label: NodeLabel::User,
                key: username.to_string(),
            });
        }
    }

    for (idx, user) in users.iter().enumerate() {
        let node = NodeSpec::new(NodeLabel::User, user.username.as_str()).with_properties(
            Properties::new()
                .with("first_name", user.first_name.as_str())
                .with("last_name", user.last_name.as_str())
                .with("mail", user.mail.as_str())
                .with_opt("description", user.description.as_deref())
                .with_opt("avatar", user.profile_picture.as_deref()),
        );
        store.create_node(&node).await?;
        report_progress(idx + 1, users.len(), "users");
    }

    for (idx, user) in minimal_users.iter().enumerate() {
        let node = NodeSpec::new(NodeLabel::User, user.username.as_str()).with_properties(
            Properties::new()
                .with("first_name", user.first_name.as_str())
                .with("last_name", user.last_name.as_str())
                .with("mail", user.mail.as_str()),
        );
        store.create_node(&node).await?;
        report_progress(idx + 1, minimal_users.len(), "minimal users");
    }

    Ok(UserLoadStats {
        full: users.len(),
        minimal: minimal_users.len(),
    })
}
