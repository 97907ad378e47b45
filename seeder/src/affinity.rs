//! Randomized affinity generation.
//!
//! Produces a synthetic social graph for demo data: every user likes a random
//! subset of interests, and a random set of initiators each pick a partner
//! who may match them and who then likes a sample of the initiator's
//! interests. Nothing here is reproducible between runs unless the caller
//! supplies a seeded RNG.

use chrono::{NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use seeder_repository::{
    EdgeSpec, EdgeType, Endpoint, GraphStore, GraphStoreError, NodeId, NodeLabel, Properties,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::errors::SeedError;

pub const DEFAULT_LIKES_PER_USER: usize = 15;
pub const DEFAULT_INITIATOR_DRAWS: usize = 250;
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_SHARED_LIKES: usize = 5;

pub const TIMESTAMP_YEARS: (i32, i32) = (2024, 2025);

/// A `created_on` value drawn component by component.
///
/// Days stop at 28 so every month yields a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTimestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl RandomTimestamp {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            day: rng.gen_range(1..=28),
            month: rng.gen_range(1..=12),
            year: rng.gen_range(TIMESTAMP_YEARS.0..=TIMESTAMP_YEARS.1),
            hour: rng.gen_range(1..=23),
            minute: rng.gen_range(1..=59),
            second: rng.gen_range(1..=59),
        }
    }

    pub fn to_datetime(&self) -> Result<NaiveDateTime, SeedError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or_else(|| SeedError::InvalidTimestamp(format!("{:?}", self)))
    }
}

#[derive(Debug, Clone)]
pub struct AffinityConfig {
    /// Distinct interests each user likes in the first pass.
    pub likes_per_user: usize,
    /// Initiator draws, with repetition; duplicates collapse.
    pub initiator_draws: usize,
    /// Attempts per initiator before it is skipped.
    pub max_attempts: usize,
    /// Interests sampled, with repetition, from the initiator's likes.
    pub shared_likes: usize,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            likes_per_user: DEFAULT_LIKES_PER_USER,
            initiator_draws: DEFAULT_INITIATOR_DRAWS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            shared_likes: DEFAULT_SHARED_LIKES,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffinityReport {
    pub users: usize,
    pub interests: usize,
    pub likes_created: usize,
    pub matches_created: usize,
    pub initiators: usize,
    pub initiators_skipped: usize,
}

/// Why a sharing attempt failed.
enum AttemptError {
    /// A key the attempt depends on is absent. Retried.
    MissingKey(String),
    /// Anything else. Aborts the run.
    Fatal(SeedError),
}

impl From<GraphStoreError> for AttemptError {
    fn from(err: GraphStoreError) -> Self {
        if err.is_missing_endpoint() {
            AttemptError::MissingKey(err.to_string())
        } else {
            AttemptError::Fatal(err.into())
        }
    }
}

impl From<SeedError> for AttemptError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Store(store_err) => store_err.into(),
            other => AttemptError::Fatal(other),
        }
    }
}

/// Writes random `LIKES` and `MATCHES` relationships through a graph store.
pub struct AffinityGenerator<'a, S: GraphStore + ?Sized, R: Rng + ?Sized> {
    store: &'a S,
    rng: &'a mut R,
    config: AffinityConfig,
    report: AffinityReport,
}

impl<'a, S: GraphStore + ?Sized, R: Rng + ?Sized> AffinityGenerator<'a, S, R> {
    pub fn new(store: &'a S, rng: &'a mut R, config: AffinityConfig) -> Self {
        Self {
            store,
            rng,
            config,
            report: AffinityReport::default(),
        }
    }

    /// Enumerate users and interests once, then write likes and matches.
    pub async fn run(mut self) -> Result<AffinityReport, SeedError> {
        let interest_ids = self.store.node_ids(NodeLabel::Interest).await?;
        let usernames = self.store.node_keys(NodeLabel::User).await?;
        self.report.users = usernames.len();
        self.report.interests = interest_ids.len();
        info!(
            "Generating affinities for {} users over {} interests",
            usernames.len(),
            interest_ids.len()
        );

        let likes = self.like_random_interests(&usernames, &interest_ids).await?;
        self.share_likes(&usernames, &likes).await?;

        info!(
            likes = self.report.likes_created,
            matches = self.report.matches_created,
            initiators = self.report.initiators,
            skipped = self.report.initiators_skipped,
            "Affinity generation complete"
        );
        Ok(self.report)
    }

    /// First pass: each user likes a random subset of the interests.
    async fn like_random_interests(
        &mut self,
        usernames: &[String],
        interest_ids: &[NodeId],
    ) -> Result<HashMap<String, Vec<NodeId>>, SeedError> {
        let mut likes = HashMap::with_capacity(usernames.len());

        for username in usernames {
            let picks: Vec<NodeId> = interest_ids
                .choose_multiple(&mut *self.rng, self.config.likes_per_user)
                .copied()
                .collect();

            for interest_id in &picks {
                self.write_like(username, *interest_id).await?;
            }
            likes.insert(username.clone(), picks);
        }

        info!("✓ Created {} likes for {} users", self.report.likes_created, usernames.len());
        Ok(likes)
    }

    /// Second pass: initiators share a sample of their likes with a random partner.
    async fn share_likes(
        &mut self,
        usernames: &[String],
        likes: &HashMap<String, Vec<NodeId>>,
    ) -> Result<(), SeedError> {
        if usernames.is_empty() {
            return Ok(());
        }

        let mut seen = HashSet::new();
        let initiators: Vec<&String> = (0..self.config.initiator_draws)
            .filter_map(|_| usernames.choose(&mut *self.rng))
            .filter(|&username| seen.insert(username.as_str()))
            .collect();
        self.report.initiators = initiators.len();

        for initiator in initiators {
            let mut shared = false;

            for attempt in 1..=self.config.max_attempts {
                match self.try_share(initiator, usernames, likes).await {
                    Ok(()) => {
                        shared = true;
                        break;
                    }
                    Err(AttemptError::MissingKey(reason)) => {
                        warn!(
                            "Attempt {}/{} for {} failed: {}",
                            attempt, self.config.max_attempts, initiator, reason
                        );
                    }
                    Err(AttemptError::Fatal(err)) => return Err(err),
                }
            }

            if !shared {
                warn!("Skipping initiator {} after {} attempts", initiator, self.config.max_attempts);
                self.report.initiators_skipped += 1;
            }
        }

        Ok(())
    }

    async fn try_share(
        &mut self,
        initiator: &str,
        usernames: &[String],
        likes: &HashMap<String, Vec<NodeId>>,
    ) -> Result<(), AttemptError> {
        let target = usernames
            .choose(&mut *self.rng)
            .ok_or_else(|| AttemptError::MissingKey("no users to pick a target from".to_string()))?;
        let initiator_likes = likes
            .get(initiator)
            .ok_or_else(|| AttemptError::MissingKey(format!("no likes recorded for {}", initiator)))?;
        if initiator_likes.is_empty() {
            return Err(AttemptError::MissingKey(format!("{} likes nothing", initiator)));
        }

        debug!("{} -> {}", initiator, target);
        let shared: Vec<NodeId> = (0..self.config.shared_likes)
            .map(|_| initiator_likes[self.rng.gen_range(0..initiator_likes.len())])
            .collect();

        if self.rng.gen_range(0..=10) % 2 == 0 {
            let edge = EdgeSpec::new(
                EdgeType::Matches,
                Endpoint::key(NodeLabel::User, target.as_str()),
                Endpoint::key(NodeLabel::User, initiator),
            );
            self.store.create_edge(&edge).await?;
            self.report.matches_created += 1;
        }

        for interest_id in shared {
            self.write_like(target, interest_id).await?;
        }

        Ok(())
    }

    async fn write_like(&mut self, username: &str, interest_id: NodeId) -> Result<(), SeedError> {
        let created_on = RandomTimestamp::generate(&mut *self.rng).to_datetime()?;
        let edge = EdgeSpec::new(
            EdgeType::Likes,
            Endpoint::key(NodeLabel::User, username),
            Endpoint::id(NodeLabel::Interest, interest_id),
        )
        .with_properties(Properties::new().with("created_on", created_on));

        self.store.create_edge(&edge).await?;
        self.report.likes_created += 1;
        Ok(())
    }
}

/// Run the generator with the given configuration.
pub async fn generate_affinities<S, R>(
    store: &S,
    rng: &mut R,
    config: AffinityConfig,
) -> Result<AffinityReport, SeedError>
where
    S: GraphStore + ?Sized,
    R: Rng + ?Sized,
{
    AffinityGenerator::new(store, rng, config).run().await
}
