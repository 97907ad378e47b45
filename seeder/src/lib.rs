// Library exports for the seeding binaries
pub mod affinity;
pub mod config;
pub mod errors;
pub mod fake_users;
pub mod loaders;
pub mod models;
pub mod reader;
pub mod setup;
pub mod summary;

pub use errors::SeedError;
