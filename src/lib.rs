// Campus Seed - Core Library
// Populates a campus information store with its canonical reference data

pub mod clear;
pub mod config;
pub mod credentials;
pub mod dataset;
pub mod db;
pub mod entities;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod seeder;
pub mod sequencer;

// Re-export commonly used types
pub use clear::{clear_managed, ClearTally};
pub use config::SeedOptions;
pub use credentials::{CredentialHasher, Pbkdf2Hasher};
pub use dataset::{Dataset, DATASET_VERSION};
pub use db::{open_database, open_in_memory, setup_database};
pub use entities::{seeder_for, EntityKind};
pub use error::{ErrorKind, Result, SeedError};
pub use orchestrator::Orchestrator;
pub use report::{Phase, RunFailure, RunOutcome, RunReport, RunReporter};
pub use seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
pub use sequencer::{clear_order, validate_order, SeedPlan, SEED_ORDER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
