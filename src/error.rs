// ⚠️ Seed Errors - every way a run can fail
//
// Existing natural keys are NOT errors: they are counted as "existing" by the
// seeders. Everything below aborts the run and rolls the transaction back.

use crate::entities::EntityKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    /// A seeder referenced a natural key that is not in the store.
    #[error("{entity} references {dependency} '{reference}', which does not exist")]
    MissingDependency {
        entity: EntityKind,
        dependency: EntityKind,
        reference: String,
    },

    /// A plan places an entity before one of its declared dependencies.
    #[error("seed order places {entity} before its dependency {dependency}")]
    OrderViolation {
        entity: EntityKind,
        dependency: EntityKind,
    },

    /// Canonical data contains the same natural key twice.
    #[error("canonical {entity} data repeats natural key '{key}'")]
    DuplicateKey { entity: EntityKind, key: String },

    /// The natural-key constraint fired on insert: someone else wrote the
    /// row mid-run.
    #[error("{entity} '{key}' was created concurrently: {source}")]
    Conflict {
        entity: EntityKind,
        key: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A unique constraint other than the natural key fired, so an existing
    /// row already holds a value this record needs.
    #[error("{entity} '{key}' collides with an existing row on {constraint}")]
    KeyCollision {
        entity: EntityKind,
        key: String,
        constraint: String,
    },

    #[error("store failure while processing {entity}: {source}")]
    Store {
        entity: EntityKind,
        #[source]
        source: rusqlite::Error,
    },

    /// Rows outside the managed set still reference a row being cleared.
    #[error("cannot clear {entity} '{key}': other rows still reference it")]
    ClearBlocked { entity: EntityKind, key: String },

    #[error("transaction failure: {0}")]
    Transaction(#[source] rusqlite::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// Coarse classification used by the run report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingDependency,
    OrderViolation,
    DuplicateKey,
    Conflict,
    KeyCollision,
    Store,
    ClearBlocked,
    Transaction,
    Config,
}

impl SeedError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeedError::MissingDependency { .. } => ErrorKind::MissingDependency,
            SeedError::OrderViolation { .. } => ErrorKind::OrderViolation,
            SeedError::DuplicateKey { .. } => ErrorKind::DuplicateKey,
            SeedError::Conflict { .. } => ErrorKind::Conflict,
            SeedError::KeyCollision { .. } => ErrorKind::KeyCollision,
            SeedError::Store { .. } => ErrorKind::Store,
            SeedError::ClearBlocked { .. } => ErrorKind::ClearBlocked,
            SeedError::Transaction(_) => ErrorKind::Transaction,
            SeedError::Config(_) => ErrorKind::Config,
        }
    }

    /// The entity being processed when the error happened, if any.
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            SeedError::MissingDependency { entity, .. }
            | SeedError::OrderViolation { entity, .. }
            | SeedError::DuplicateKey { entity, .. }
            | SeedError::Conflict { entity, .. }
            | SeedError::KeyCollision { entity, .. }
            | SeedError::Store { entity, .. }
            | SeedError::ClearBlocked { entity, .. } => Some(*entity),
            SeedError::Transaction(_) | SeedError::Config(_) => None,
        }
    }

    /// Whether simply re-invoking the seeder has a chance of succeeding.
    ///
    /// Store-level and concurrency failures are transient. Ordering, data,
    /// collision and configuration mistakes need a code or data change, and a
    /// blocked clear needs someone to deal with the referencing rows first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SeedError::Conflict { .. } | SeedError::Store { .. } | SeedError::Transaction(_)
        )
    }
}

/// Attach the entity being processed to a raw rusqlite error.
pub trait StoreResultExt<T> {
    fn for_entity(self, entity: EntityKind) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn for_entity(self, entity: EntityKind) -> Result<T> {
        self.map_err(|source| SeedError::Store { entity, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let missing = SeedError::MissingDependency {
            entity: EntityKind::KnowledgeBase,
            dependency: EntityKind::KnowledgeCategory,
            reference: "Library".to_string(),
        };
        assert!(!missing.is_retryable());
        assert_eq!(missing.kind(), ErrorKind::MissingDependency);
        assert_eq!(missing.entity(), Some(EntityKind::KnowledgeBase));

        let store = SeedError::Store {
            entity: EntityKind::Faq,
            source: rusqlite::Error::InvalidQuery,
        };
        assert!(store.is_retryable());

        let collision = SeedError::KeyCollision {
            entity: EntityKind::User,
            key: "john.doe".to_string(),
            constraint: "users.student_id".to_string(),
        };
        assert!(!collision.is_retryable());
        assert_eq!(collision.kind(), ErrorKind::KeyCollision);

        let blocked = SeedError::ClearBlocked {
            entity: EntityKind::User,
            key: "admin".to_string(),
        };
        assert!(!blocked.is_retryable());
    }

    #[test]
    fn test_missing_dependency_message_names_reference() {
        let err = SeedError::MissingDependency {
            entity: EntityKind::ExamInformation,
            dependency: EntityKind::AcademicYear,
            reference: "2031/2032".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("ExamInformation"));
        assert!(message.contains("AcademicYear"));
        assert!(message.contains("2031/2032"));
    }

    #[test]
    fn test_for_entity_wraps_store_errors() {
        let raw: std::result::Result<(), rusqlite::Error> = Err(rusqlite::Error::InvalidQuery);
        let err = raw.for_entity(EntityKind::BankAccount).unwrap_err();
        assert_eq!(err.entity(), Some(EntityKind::BankAccount));
        assert_eq!(err.kind(), ErrorKind::Store);
    }
}
