// 🌱 Seeder contract - what every entity seeder implements
//
// A seeder looks each canonical record up by natural key, creates it when
// absent and applies its upsert policy when present. It writes only its own
// table. Cross-entity references are resolved through SeedContext::resolve,
// which turns an absent referent into a MissingDependency error.
//
// Every row a seeder creates or adopts is written to the seed ledger, and
// clear deletes exactly what the ledger holds. Rows from runs with another
// base year go too; rows nobody seeded stay.

use crate::credentials::CredentialHasher;
use crate::dataset::Dataset;
use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, SeedError, StoreResultExt};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection};
use serde::Serialize;
use tracing::debug;

// ============================================================================
// UPSERT POLICY
// ============================================================================

/// What a seeder does with a row whose natural key already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertPolicy {
    /// Leave the row exactly as found
    Skip,

    /// Rewrite non-key fields from the canonical record
    Refresh,
}

impl UpsertPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsertPolicy::Skip => "skip",
            UpsertPolicy::Refresh => "refresh",
        }
    }
}

// ============================================================================
// TALLY
// ============================================================================

/// Per-entity outcome of one seeder invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityTally {
    pub entity: EntityKind,
    pub policy: UpsertPolicy,
    pub created: usize,

    /// Rows whose natural key was already present
    pub existing: usize,

    /// Subset of `existing` rewritten under the Refresh policy
    pub refreshed: usize,
}

impl EntityTally {
    pub fn new(entity: EntityKind, policy: UpsertPolicy) -> Self {
        EntityTally {
            entity,
            policy,
            created: 0,
            existing: 0,
            refreshed: 0,
        }
    }

    pub fn record_created(&mut self) {
        self.created += 1;
    }

    pub fn record_existing(&mut self) {
        self.existing += 1;
    }

    pub fn record_refreshed(&mut self) {
        self.existing += 1;
        self.refreshed += 1;
    }

    pub fn total(&self) -> usize {
        self.created + self.existing
    }
}

// ============================================================================
// SEED CONTEXT
// ============================================================================

/// Everything a seeder may touch during a run.
///
/// `conn` is the run's transaction (through Deref), so every write a seeder
/// makes commits or rolls back together.
pub struct SeedContext<'a> {
    pub conn: &'a Connection,
    pub dataset: &'a Dataset,
    pub hasher: &'a dyn CredentialHasher,
}

impl<'a> SeedContext<'a> {
    pub fn new(conn: &'a Connection, dataset: &'a Dataset, hasher: &'a dyn CredentialHasher) -> Self {
        SeedContext {
            conn,
            dataset,
            hasher,
        }
    }

    /// Turn the result of a reference lookup into the referenced id.
    pub fn resolve<T>(
        &self,
        entity: EntityKind,
        dependency: EntityKind,
        reference: &str,
        found: Option<T>,
    ) -> Result<T> {
        found.ok_or_else(|| SeedError::MissingDependency {
            entity,
            dependency,
            reference: reference.to_string(),
        })
    }

    /// Run an INSERT for a natural key that was just found absent.
    ///
    /// A unique violation on the natural key means another writer got there
    /// first. Any other unique violation means an unrelated row already holds
    /// one of this record's values.
    pub fn insert<F>(&self, entity: EntityKind, key: &str, insert: F) -> Result<()>
    where
        F: FnOnce() -> rusqlite::Result<usize>,
    {
        match insert() {
            Ok(_) => {
                debug!(entity = %entity, key, "created");
                Ok(())
            }
            Err(err) => Err(self.write_error(entity, key, err, true)),
        }
    }

    /// Run a Refresh UPDATE against a row found by natural key.
    ///
    /// The key itself is not rewritten, so every unique violation here is a
    /// collision with some other row.
    pub fn update<F>(&self, entity: EntityKind, key: &str, update: F) -> Result<()>
    where
        F: FnOnce() -> rusqlite::Result<usize>,
    {
        match update() {
            Ok(_) => {
                debug!(entity = %entity, key, "refreshed");
                Ok(())
            }
            Err(err) => Err(self.write_error(entity, key, err, false)),
        }
    }

    fn write_error(
        &self,
        entity: EntityKind,
        key: &str,
        err: rusqlite::Error,
        inserting: bool,
    ) -> SeedError {
        if !db::is_unique_violation(&err) {
            return SeedError::Store { entity, source: err };
        }
        let constraint = db::unique_violation_target(&err).map(str::to_string);
        let on_natural_key = match &constraint {
            Some(target) => target == entity.natural_key_constraint(),
            None => true,
        };
        if inserting && on_natural_key {
            return SeedError::Conflict {
                entity,
                key: key.to_string(),
                source: err,
            };
        }
        SeedError::KeyCollision {
            entity,
            key: key.to_string(),
            constraint: constraint.unwrap_or_else(|| "a unique constraint".to_string()),
        }
    }

    /// Note in the seed ledger that `row_id` holds the canonical record `key`.
    pub fn record<T: ToSql>(&self, entity: EntityKind, key: &str, row_id: T) -> Result<()> {
        let recorded_at = self.dataset.reference_time.to_rfc3339();
        db::record_seeded(self.conn, entity, key, &row_id, &recorded_at).for_entity(entity)
    }

    /// Delete every row the ledger holds for `entity`, then forget them.
    pub fn clear_recorded(&self, entity: EntityKind) -> Result<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", entity.table());
        let mut removed = 0;
        for (key, row_id) in db::ledger_entries(self.conn, entity).for_entity(entity)? {
            removed += self.delete(entity, &key, || {
                db::delete_rows(self.conn, &sql, params![row_id])
            })?;
        }
        db::forget_entity(self.conn, entity).for_entity(entity)?;
        Ok(removed)
    }

    /// Run a DELETE for one recorded row.
    ///
    /// A foreign-key violation means rows outside the managed set still
    /// point at this one.
    pub fn delete<F>(&self, entity: EntityKind, key: &str, delete: F) -> Result<usize>
    where
        F: FnOnce() -> rusqlite::Result<usize>,
    {
        match delete() {
            Ok(removed) => {
                if removed > 0 {
                    debug!(entity = %entity, key, removed, "deleted");
                }
                Ok(removed)
            }
            Err(err) if db::is_foreign_key_violation(&err) => Err(SeedError::ClearBlocked {
                entity,
                key: key.to_string(),
            }),
            Err(source) => Err(SeedError::Store { entity, source }),
        }
    }
}

// ============================================================================
// SEEDER TRAIT
// ============================================================================

pub trait EntitySeeder {
    fn kind(&self) -> EntityKind;

    fn policy(&self) -> UpsertPolicy;

    /// Create missing canonical rows; apply the upsert policy to the rest.
    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally>;

    /// Delete the rows seeded for this kind, returning how many went.
    fn clear(&self, ctx: &SeedContext<'_>) -> Result<usize> {
        ctx.clear_recorded(self.kind())
    }
}
