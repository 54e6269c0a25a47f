// ⚙️ System settings - key/value configuration records
//
// The API key setting is an ordinary row with a well-known key. It is seeded
// with a placeholder that an administrator replaces by hand.

use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use rusqlite::params;
use tracing::info;

pub struct SystemSettingSeeder;

impl EntitySeeder for SystemSettingSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::SystemSetting
    }

    /// Skip: re-running must never put the API key placeholder back over a
    /// real key.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for setting in ctx.dataset.settings {
            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM system_settings WHERE key = ?1",
                params![setting.key],
            )
            .for_entity(kind)?;

            if let Some(id) = existing {
                ctx.record(kind, setting.key, id)?;
                tally.record_existing();
                continue;
            }

            ctx.insert(kind, setting.key, || {
                ctx.conn.execute(
                    "INSERT INTO system_settings (key, value, description, updated_at)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![setting.key, setting.value, setting.description, now],
                )
            })?;
            ctx.record(kind, setting.key, ctx.conn.last_insert_rowid())?;
            tally.record_created();
        }

        info!(entity = %kind, created = tally.created, existing = tally.existing, "seeded");
        Ok(tally)
    }
}
