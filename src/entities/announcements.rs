// 📣 Announcements - campus notices authored by a seeded identity

use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use rusqlite::params;
use tracing::info;

pub struct AnnouncementSeeder;

impl EntitySeeder for AnnouncementSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::Announcement
    }

    /// Skip: a reseed must not push an announcement's window forward.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for announcement in ctx.dataset.announcements {
            let found = db::find_id(
                ctx.conn,
                "SELECT id FROM users WHERE username = ?1",
                params![announcement.author],
            )
            .for_entity(kind)?;
            let author: String = ctx.resolve(kind, EntityKind::User, announcement.author, found)?;

            let existing: Option<String> = db::find_id(
                ctx.conn,
                "SELECT id FROM announcements WHERE title = ?1",
                params![announcement.title],
            )
            .for_entity(kind)?;

            if let Some(id) = existing {
                ctx.record(kind, announcement.title, &id)?;
                tally.record_existing();
                continue;
            }

            let (start, end) = announcement.window(ctx.dataset.reference_time);
            let id = uuid::Uuid::new_v4().to_string();
            ctx.insert(kind, announcement.title, || {
                ctx.conn.execute(
                    "INSERT INTO announcements (
                        id, title, content, priority, target_audience, start_date, end_date,
                        created_by, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        id,
                        announcement.title,
                        announcement.content,
                        announcement.priority,
                        announcement.target_audience,
                        start.to_rfc3339(),
                        end.to_rfc3339(),
                        author,
                        now,
                    ],
                )
            })?;
            ctx.record(kind, announcement.title, &id)?;
            tally.record_created();
        }

        info!(entity = %kind, created = tally.created, existing = tally.existing, "seeded");
        Ok(tally)
    }
}
