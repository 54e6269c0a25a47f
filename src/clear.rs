// 🧹 Clear Engine - remove previously seeded rows
//
// Deletes the rows the seed ledger holds, walking the plan backwards so that
// referencing kinds go before the kinds they reference. Rows no run ever
// seeded or adopted are never touched.

use crate::entities::EntityKind;
use crate::error::Result;
use crate::seeder::SeedContext;
use crate::sequencer::SeedPlan;
use serde::Serialize;
use tracing::{info, warn};

/// Rows removed for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClearTally {
    pub entity: EntityKind,
    pub removed: usize,
}

/// Run the clear pass, calling `on_cleared` after each kind finishes.
///
/// Stops at the first failure; the caller's transaction decides what
/// happens to the kinds already cleared.
pub fn clear_managed<F>(
    plan: &SeedPlan,
    ctx: &SeedContext<'_>,
    mut on_cleared: F,
) -> Result<Vec<ClearTally>>
where
    F: FnMut(&ClearTally),
{
    let mut tallies = Vec::with_capacity(plan.len());

    for seeder in plan.clear_sequence() {
        let entity = seeder.kind();
        let removed = seeder.clear(ctx).map_err(|err| {
            warn!(entity = %entity, error = %err, "clear failed");
            err
        })?;

        let tally = ClearTally { entity, removed };
        info!(entity = %entity, removed, "cleared");
        on_cleared(&tally);
        tallies.push(tally);
    }

    Ok(tallies)
}

pub fn total_removed(tallies: &[ClearTally]) -> usize {
    tallies.iter().map(|t| t.removed).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Pbkdf2Hasher;
    use crate::dataset::Dataset;
    use crate::db;
    use crate::error::SeedError;
    use chrono::Utc;

    fn seeded() -> (rusqlite::Connection, Dataset, SeedPlan) {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let plan = SeedPlan::canonical().unwrap();
        {
            let hasher = Pbkdf2Hasher { rounds: 1 };
            let ctx = SeedContext::new(&conn, &data, &hasher);
            for seeder in plan.seeders() {
                seeder.seed(&ctx).unwrap();
            }
        }
        (conn, data, plan)
    }

    #[test]
    fn test_clear_walks_reverse_order_and_empties_tables() {
        let (conn, data, plan) = seeded();
        let hasher = Pbkdf2Hasher { rounds: 1 };
        let ctx = SeedContext::new(&conn, &data, &hasher);

        let mut visited = Vec::new();
        let tallies = clear_managed(&plan, &ctx, |t| visited.push(t.entity)).unwrap();

        assert_eq!(visited.first(), Some(&EntityKind::Announcement));
        assert_eq!(visited.last(), Some(&EntityKind::SystemSetting));
        assert_eq!(total_removed(&tallies), 85);
        for kind in EntityKind::ALL {
            assert_eq!(db::count_rows(&conn, kind).unwrap(), 0, "{} not cleared", kind);
        }
    }

    #[test]
    fn test_clear_on_empty_store_removes_nothing() {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let plan = SeedPlan::canonical().unwrap();
        let hasher = Pbkdf2Hasher::new();
        let ctx = SeedContext::new(&conn, &data, &hasher);

        let tallies = clear_managed(&plan, &ctx, |_| {}).unwrap();
        assert_eq!(tallies.len(), 13);
        assert_eq!(total_removed(&tallies), 0);
    }

    #[test]
    fn test_referenced_user_blocks_clear() {
        let (conn, data, plan) = seeded();
        conn.execute(
            "INSERT INTO chat_sessions (id, user_id, created_at)
             SELECT 'session-1', id, 'now' FROM users WHERE username = 'john.doe'",
            [],
        )
        .unwrap();

        let hasher = Pbkdf2Hasher { rounds: 1 };
        let ctx = SeedContext::new(&conn, &data, &hasher);
        match clear_managed(&plan, &ctx, |_| {}) {
            Err(SeedError::ClearBlocked { entity, key }) => {
                assert_eq!(entity, EntityKind::User);
                assert_eq!(key, "john.doe");
            }
            other => panic!("expected ClearBlocked, got {:?}", other),
        }
    }
}
