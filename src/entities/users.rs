// 👤 Users - the admin, student and staff test identities
//
// Passwords are hashed through the run's CredentialHasher; the plaintext in
// the dataset never reaches the store.

use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use rusqlite::params;
use tracing::info;

pub struct UserSeeder;

impl EntitySeeder for UserSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::User
    }

    /// Skip: an existing account keeps its password and profile.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for identity in ctx.dataset.identities {
            let existing: Option<String> = db::find_id(
                ctx.conn,
                "SELECT id FROM users WHERE username = ?1",
                params![identity.username],
            )
            .for_entity(kind)?;

            if let Some(id) = existing {
                ctx.record(kind, identity.username, &id)?;
                tally.record_existing();
                continue;
            }

            let id = uuid::Uuid::new_v4().to_string();
            let password_hash = ctx.hasher.hash(identity.password);

            ctx.insert(kind, identity.username, || {
                ctx.conn.execute(
                    "INSERT INTO users (
                        id, username, email, password_hash, user_type, is_staff, is_superuser,
                        student_id, department, year_of_study, phone_number, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                    params![
                        id,
                        identity.username,
                        identity.email,
                        password_hash,
                        identity.user_type.as_str(),
                        identity.is_staff,
                        identity.is_superuser,
                        identity.student_id,
                        identity.department,
                        identity.year_of_study,
                        identity.phone_number,
                        now,
                    ],
                )
            })?;
            ctx.record(kind, identity.username, &id)?;
            tally.record_created();
        }

        info!(entity = %kind, created = tally.created, existing = tally.existing, "seeded");
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialHasher, Pbkdf2Hasher};
    use crate::dataset::Dataset;
    use crate::error::SeedError;
    use chrono::Utc;

    #[test]
    fn test_passwords_are_stored_hashed() {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let hasher = Pbkdf2Hasher { rounds: 5 };
        let ctx = SeedContext::new(&conn, &data, &hasher);

        let tally = UserSeeder.seed(&ctx).unwrap();
        assert_eq!(tally.created, 4);

        for identity in data.identities {
            let stored: String = conn
                .query_row(
                    "SELECT password_hash FROM users WHERE username = ?1",
                    params![identity.username],
                    |row| row.get(0),
                )
                .unwrap();
            assert!(!stored.contains(identity.password));
            assert!(hasher.verify(identity.password, &stored));
        }
    }

    #[test]
    fn test_admin_flags_and_student_profile() {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let hasher = Pbkdf2Hasher { rounds: 1 };
        let ctx = SeedContext::new(&conn, &data, &hasher);
        UserSeeder.seed(&ctx).unwrap();

        let (is_staff, is_superuser): (bool, bool) = conn
            .query_row(
                "SELECT is_staff, is_superuser FROM users WHERE username = 'admin'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert!(is_staff && is_superuser);

        let (student_id, year): (Option<String>, Option<i64>) = conn
            .query_row(
                "SELECT student_id, year_of_study FROM users WHERE username = 'john.doe'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(student_id.as_deref(), Some("MUT/01/2021/001"));
        assert_eq!(year, Some(3));
    }

    #[test]
    fn test_existing_user_keeps_password() {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let hasher = Pbkdf2Hasher { rounds: 1 };
        let ctx = SeedContext::new(&conn, &data, &hasher);

        UserSeeder.seed(&ctx).unwrap();
        let before: String = conn
            .query_row("SELECT password_hash FROM users WHERE username = 'admin'", [], |row| row.get(0))
            .unwrap();

        let second = UserSeeder.seed(&ctx).unwrap();
        let after: String = conn
            .query_row("SELECT password_hash FROM users WHERE username = 'admin'", [], |row| row.get(0))
            .unwrap();

        assert_eq!(second.existing, 4);
        assert_eq!(before, after);
    }

    #[test]
    fn test_student_id_held_by_another_account_is_a_collision() {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        conn.execute(
            "INSERT INTO users (id, username, email, password_hash, user_type, student_id, created_at)
             VALUES ('walk-in', 'jdoe.registrar', 'jdoe@example.com', 'x', 'student', 'MUT/01/2021/001', 'now')",
            [],
        )
        .unwrap();

        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let hasher = Pbkdf2Hasher { rounds: 1 };
        let ctx = SeedContext::new(&conn, &data, &hasher);

        let err = UserSeeder.seed(&ctx).unwrap_err();
        match &err {
            SeedError::KeyCollision { entity, key, constraint } => {
                assert_eq!(*entity, EntityKind::User);
                assert_eq!(key, "john.doe");
                assert_eq!(constraint, "users.student_id");
            }
            other => panic!("expected KeyCollision, got {:?}", other),
        }
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_seeded_and_adopted_accounts_are_recorded() {
        let conn = db::open_in_memory().unwrap();
        db::setup_database(&conn).unwrap();
        let data = Dataset::canonical(2025, Utc::now()).unwrap();
        let hasher = Pbkdf2Hasher { rounds: 1 };
        let ctx = SeedContext::new(&conn, &data, &hasher);

        UserSeeder.seed(&ctx).unwrap();
        UserSeeder.seed(&ctx).unwrap();

        let recorded = db::ledger_entries(&conn, EntityKind::User).unwrap();
        assert_eq!(recorded.len(), 4);
        assert_eq!(UserSeeder.clear(&ctx).unwrap(), 4);
        assert_eq!(db::count_rows(&conn, EntityKind::User).unwrap(), 0);
    }
}
