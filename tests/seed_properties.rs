// End-to-end properties of a seeding run against a real store.

use campus_seed::dataset::{API_KEY_PLACEHOLDER, API_KEY_SETTING};
use campus_seed::report::{EXIT_CLEAR_FAILED, EXIT_SEED_FAILED};
use campus_seed::{
    db, seeder_for, CredentialHasher, Dataset, EntityKind, EntitySeeder, EntityTally, ErrorKind,
    Orchestrator, Phase, RunOutcome, RunReport, RunReporter, SeedContext, SeedError, SeedPlan,
    Pbkdf2Hasher, UpsertPolicy, SEED_ORDER,
};
use chrono::{TimeZone, Utc};
use rusqlite::{params, Connection};

const EXPECTED_COUNTS: [(EntityKind, i64); 13] = [
    (EntityKind::SystemSetting, 5),
    (EntityKind::User, 4),
    (EntityKind::KnowledgeCategory, 10),
    (EntityKind::KnowledgeBase, 10),
    (EntityKind::BankAccount, 3),
    (EntityKind::FinancialInformation, 7),
    (EntityKind::AcademicYear, 2),
    (EntityKind::ExamInformation, 3),
    (EntityKind::UniversityOfficial, 8),
    (EntityKind::OfficeLocation, 10),
    (EntityKind::Faq, 15),
    (EntityKind::Announcement, 7),
    (EntityKind::Discontinuation, 1),
];

fn dataset_for(base_year: i32) -> Dataset {
    let reference = Utc.with_ymd_and_hms(base_year, 10, 1, 9, 0, 0).unwrap();
    Dataset::canonical(base_year, reference).unwrap()
}

fn dataset() -> Dataset {
    dataset_for(2025)
}

fn orchestrator_for(base_year: i32) -> Orchestrator {
    Orchestrator::with_plan(
        SeedPlan::canonical().unwrap(),
        dataset_for(base_year),
        Box::new(Pbkdf2Hasher { rounds: 1 }),
    )
}

fn orchestrator() -> Orchestrator {
    orchestrator_for(2025)
}

fn store() -> Connection {
    let conn = db::open_in_memory().unwrap();
    db::setup_database(&conn).unwrap();
    conn
}

fn run(orchestrator: &Orchestrator, conn: &mut Connection) -> RunReport {
    let mut reporter = RunReporter::new(Vec::new(), false);
    orchestrator.run(conn, &mut reporter)
}

fn assert_canonical_counts(conn: &Connection) {
    for (kind, expected) in EXPECTED_COUNTS {
        assert_eq!(db::count_rows(conn, kind).unwrap(), expected, "{} count", kind);
    }
}

fn total_rows(conn: &Connection) -> i64 {
    EntityKind::ALL
        .iter()
        .map(|kind| db::count_rows(conn, *kind).unwrap())
        .sum()
}

// ============================================================================
// IDEMPOTENCE & DETERMINISM
// ============================================================================

#[test]
fn test_seeding_twice_is_idempotent() {
    let mut conn = store();
    let seeder = orchestrator();

    let first = run(&seeder, &mut conn);
    assert_eq!(first.total_created(), 85);
    let after_first = db::entity_counts(&conn, &SEED_ORDER).unwrap();

    let second = run(&seeder, &mut conn);
    assert!(second.succeeded());
    assert_eq!(second.total_created(), 0, "second run must not create anything");
    assert_eq!(db::entity_counts(&conn, &SEED_ORDER).unwrap(), after_first);
}

#[test]
fn test_clear_then_seed_reproduces_canonical_counts() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);
    run(&orchestrator(), &mut conn);

    let report = run(&orchestrator().clear(true), &mut conn);

    assert_eq!(report.outcome, RunOutcome::Committed);
    assert_eq!(report.total_cleared(), 85);
    assert_eq!(report.total_created(), 85);
    assert_canonical_counts(&conn);
}

#[test]
fn test_seeded_state_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("campus.db");

    {
        let mut conn = db::open_database(&path).unwrap();
        db::setup_database(&conn).unwrap();
        assert!(run(&orchestrator(), &mut conn).succeeded());
    }

    let mut conn = db::open_database(&path).unwrap();
    db::setup_database(&conn).unwrap();
    assert_canonical_counts(&conn);

    let again = run(&orchestrator(), &mut conn);
    assert_eq!(again.total_created(), 0);
    assert_eq!(again.total_existing(), 85);
}

#[test]
fn test_reseed_under_a_new_base_year_is_idempotent() {
    let mut conn = store();
    assert!(run(&orchestrator_for(2025), &mut conn).succeeded());

    let first = run(&orchestrator_for(2026), &mut conn);
    assert!(first.succeeded(), "{:?}", first.outcome);
    let after_first = db::entity_counts(&conn, &SEED_ORDER).unwrap();

    let second = run(&orchestrator_for(2026), &mut conn);
    assert!(second.succeeded());
    assert_eq!(second.total_created(), 0);
    assert_eq!(second.total_existing(), 85);
    assert_eq!(db::entity_counts(&conn, &SEED_ORDER).unwrap(), after_first);
}

// ============================================================================
// REFERENCES & ORDERING
// ============================================================================

#[test]
fn test_every_reference_resolves() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);

    let dangling = [
        "SELECT COUNT(*) FROM knowledge_base k
         LEFT JOIN knowledge_categories c ON c.id = k.category_id WHERE c.id IS NULL",
        "SELECT COUNT(*) FROM faqs f
         LEFT JOIN knowledge_categories c ON c.id = f.category_id WHERE c.id IS NULL",
        "SELECT COUNT(*) FROM exam_information e
         LEFT JOIN academic_years y ON y.id = e.academic_year_id WHERE y.id IS NULL",
        "SELECT COUNT(*) FROM announcements a
         LEFT JOIN users u ON u.id = a.created_by WHERE u.id IS NULL",
    ];
    for sql in dangling {
        let count: i64 = conn.query_row(sql, [], |row| row.get(0)).unwrap();
        assert_eq!(count, 0, "dangling reference: {}", sql);
    }
}

#[test]
fn test_clean_store_never_hits_missing_dependency() {
    assert!(campus_seed::validate_order(&SEED_ORDER).is_ok());

    let mut conn = store();
    let report = run(&orchestrator(), &mut conn);
    assert!(
        report.failure().map(|f| f.kind) != Some(ErrorKind::MissingDependency),
        "fresh seed failed: {:?}",
        report.outcome
    );
}

// ============================================================================
// CREDENTIALS & SECRETS
// ============================================================================

#[test]
fn test_no_password_stored_in_plaintext() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);
    let hasher = Pbkdf2Hasher { rounds: 1 };

    for identity in dataset().identities {
        let stored: String = conn
            .query_row(
                "SELECT password_hash FROM users WHERE username = ?1",
                params![identity.username],
                |row| row.get(0),
            )
            .unwrap();
        assert!(
            !stored.contains(identity.password),
            "{} has a plaintext password",
            identity.username
        );
        assert!(hasher.verify(identity.password, &stored));
    }
}

#[test]
fn test_replaced_api_key_survives_reseed() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);

    conn.execute(
        "UPDATE system_settings SET value = 'sk-live-123' WHERE key = ?1",
        params![API_KEY_SETTING],
    )
    .unwrap();
    run(&orchestrator(), &mut conn);

    let value: String = conn
        .query_row(
            "SELECT value FROM system_settings WHERE key = ?1",
            params![API_KEY_SETTING],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "sk-live-123");
    assert_ne!(value, API_KEY_PLACEHOLDER);
}

// ============================================================================
// CLEAR SCOPE
// ============================================================================

#[test]
fn test_clear_leaves_user_created_rows_alone() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);

    conn.execute(
        "INSERT INTO office_locations (name, office_type, building, description, services_offered, email, phone, opening_hours)
         VALUES ('Chess Club Room', 'club', 'Hall B', 'Chess', 'Games', 'chess@mut.ac.ke', '-', 'Evenings')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO chat_sessions (id, user_id, title, created_at) VALUES ('s-1', NULL, 'Anonymous', 'now')",
        [],
    )
    .unwrap();

    let report = run(&orchestrator().clear(true), &mut conn);
    assert!(report.succeeded(), "{:?}", report.outcome);

    assert_eq!(db::count_rows(&conn, EntityKind::OfficeLocation).unwrap(), 11);
    let chess: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM office_locations WHERE name = 'Chess Club Room'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(chess, 1);
    let sessions: i64 = conn
        .query_row("SELECT COUNT(*) FROM chat_sessions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(sessions, 1);
}

#[test]
fn test_clear_under_a_new_base_year_removes_earlier_calendar() {
    let mut conn = store();
    assert!(run(&orchestrator_for(2025), &mut conn).succeeded());

    let report = run(&orchestrator_for(2026).clear(true), &mut conn);

    assert!(report.succeeded(), "{:?}", report.outcome);
    assert_eq!(report.total_cleared(), 85);
    assert_eq!(report.total_created(), 85);
    assert_eq!(total_rows(&conn), 85);
    assert_eq!(db::count_rows(&conn, EntityKind::AcademicYear).unwrap(), 2);
    assert_eq!(db::count_rows(&conn, EntityKind::ExamInformation).unwrap(), 3);

    let stale: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM academic_years WHERE year = '2025/2026'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stale, 0);
}

#[test]
fn test_clear_after_seeding_two_base_years_removes_both() {
    let mut conn = store();
    run(&orchestrator_for(2025), &mut conn);
    run(&orchestrator_for(2026), &mut conn);
    assert_eq!(db::count_rows(&conn, EntityKind::AcademicYear).unwrap(), 3);

    let report = run(&orchestrator_for(2026).clear(true), &mut conn);

    assert!(report.succeeded(), "{:?}", report.outcome);
    assert_eq!(db::count_rows(&conn, EntityKind::AcademicYear).unwrap(), 2);
    assert_eq!(db::count_rows(&conn, EntityKind::ExamInformation).unwrap(), 3);
    assert_eq!(total_rows(&conn), 85);
}

#[test]
fn test_referenced_user_blocks_clear_and_keeps_data() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);
    conn.execute(
        "INSERT INTO chat_sessions (id, user_id, created_at)
         SELECT 's-2', id, 'now' FROM users WHERE username = 'jane.smith'",
        [],
    )
    .unwrap();

    let report = run(&orchestrator().clear(true), &mut conn);

    let failure = report.failure().expect("clear should be blocked");
    assert_eq!(failure.phase, Phase::Clear);
    assert_eq!(failure.kind, ErrorKind::ClearBlocked);
    assert_eq!(failure.entity, Some(EntityKind::User));
    assert!(failure.cause.contains("jane.smith"));
    assert!(failure.rolled_back);
    assert_eq!(report.exit_code(), EXIT_CLEAR_FAILED);

    // Announcements and FAQs were cleared before users inside the transaction
    assert_canonical_counts(&conn);
}

// ============================================================================
// ATOMICITY
// ============================================================================

struct FailingSeeder {
    kind: EntityKind,
}

impl EntitySeeder for FailingSeeder {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, _ctx: &SeedContext<'_>) -> campus_seed::Result<EntityTally> {
        Err(SeedError::Store {
            entity: self.kind,
            source: rusqlite::Error::InvalidQuery,
        })
    }
}

fn plan_failing_at(position: usize) -> SeedPlan {
    let seeders: Vec<Box<dyn EntitySeeder>> = SEED_ORDER
        .iter()
        .enumerate()
        .map(|(index, kind)| -> Box<dyn EntitySeeder> {
            if index == position {
                Box::new(FailingSeeder { kind: *kind })
            } else {
                seeder_for(*kind)
            }
        })
        .collect();
    SeedPlan::new(seeders).unwrap()
}

#[test]
fn test_failure_in_sixth_seeder_leaves_no_rows() {
    let mut conn = store();
    let seeder = Orchestrator::with_plan(
        plan_failing_at(5),
        dataset(),
        Box::new(Pbkdf2Hasher { rounds: 1 }),
    );

    let mut reporter = RunReporter::new(Vec::new(), false);
    let report = seeder.run(&mut conn, &mut reporter);

    let failure = report.failure().expect("run should fail");
    assert_eq!(failure.phase, Phase::Seed);
    assert_eq!(failure.entity, Some(SEED_ORDER[5]));
    assert!(failure.retryable);
    assert!(failure.rolled_back);
    assert_eq!(report.exit_code(), EXIT_SEED_FAILED);
    assert_eq!(report.entities.len(), 5, "five seeders ran before the fault");

    assert_eq!(total_rows(&conn), 0, "partial run must roll back");
}

#[test]
fn test_failed_reseed_keeps_previous_state() {
    let mut conn = store();
    run(&orchestrator(), &mut conn);

    let seeder = Orchestrator::with_plan(
        plan_failing_at(10),
        dataset(),
        Box::new(Pbkdf2Hasher { rounds: 1 }),
    )
    .clear(true);
    let report = run(&seeder, &mut conn);

    assert!(!report.succeeded());
    assert_canonical_counts(&conn);
}

#[test]
fn test_unrelated_row_holding_a_unique_value_fails_without_retry() {
    let mut conn = store();
    conn.execute(
        "INSERT INTO users (id, username, email, password_hash, user_type, student_id, created_at)
         VALUES ('walk-in', 'jdoe.registrar', 'jdoe@example.com', 'x', 'student', 'MUT/01/2021/001', 'now')",
        [],
    )
    .unwrap();

    let report = run(&orchestrator(), &mut conn);

    let failure = report.failure().expect("seed should fail");
    assert_eq!(failure.phase, Phase::Seed);
    assert_eq!(failure.kind, ErrorKind::KeyCollision);
    assert_eq!(failure.entity, Some(EntityKind::User));
    assert!(failure.cause.contains("users.student_id"));
    assert!(!failure.retryable);
    assert!(failure.rolled_back);
    assert_eq!(total_rows(&conn), 1);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let mut conn = store();
    let mut reporter = RunReporter::new(Vec::new(), true);
    let report = orchestrator().dry_run(true).run(&mut conn, &mut reporter);

    assert_eq!(report.outcome, RunOutcome::RolledBack);
    assert_eq!(report.total_created(), 85);
    assert_eq!(total_rows(&conn), 0);

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    assert!(output.contains("would be created"));
}
