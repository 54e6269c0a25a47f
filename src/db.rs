use crate::entities::EntityKind;
use rusqlite::types::{FromSql, ToSql, Value};
use rusqlite::{ffi, params, Connection, OptionalExtension, Params};
use std::path::Path;

/// Open (or create) the store at `path` with foreign keys enforced.
pub fn open_database(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    // WAL for crash recovery, same as every file-backed store we ship
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
}

/// In-memory store with the same pragmas, used by tests and dry experiments.
pub fn open_in_memory() -> rusqlite::Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
}

pub fn setup_database(conn: &Connection) -> rusqlite::Result<()> {
    // ==========================================================================
    // Configuration & identities
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS system_settings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            key TEXT UNIQUE NOT NULL,
            value TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT UNIQUE NOT NULL,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            user_type TEXT NOT NULL,
            is_staff INTEGER NOT NULL DEFAULT 0,
            is_superuser INTEGER NOT NULL DEFAULT 0,
            student_id TEXT UNIQUE,
            department TEXT,
            year_of_study INTEGER,
            phone_number TEXT,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // ==========================================================================
    // Knowledge
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS knowledge_categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            slug TEXT UNIQUE NOT NULL,
            icon TEXT NOT NULL DEFAULT '',
            display_order INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS knowledge_base (
            id TEXT PRIMARY KEY,
            category_id INTEGER NOT NULL REFERENCES knowledge_categories(id),
            title TEXT NOT NULL,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            keywords TEXT NOT NULL,
            priority INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            UNIQUE (category_id, title)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS faqs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id INTEGER NOT NULL REFERENCES knowledge_categories(id),
            question TEXT UNIQUE NOT NULL,
            answer TEXT NOT NULL,
            display_order INTEGER NOT NULL DEFAULT 0,
            is_featured INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // ==========================================================================
    // Finance
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS bank_accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            account_type TEXT NOT NULL,
            bank_name TEXT NOT NULL,
            account_name TEXT NOT NULL,
            account_number TEXT UNIQUE NOT NULL,
            branch TEXT NOT NULL DEFAULT '',
            swift_code TEXT NOT NULL DEFAULT '',
            paybill_number TEXT NOT NULL DEFAULT '',
            account_reference TEXT NOT NULL DEFAULT '',
            notes TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS financial_information (
            id TEXT PRIMARY KEY,
            payment_type TEXT NOT NULL,
            program TEXT NOT NULL,
            year_of_study INTEGER,
            amount REAL NOT NULL,
            currency TEXT NOT NULL DEFAULT 'KES',
            description TEXT NOT NULL,
            academic_year TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // NULL year_of_study means "all years"; fold it so the index still bites
    conn.execute(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_financial_natural_key
         ON financial_information(program, payment_type, IFNULL(year_of_study, 0))",
        [],
    )?;

    // ==========================================================================
    // Academics
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS academic_years (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year TEXT UNIQUE NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            status TEXT NOT NULL,
            registration_start TEXT NOT NULL,
            registration_end TEXT NOT NULL,
            semester_1_start TEXT NOT NULL,
            semester_1_end TEXT NOT NULL,
            semester_2_start TEXT NOT NULL,
            semester_2_end TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS exam_information (
            id TEXT PRIMARY KEY,
            academic_year_id INTEGER NOT NULL REFERENCES academic_years(id),
            exam_type TEXT NOT NULL,
            semester TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            application_start_date TEXT,
            application_deadline TEXT,
            exam_start_date TEXT,
            exam_end_date TEXT,
            application_fee REAL,
            requirements TEXT NOT NULL,
            application_process TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            UNIQUE (academic_year_id, exam_type, semester)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS discontinuations (
            id TEXT PRIMARY KEY,
            policy_id TEXT UNIQUE NOT NULL,
            title TEXT NOT NULL,
            reason_types TEXT NOT NULL,
            process_steps TEXT NOT NULL,
            required_documents TEXT NOT NULL,
            contact_office TEXT NOT NULL,
            contact_email TEXT NOT NULL,
            contact_phone TEXT NOT NULL,
            fees_refund_policy TEXT NOT NULL,
            timeline TEXT NOT NULL,
            important_notes TEXT NOT NULL DEFAULT '',
            is_active INTEGER NOT NULL DEFAULT 1,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    // ==========================================================================
    // Directory
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS university_officials (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            position TEXT NOT NULL,
            position_title TEXT NOT NULL,
            full_name TEXT NOT NULL,
            department TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            office_location TEXT NOT NULL DEFAULT '',
            bio TEXT NOT NULL DEFAULT '',
            display_order INTEGER NOT NULL DEFAULT 0,
            is_active INTEGER NOT NULL DEFAULT 1,
            UNIQUE (position_title, full_name)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS office_locations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT UNIQUE NOT NULL,
            office_type TEXT NOT NULL,
            building TEXT NOT NULL,
            floor TEXT NOT NULL DEFAULT '',
            room_number TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            services_offered TEXT NOT NULL,
            contact_person TEXT NOT NULL DEFAULT '',
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            opening_hours TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS announcements (
            id TEXT PRIMARY KEY,
            title TEXT UNIQUE NOT NULL,
            content TEXT NOT NULL,
            priority TEXT NOT NULL DEFAULT 'medium',
            target_audience TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_by TEXT REFERENCES users(id),
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // ==========================================================================
    // End-user data (never written by the seeder)
    // ==========================================================================
    conn.execute(
        "CREATE TABLE IF NOT EXISTS chat_sessions (
            id TEXT PRIMARY KEY,
            user_id TEXT REFERENCES users(id),
            title TEXT NOT NULL DEFAULT 'New Chat',
            created_at TEXT NOT NULL
        )",
        [],
    )?;

    // ==========================================================================
    // Seed ledger: which managed rows this tool created or adopted
    // ==========================================================================
    // row_id has no declared type so INTEGER and TEXT ids keep their storage
    // class and compare equal to the table's id column.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS seed_ledger (
            entity TEXT NOT NULL,
            natural_key TEXT NOT NULL,
            row_id NOT NULL,
            recorded_at TEXT NOT NULL,
            PRIMARY KEY (entity, natural_key)
        )",
        [],
    )?;

    Ok(())
}

// ============================================================================
// NATURAL-KEY PRIMITIVES
// ============================================================================

/// Fetch the id of the row matched by a natural-key query, if any.
pub fn find_id<T, P>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<Option<T>>
where
    T: FromSql,
    P: Params,
{
    conn.query_row(sql, params, |row| row.get(0)).optional()
}

/// Run a DELETE, returning how many rows went.
pub fn delete_rows<P: Params>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<usize> {
    conn.execute(sql, params)
}

/// Row count of an entity's table (seeded and user-created rows alike).
pub fn count_rows(conn: &Connection, kind: EntityKind) -> rusqlite::Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
    conn.query_row(&sql, [], |row| row.get(0))
}

/// Row counts for every managed kind, in the given order.
pub fn entity_counts(
    conn: &Connection,
    order: &[EntityKind],
) -> rusqlite::Result<Vec<(EntityKind, i64)>> {
    order
        .iter()
        .map(|kind| Ok((*kind, count_rows(conn, *kind)?)))
        .collect()
}

// ============================================================================
// SEED LEDGER
// ============================================================================

/// Remember that `row_id` in `kind`'s table holds the canonical record `key`.
pub fn record_seeded(
    conn: &Connection,
    kind: EntityKind,
    key: &str,
    row_id: &dyn ToSql,
    recorded_at: &str,
) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO seed_ledger (entity, natural_key, row_id, recorded_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (entity, natural_key)
         DO UPDATE SET row_id = excluded.row_id, recorded_at = excluded.recorded_at",
        params![kind.as_str(), key, row_id, recorded_at],
    )?;
    Ok(())
}

/// Every (natural key, row id) recorded for `kind`, oldest first.
pub fn ledger_entries(conn: &Connection, kind: EntityKind) -> rusqlite::Result<Vec<(String, Value)>> {
    let mut stmt = conn.prepare(
        "SELECT natural_key, row_id FROM seed_ledger WHERE entity = ?1 ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![kind.as_str()], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let entries = rows.collect::<rusqlite::Result<Vec<(String, Value)>>>()?;
    Ok(entries)
}

pub fn forget_entity(conn: &Connection, kind: EntityKind) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM seed_ledger WHERE entity = ?1", params![kind.as_str()])
}

pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
        }
        _ => false,
    }
}

/// Constraint named by a UNIQUE failure, e.g. "users.student_id" or
/// "index 'idx_financial_natural_key'".
pub fn unique_violation_target(err: &rusqlite::Error) -> Option<&str> {
    match err {
        rusqlite::Error::SqliteFailure(_, Some(message)) if is_unique_violation(err) => message
            .strip_prefix("UNIQUE constraint failed: ")
            .map(str::trim),
        _ => None,
    }
}

pub fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.extended_code == ffi::SQLITE_CONSTRAINT_FOREIGNKEY
        }
        _ => false,
    }
}
