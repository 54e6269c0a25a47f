// 🎓 Academics - calendar, exam sittings and the discontinuation policy
//
// Dates are stored as ISO-8601 text (YYYY-MM-DD).

use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use chrono::NaiveDate;
use rusqlite::params;
use tracing::info;

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// ACADEMIC YEARS
// ============================================================================

pub struct AcademicYearSeeder;

impl EntitySeeder for AcademicYearSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::AcademicYear
    }

    /// Refresh: calendar dates and the current/upcoming status move with
    /// the base year.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Refresh
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());

        for year in &ctx.dataset.academic_years {
            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM academic_years WHERE year = ?1",
                params![year.year],
            )
            .for_entity(kind)?;

            let start = iso(year.start_date);
            let end = iso(year.end_date);
            let registration_start = iso(year.registration_start);
            let registration_end = iso(year.registration_end);
            let semester_1_start = iso(year.semester_1_start);
            let semester_1_end = iso(year.semester_1_end);
            let semester_2_start = iso(year.semester_2_start);
            let semester_2_end = iso(year.semester_2_end);

            match existing {
                Some(id) => {
                    ctx.update(kind, &year.year, || {
                        ctx.conn.execute(
                            "UPDATE academic_years
                             SET start_date = ?1, end_date = ?2, registration_start = ?3,
                                 registration_end = ?4, semester_1_start = ?5, semester_1_end = ?6,
                                 semester_2_start = ?7, semester_2_end = ?8, status = ?9, is_active = 1
                             WHERE id = ?10",
                            params![
                                start,
                                end,
                                registration_start,
                                registration_end,
                                semester_1_start,
                                semester_1_end,
                                semester_2_start,
                                semester_2_end,
                                year.status.as_str(),
                                id,
                            ],
                        )
                    })?;
                    ctx.record(kind, &year.year, id)?;
                    tally.record_refreshed();
                }
                None => {
                    ctx.insert(kind, &year.year, || {
                        ctx.conn.execute(
                            "INSERT INTO academic_years (
                                year, start_date, end_date, registration_start, registration_end,
                                semester_1_start, semester_1_end, semester_2_start, semester_2_end, status
                            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                            params![
                                year.year,
                                start,
                                end,
                                registration_start,
                                registration_end,
                                semester_1_start,
                                semester_1_end,
                                semester_2_start,
                                semester_2_end,
                                year.status.as_str(),
                            ],
                        )
                    })?;
                    ctx.record(kind, &year.year, ctx.conn.last_insert_rowid())?;
                    tally.record_created();
                }
            }
        }

        info!(entity = %kind, created = tally.created, refreshed = tally.refreshed, "seeded");
        Ok(tally)
    }
}

// ============================================================================
// EXAM INFORMATION
// ============================================================================

pub struct ExamInformationSeeder;

impl EntitySeeder for ExamInformationSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::ExamInformation
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for exam in &ctx.dataset.exams {
            let found = db::find_id(
                ctx.conn,
                "SELECT id FROM academic_years WHERE year = ?1",
                params![exam.academic_year],
            )
            .for_entity(kind)?;
            let year_id: i64 = ctx.resolve(kind, EntityKind::AcademicYear, &exam.academic_year, found)?;

            let existing: Option<String> = db::find_id(
                ctx.conn,
                "SELECT id FROM exam_information
                 WHERE academic_year_id = ?1 AND exam_type = ?2 AND semester = ?3",
                params![year_id, exam.exam_type, exam.semester],
            )
            .for_entity(kind)?;

            let key = format!("{} / {} / {}", exam.academic_year, exam.exam_type, exam.semester);
            if let Some(id) = existing {
                ctx.record(kind, &key, &id)?;
                tally.record_existing();
                continue;
            }

            let id = uuid::Uuid::new_v4().to_string();
            ctx.insert(kind, &key, || {
                ctx.conn.execute(
                    "INSERT INTO exam_information (
                        id, academic_year_id, exam_type, semester, title, description,
                        application_start_date, application_deadline, exam_start_date, exam_end_date,
                        application_fee, requirements, application_process, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                    params![
                        id,
                        year_id,
                        exam.exam_type,
                        exam.semester,
                        exam.title,
                        exam.description,
                        exam.application_start_date.map(iso),
                        exam.application_deadline.map(iso),
                        iso(exam.exam_start_date),
                        iso(exam.exam_end_date),
                        exam.application_fee,
                        exam.requirements,
                        exam.application_process,
                        now,
                    ],
                )
            })?;
            ctx.record(kind, &key, &id)?;
            tally.record_created();
        }

        info!(entity = %kind, created = tally.created, existing = tally.existing, "seeded");
        Ok(tally)
    }
}

// ============================================================================
// DISCONTINUATION
// ============================================================================

pub struct DiscontinuationSeeder;

impl EntitySeeder for DiscontinuationSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::Discontinuation
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Refresh
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for policy in ctx.dataset.discontinuations {
            let existing: Option<String> = db::find_id(
                ctx.conn,
                "SELECT id FROM discontinuations WHERE policy_id = ?1",
                params![policy.policy_id],
            )
            .for_entity(kind)?;

            match existing {
                Some(id) => {
                    ctx.update(kind, policy.policy_id, || {
                        ctx.conn.execute(
                            "UPDATE discontinuations
                             SET title = ?1, reason_types = ?2, process_steps = ?3,
                                 required_documents = ?4, contact_office = ?5, contact_email = ?6,
                                 contact_phone = ?7, fees_refund_policy = ?8, timeline = ?9,
                                 important_notes = ?10, is_active = 1, updated_at = ?11
                             WHERE id = ?12",
                            params![
                                policy.title,
                                policy.reason_types,
                                policy.process_steps,
                                policy.required_documents,
                                policy.contact_office,
                                policy.contact_email,
                                policy.contact_phone,
                                policy.fees_refund_policy,
                                policy.timeline,
                                policy.important_notes,
                                now,
                                id,
                            ],
                        )
                    })?;
                    ctx.record(kind, policy.policy_id, &id)?;
                    tally.record_refreshed();
                }
                None => {
                    let id = uuid::Uuid::new_v4().to_string();
                    ctx.insert(kind, policy.policy_id, || {
                        ctx.conn.execute(
                            "INSERT INTO discontinuations (
                                id, policy_id, title, reason_types, process_steps, required_documents,
                                contact_office, contact_email, contact_phone, fees_refund_policy,
                                timeline, important_notes, updated_at
                            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                            params![
                                id,
                                policy.policy_id,
                                policy.title,
                                policy.reason_types,
                                policy.process_steps,
                                policy.required_documents,
                                policy.contact_office,
                                policy.contact_email,
                                policy.contact_phone,
                                policy.fees_refund_policy,
                                policy.timeline,
                                policy.important_notes,
                                now,
                            ],
                        )
                    })?;
                    ctx.record(kind, policy.policy_id, &id)?;
                    tally.record_created();
                }
            }
        }

        info!(entity = %kind, created = tally.created, refreshed = tally.refreshed, "seeded");
        Ok(tally)
    }
}
