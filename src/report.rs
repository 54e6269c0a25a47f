// 📊 Run Reporter - progress lines and the final run report
//
// Progress goes to the writer handed in by the caller (stdout for the CLI,
// a Vec<u8> in tests). Write errors on progress output are ignored; the
// RunReport is the authoritative result.

use crate::clear::{total_removed, ClearTally};
use crate::dataset::DATASET_VERSION;
use crate::entities::EntityKind;
use crate::error::{ErrorKind, SeedError};
use crate::seeder::EntityTally;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_SEED_FAILED: u8 = 1;
pub const EXIT_CLEAR_FAILED: u8 = 3;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

// ============================================================================
// REPORT TYPES
// ============================================================================

/// Stage of the run a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Option, dataset or plan validation; nothing written yet
    Prepare,
    Clear,
    Seed,
    Commit,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Prepare => "prepare",
            Phase::Clear => "clear",
            Phase::Seed => "seed",
            Phase::Commit => "commit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunFailure {
    pub phase: Phase,
    pub entity: Option<EntityKind>,
    pub kind: ErrorKind,
    pub cause: String,
    pub retryable: bool,
    pub rolled_back: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Committed,

    /// Dry run: everything succeeded and was then discarded
    RolledBack,

    Failed(RunFailure),
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub dataset_version: &'static str,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub dry_run: bool,

    /// None when no clear was requested
    pub cleared: Option<Vec<ClearTally>>,

    pub entities: Vec<EntityTally>,
    pub outcome: RunOutcome,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        !matches!(self.outcome, RunOutcome::Failed(_))
    }

    pub fn failure(&self) -> Option<&RunFailure> {
        match &self.outcome {
            RunOutcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn total_created(&self) -> usize {
        self.entities.iter().map(|t| t.created).sum()
    }

    pub fn total_existing(&self) -> usize {
        self.entities.iter().map(|t| t.existing).sum()
    }

    pub fn total_cleared(&self) -> usize {
        self.cleared.as_deref().map(total_removed).unwrap_or(0)
    }

    pub fn tally(&self, entity: EntityKind) -> Option<&EntityTally> {
        self.entities.iter().find(|t| t.entity == entity)
    }

    /// 0 on success (dry runs included), 3 when the clear pass failed,
    /// 1 for every other failure.
    pub fn exit_code(&self) -> u8 {
        match &self.outcome {
            RunOutcome::Committed | RunOutcome::RolledBack => EXIT_SUCCESS,
            RunOutcome::Failed(failure) if failure.phase == Phase::Clear => EXIT_CLEAR_FAILED,
            RunOutcome::Failed(_) => EXIT_SEED_FAILED,
        }
    }

    /// One-line summary, as printed at the end of a run.
    pub fn summary(&self) -> String {
        match &self.outcome {
            RunOutcome::Committed => format!(
                "✅ Seeding complete: {} records created, {} already present",
                self.total_created(),
                self.total_existing()
            ),
            RunOutcome::RolledBack => format!(
                "🔎 Dry run: {} records would be created, {} already present (rolled back)",
                self.total_created(),
                self.total_existing()
            ),
            RunOutcome::Failed(failure) => {
                let entity = failure
                    .entity
                    .map(|e| format!(" at {}", e))
                    .unwrap_or_default();
                format!(
                    "❌ {} failed{}: {}{}",
                    failure.phase.as_str(),
                    entity,
                    failure.cause,
                    if failure.rolled_back {
                        " (all changes rolled back)"
                    } else {
                        ""
                    }
                )
            }
        }
    }
}

// ============================================================================
// REPORTER
// ============================================================================

pub struct RunReporter<W: Write> {
    out: W,
    started_at: DateTime<Utc>,
    dry_run: bool,
    cleared: Option<Vec<ClearTally>>,
    entities: Vec<EntityTally>,
}

impl<W: Write> RunReporter<W> {
    pub fn new(out: W, dry_run: bool) -> Self {
        RunReporter {
            out,
            started_at: Utc::now(),
            dry_run,
            cleared: None,
            entities: Vec::new(),
        }
    }

    pub fn run_started(&mut self, database: &str) {
        let _ = writeln!(self.out, "🌱 Campus Seed - dataset {}", DATASET_VERSION);
        let _ = writeln!(self.out, "{}", RULE);
        let _ = writeln!(self.out, "🗄️  Database: {}", database);
        if self.dry_run {
            let _ = writeln!(self.out, "🔎 Dry run: changes will be rolled back");
        }
    }

    pub fn clear_started(&mut self) {
        self.cleared = Some(Vec::new());
        let _ = writeln!(self.out, "\n🧹 Clearing previously seeded data...");
    }

    pub fn record_cleared(&mut self, tally: &ClearTally) {
        let _ = writeln!(self.out, "✓ {}: {} removed", tally.entity, tally.removed);
        if let Some(cleared) = self.cleared.as_mut() {
            cleared.push(*tally);
        }
    }

    pub fn seed_started(&mut self) {
        let _ = writeln!(self.out, "\n💾 Seeding entities...");
    }

    pub fn record_seeded(&mut self, tally: &EntityTally) {
        let refreshed = if tally.refreshed > 0 {
            format!(", {} refreshed", tally.refreshed)
        } else {
            String::new()
        };
        let _ = writeln!(
            self.out,
            "✓ {}: {} created, {} existing{}",
            tally.entity, tally.created, tally.existing, refreshed
        );
        self.entities.push(tally.clone());
    }

    /// Finish a run whose every phase succeeded.
    pub fn succeed(&mut self) -> RunReport {
        let outcome = if self.dry_run {
            RunOutcome::RolledBack
        } else {
            RunOutcome::Committed
        };
        self.finish(outcome)
    }

    /// Finish a run that stopped on `err` during `phase`.
    pub fn fail(&mut self, phase: Phase, err: &SeedError, rolled_back: bool) -> RunReport {
        let failure = RunFailure {
            phase,
            entity: err.entity(),
            kind: err.kind(),
            cause: err.to_string(),
            retryable: err.is_retryable(),
            rolled_back,
        };
        self.finish(RunOutcome::Failed(failure))
    }

    fn finish(&mut self, outcome: RunOutcome) -> RunReport {
        let report = RunReport {
            dataset_version: DATASET_VERSION,
            started_at: self.started_at,
            finished_at: Utc::now(),
            dry_run: self.dry_run,
            cleared: self.cleared.take(),
            entities: std::mem::take(&mut self.entities),
            outcome,
        };

        let _ = writeln!(self.out, "\n{}", RULE);
        if let Some(failure) = report.failure() {
            if failure.retryable {
                let _ = writeln!(self.out, "↻ This failure is transient; re-running may succeed");
            }
        }
        let _ = writeln!(self.out, "{}", report.summary());
        let _ = self.out.flush();

        report
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeder::UpsertPolicy;

    fn tally(entity: EntityKind, created: usize, existing: usize) -> EntityTally {
        EntityTally {
            entity,
            policy: UpsertPolicy::Skip,
            created,
            existing,
            refreshed: 0,
        }
    }

    #[test]
    fn test_success_report_and_progress_lines() {
        let mut reporter = RunReporter::new(Vec::new(), false);
        reporter.seed_started();
        reporter.record_seeded(&tally(EntityKind::SystemSetting, 5, 0));
        reporter.record_seeded(&tally(EntityKind::User, 3, 1));
        let report = reporter.succeed();

        assert!(report.succeeded());
        assert_eq!(report.exit_code(), EXIT_SUCCESS);
        assert_eq!(report.total_created(), 8);
        assert_eq!(report.total_existing(), 1);
        assert!(report.cleared.is_none());

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.contains("✓ SystemSetting: 5 created, 0 existing"));
        assert!(output.contains("✓ User: 3 created, 1 existing"));
        assert!(output.contains("8 records created"));
    }

    #[test]
    fn test_clear_failure_exit_code() {
        let mut reporter = RunReporter::new(Vec::new(), false);
        reporter.clear_started();
        let err = SeedError::ClearBlocked {
            entity: EntityKind::User,
            key: "john.doe".to_string(),
        };
        let report = reporter.fail(Phase::Clear, &err, true);

        assert_eq!(report.exit_code(), EXIT_CLEAR_FAILED);
        let failure = report.failure().unwrap();
        assert_eq!(failure.entity, Some(EntityKind::User));
        assert_eq!(failure.kind, ErrorKind::ClearBlocked);
        assert!(!failure.retryable);
        assert!(failure.rolled_back);
        assert_eq!(report.cleared, Some(Vec::new()));
    }

    #[test]
    fn test_seed_failure_exit_code_and_summary() {
        let mut reporter = RunReporter::new(Vec::new(), false);
        let err = SeedError::MissingDependency {
            entity: EntityKind::Faq,
            dependency: EntityKind::KnowledgeCategory,
            reference: "Sports".to_string(),
        };
        let report = reporter.fail(Phase::Seed, &err, true);

        assert_eq!(report.exit_code(), EXIT_SEED_FAILED);
        let summary = report.summary();
        assert!(summary.contains("seed failed at FAQ"));
        assert!(summary.contains("rolled back"));
    }

    #[test]
    fn test_dry_run_outcome() {
        let mut reporter = RunReporter::new(Vec::new(), true);
        reporter.record_seeded(&tally(EntityKind::Announcement, 7, 0));
        let report = reporter.succeed();

        assert_eq!(report.outcome, RunOutcome::RolledBack);
        assert_eq!(report.exit_code(), EXIT_SUCCESS);
        assert!(report.summary().contains("would be created"));
    }

    #[test]
    fn test_report_serializes_with_status_tag() {
        let mut reporter = RunReporter::new(Vec::new(), false);
        let err = SeedError::Config("base year 1999 is outside 2000..=2100".to_string());
        let report = reporter.fail(Phase::Prepare, &err, false);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["status"], "failed");
        assert_eq!(json["outcome"]["phase"], "prepare");
        assert_eq!(json["outcome"]["kind"], "config");
        assert_eq!(json["dataset_version"], DATASET_VERSION);
    }
}
