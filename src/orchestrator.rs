// 🎬 Orchestrator - one run, one transaction
//
// validate dataset → BEGIN IMMEDIATE → (clear) → seed in plan order →
// COMMIT, or ROLLBACK on the first error or at the end of a dry run.

use crate::clear::clear_managed;
use crate::config::SeedOptions;
use crate::credentials::{CredentialHasher, Pbkdf2Hasher};
use crate::dataset::Dataset;
use crate::error::{Result, SeedError};
use crate::report::{Phase, RunReport, RunReporter};
use crate::seeder::SeedContext;
use crate::sequencer::SeedPlan;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::io::Write;
use tracing::{error, info, info_span, warn};

pub struct Orchestrator {
    plan: SeedPlan,
    dataset: Dataset,
    hasher: Box<dyn CredentialHasher>,
    clear: bool,
    dry_run: bool,
}

impl Orchestrator {
    /// Canonical plan and dataset for the given options.
    pub fn new(options: &SeedOptions) -> Result<Self> {
        options.validate()?;
        Ok(Orchestrator {
            plan: SeedPlan::canonical()?,
            dataset: Dataset::from_options(options)?,
            hasher: Box::new(Pbkdf2Hasher::new()),
            clear: options.clear,
            dry_run: options.dry_run,
        })
    }

    /// Custom plan, used to inject failing seeders and cheap hashers in tests.
    pub fn with_plan(plan: SeedPlan, dataset: Dataset, hasher: Box<dyn CredentialHasher>) -> Self {
        Orchestrator {
            plan,
            dataset,
            hasher,
            clear: false,
            dry_run: false,
        }
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn plan(&self) -> &SeedPlan {
        &self.plan
    }

    /// Execute the run against `conn` and report through `reporter`.
    ///
    /// Never returns early with a Result: every failure ends up in the
    /// report's outcome, after the transaction has been rolled back.
    pub fn run<W: Write>(&self, conn: &mut Connection, reporter: &mut RunReporter<W>) -> RunReport {
        let span = info_span!("seed_run", clear = self.clear, dry_run = self.dry_run);
        let _enter = span.enter();

        if let Err(err) = self.dataset.validate() {
            error!(error = %err, "canonical dataset rejected");
            return reporter.fail(Phase::Prepare, &err, false);
        }

        let tx = match conn.transaction_with_behavior(TransactionBehavior::Immediate) {
            Ok(tx) => tx,
            Err(source) => {
                let err = SeedError::Transaction(source);
                error!(error = %err, "could not begin transaction");
                return reporter.fail(Phase::Prepare, &err, false);
            }
        };

        match self.apply(&tx, reporter) {
            Ok(()) if self.dry_run => {
                let rolled_back = roll_back(tx);
                info!(rolled_back, "dry run finished");
                reporter.succeed()
            }
            Ok(()) => match tx.commit() {
                Ok(()) => {
                    info!(records = self.dataset.total_records(), "committed");
                    reporter.succeed()
                }
                Err(source) => {
                    let err = SeedError::Transaction(source);
                    error!(error = %err, "commit failed");
                    reporter.fail(Phase::Commit, &err, true)
                }
            },
            Err((phase, err)) => {
                error!(phase = phase.as_str(), error = %err, "run aborted");
                let rolled_back = roll_back(tx);
                reporter.fail(phase, &err, rolled_back)
            }
        }
    }

    fn apply<W: Write>(
        &self,
        conn: &Connection,
        reporter: &mut RunReporter<W>,
    ) -> std::result::Result<(), (Phase, SeedError)> {
        let ctx = SeedContext::new(conn, &self.dataset, self.hasher.as_ref());

        if self.clear {
            reporter.clear_started();
            clear_managed(&self.plan, &ctx, |tally| reporter.record_cleared(tally))
                .map_err(|err| (Phase::Clear, err))?;
        }

        reporter.seed_started();
        for seeder in self.plan.seeders() {
            let tally = seeder.seed(&ctx).map_err(|err| (Phase::Seed, err))?;
            reporter.record_seeded(&tally);
        }

        Ok(())
    }
}

fn roll_back(tx: Transaction<'_>) -> bool {
    match tx.rollback() {
        Ok(()) => true,
        Err(err) => {
            // Dropping the handle still rolls back; report what we know
            warn!(error = %err, "explicit rollback failed");
            false
        }
    }
}
