// 💰 Finance - payment accounts and fee schedule

use crate::dataset::fee_key;
use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use rusqlite::params;
use tracing::info;

pub struct BankAccountSeeder;

impl EntitySeeder for BankAccountSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::BankAccount
    }

    /// Refresh: payment instructions must match the published accounts.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Refresh
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());

        for account in ctx.dataset.bank_accounts {
            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM bank_accounts WHERE account_number = ?1",
                params![account.account_number],
            )
            .for_entity(kind)?;

            match existing {
                Some(id) => {
                    ctx.update(kind, account.account_number, || {
                        ctx.conn.execute(
                            "UPDATE bank_accounts
                             SET account_type = ?1, bank_name = ?2, account_name = ?3, branch = ?4,
                                 swift_code = ?5, paybill_number = ?6, account_reference = ?7,
                                 notes = ?8, is_active = 1
                             WHERE id = ?9",
                            params![
                                account.account_type,
                                account.bank_name,
                                account.account_name,
                                account.branch,
                                account.swift_code,
                                account.paybill_number,
                                account.account_reference,
                                account.notes,
                                id,
                            ],
                        )
                    })?;
                    ctx.record(kind, account.account_number, id)?;
                    tally.record_refreshed();
                }
                None => {
                    ctx.insert(kind, account.account_number, || {
                        ctx.conn.execute(
                            "INSERT INTO bank_accounts (
                                account_type, bank_name, account_name, account_number, branch,
                                swift_code, paybill_number, account_reference, notes
                            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                            params![
                                account.account_type,
                                account.bank_name,
                                account.account_name,
                                account.account_number,
                                account.branch,
                                account.swift_code,
                                account.paybill_number,
                                account.account_reference,
                                account.notes,
                            ],
                        )
                    })?;
                    ctx.record(kind, account.account_number, ctx.conn.last_insert_rowid())?;
                    tally.record_created();
                }
            }
        }

        info!(entity = %kind, created = tally.created, refreshed = tally.refreshed, "seeded");
        Ok(tally)
    }
}

pub struct FinancialInformationSeeder;

impl EntitySeeder for FinancialInformationSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::FinancialInformation
    }

    /// Skip: the finance office adjusts amounts between seeds.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for fee in ctx.dataset.fees {
            // IS so that a NULL year matches the "all years" row
            let existing: Option<String> = db::find_id(
                ctx.conn,
                "SELECT id FROM financial_information
                 WHERE program = ?1 AND payment_type = ?2 AND year_of_study IS ?3",
                params![fee.program, fee.payment_type, fee.year_of_study],
            )
            .for_entity(kind)?;

            let key = fee_key(fee);
            if let Some(id) = existing {
                ctx.record(kind, &key, &id)?;
                tally.record_existing();
                continue;
            }

            let id = uuid::Uuid::new_v4().to_string();
            ctx.insert(kind, &key, || {
                ctx.conn.execute(
                    "INSERT INTO financial_information (
                        id, payment_type, program, year_of_study, amount, currency,
                        description, academic_year, created_at
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        id,
                        fee.payment_type,
                        fee.program,
                        fee.year_of_study,
                        fee.amount,
                        fee.currency,
                        fee.description,
                        fee.academic_year,
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
