// 📖 Knowledge - categories, articles and FAQs
//
// Articles and FAQs both hang off a category. The category is looked up by
// name every time, never carried over from a previous seeder's state.

use crate::db;
use crate::entities::EntityKind;
use crate::error::{Result, StoreResultExt};
use crate::seeder::{EntitySeeder, EntityTally, SeedContext, UpsertPolicy};
use rusqlite::params;
use tracing::info;

fn category_id(ctx: &SeedContext<'_>, entity: EntityKind, name: &str) -> Result<i64> {
    let found = db::find_id(
        ctx.conn,
        "SELECT id FROM knowledge_categories WHERE name = ?1",
        params![name],
    )
    .for_entity(entity)?;
    ctx.resolve(entity, EntityKind::KnowledgeCategory, name, found)
}

// ============================================================================
// CATEGORIES
// ============================================================================

pub struct KnowledgeCategorySeeder;

impl EntitySeeder for KnowledgeCategorySeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::KnowledgeCategory
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Refresh
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());

        for category in ctx.dataset.categories {
            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM knowledge_categories WHERE name = ?1",
                params![category.name],
            )
            .for_entity(kind)?;

            match existing {
                Some(id) => {
                    ctx.update(kind, category.name, || {
                        ctx.conn.execute(
                            "UPDATE knowledge_categories
                             SET slug = ?1, icon = ?2, display_order = ?3, is_active = 1
                             WHERE id = ?4",
                            params![category.slug, category.icon, category.display_order, id],
                        )
                    })?;
                    ctx.record(kind, category.name, id)?;
                    tally.record_refreshed();
                }
                None => {
                    ctx.insert(kind, category.name, || {
                        ctx.conn.execute(
                            "INSERT INTO knowledge_categories (name, slug, icon, display_order)
                             VALUES (?1, ?2, ?3, ?4)",
                            params![category.name, category.slug, category.icon, category.display_order],
                        )
                    })?;
                    ctx.record(kind, category.name, ctx.conn.last_insert_rowid())?;
                    tally.record_created();
                }
            }
        }

        info!(entity = %kind, created = tally.created, refreshed = tally.refreshed, "seeded");
        Ok(tally)
    }
}

// ============================================================================
// KNOWLEDGE BASE
// ============================================================================

pub struct KnowledgeBaseSeeder;

impl EntitySeeder for KnowledgeBaseSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::KnowledgeBase
    }

    /// Skip: articles are edited by staff after the first seed.
    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for entry in ctx.dataset.knowledge_entries {
            let category = category_id(ctx, kind, entry.category)?;

            let existing: Option<String> = db::find_id(
                ctx.conn,
                "SELECT id FROM knowledge_base WHERE category_id = ?1 AND title = ?2",
                params![category, entry.title],
            )
            .for_entity(kind)?;

            let key = format!("{} / {}", entry.category, entry.title);
            if let Some(id) = existing {
                ctx.record(kind, &key, &id)?;
                tally.record_existing();
                continue;
            }

            let id = uuid::Uuid::new_v4().to_string();
            ctx.insert(kind, &key, || {
                ctx.conn.execute(
                    "INSERT INTO knowledge_base
                        (id, category_id, title, question, answer, keywords, priority, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                    params![
                        id,
                        category,
                        entry.title,
                        entry.question,
                        entry.answer,
                        entry.keywords,
                        entry.priority,
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
// FAQS
// ============================================================================

pub struct FaqSeeder;

impl EntitySeeder for FaqSeeder {
    fn kind(&self) -> EntityKind {
        EntityKind::Faq
    }

    fn policy(&self) -> UpsertPolicy {
        UpsertPolicy::Skip
    }

    fn seed(&self, ctx: &SeedContext<'_>) -> Result<EntityTally> {
        let kind = self.kind();
        let mut tally = EntityTally::new(kind, self.policy());
        let now = ctx.dataset.reference_time.to_rfc3339();

        for faq in ctx.dataset.faqs {
            let category = category_id(ctx, kind, faq.category)?;

            let existing: Option<i64> = db::find_id(
                ctx.conn,
                "SELECT id FROM faqs WHERE question = ?1",
                params![faq.question],
            )
            .for_entity(kind)?;

            if let Some(id) = existing {
                ctx.record(kind, faq.question, id)?;
                tally.record_existing();
                continue;
            }

            ctx.insert(kind, faq.question, || {
                ctx.conn.execute(
                    "INSERT INTO faqs (category_id, question, answer, display_order, is_featured, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![category, faq.question, faq.answer, faq.display_order, faq.is_featured, now],
                )
            })?;
            ctx.record(kind, faq.question, ctx.conn.last_insert_rowid())?;
            tally.record_created();
        }

        info!(entity = %kind, created = tally.created, existing = tally.existing, "seeded");
        Ok(tally)
    }
}
