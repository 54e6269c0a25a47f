// Entity Seeders - one seeder per managed entity kind
//
// Each seeder owns:
// - A natural key used for idempotent lookups
// - An explicit upsert policy (Skip or Refresh) for rows that already exist
// - A delete-by-natural-key rule used by the clear engine
//
// Foreign references are resolved by natural key at seed time, never by
// remembering ids from an earlier seeder in the same process.

pub mod academics;
pub mod announcements;
pub mod directory;
pub mod finance;
pub mod knowledge;
pub mod settings;
pub mod users;

pub use academics::{AcademicYearSeeder, DiscontinuationSeeder, ExamInformationSeeder};
pub use announcements::AnnouncementSeeder;
pub use directory::{OfficeLocationSeeder, UniversityOfficialSeeder};
pub use finance::{BankAccountSeeder, FinancialInformationSeeder};
pub use knowledge::{FaqSeeder, KnowledgeBaseSeeder, KnowledgeCategorySeeder};
pub use settings::SystemSettingSeeder;
pub use users::UserSeeder;

use crate::seeder::EntitySeeder;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ENTITY KIND
// ============================================================================

/// Every entity kind the seeder manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    SystemSetting,
    User,
    KnowledgeCategory,
    BankAccount,
    FinancialInformation,
    AcademicYear,
    ExamInformation,
    Discontinuation,
    UniversityOfficial,
    OfficeLocation,
    KnowledgeBase,
    Faq,
    Announcement,
}

impl EntityKind {
    pub const ALL: [EntityKind; 13] = [
        EntityKind::SystemSetting,
        EntityKind::User,
        EntityKind::KnowledgeCategory,
        EntityKind::BankAccount,
        EntityKind::FinancialInformation,
        EntityKind::AcademicYear,
        EntityKind::ExamInformation,
        EntityKind::Discontinuation,
        EntityKind::UniversityOfficial,
        EntityKind::OfficeLocation,
        EntityKind::KnowledgeBase,
        EntityKind::Faq,
        EntityKind::Announcement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::SystemSetting => "SystemSetting",
            EntityKind::User => "User",
            EntityKind::KnowledgeCategory => "KnowledgeCategory",
            EntityKind::BankAccount => "BankAccount",
            EntityKind::FinancialInformation => "FinancialInformation",
            EntityKind::AcademicYear => "AcademicYear",
            EntityKind::ExamInformation => "ExamInformation",
            EntityKind::Discontinuation => "Discontinuation",
            EntityKind::UniversityOfficial => "UniversityOfficial",
            EntityKind::OfficeLocation => "OfficeLocation",
            EntityKind::KnowledgeBase => "KnowledgeBase",
            EntityKind::Faq => "FAQ",
            EntityKind::Announcement => "Announcement",
        }
    }

    /// Backing table in the store
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::SystemSetting => "system_settings",
            EntityKind::User => "users",
            EntityKind::KnowledgeCategory => "knowledge_categories",
            EntityKind::BankAccount => "bank_accounts",
            EntityKind::FinancialInformation => "financial_information",
            EntityKind::AcademicYear => "academic_years",
            EntityKind::ExamInformation => "exam_information",
            EntityKind::Discontinuation => "discontinuations",
            EntityKind::UniversityOfficial => "university_officials",
            EntityKind::OfficeLocation => "office_locations",
            EntityKind::KnowledgeBase => "knowledge_base",
            EntityKind::Faq => "faqs",
            EntityKind::Announcement => "announcements",
        }
    }

    /// Human-readable description of the natural key
    pub fn natural_key(&self) -> &'static str {
        match self {
            EntityKind::SystemSetting => "key",
            EntityKind::User => "username",
            EntityKind::KnowledgeCategory => "name",
            EntityKind::BankAccount => "account number",
            EntityKind::FinancialInformation => "program / fee type / year of study",
            EntityKind::AcademicYear => "year label",
            EntityKind::ExamInformation => "academic year / exam type / semester",
            EntityKind::Discontinuation => "policy id",
            EntityKind::UniversityOfficial => "title / name",
            EntityKind::OfficeLocation => "name",
            EntityKind::KnowledgeBase => "category / title",
            EntityKind::Faq => "question",
            EntityKind::Announcement => "title",
        }
    }

    /// The unique constraint enforcing the natural key, as SQLite names it
    /// in a "UNIQUE constraint failed" message.
    pub fn natural_key_constraint(&self) -> &'static str {
        match self {
            EntityKind::SystemSetting => "system_settings.key",
            EntityKind::User => "users.username",
            EntityKind::KnowledgeCategory => "knowledge_categories.name",
            EntityKind::BankAccount => "bank_accounts.account_number",
            EntityKind::FinancialInformation => "index 'idx_financial_natural_key'",
            EntityKind::AcademicYear => "academic_years.year",
            EntityKind::ExamInformation => {
                "exam_information.academic_year_id, exam_information.exam_type, exam_information.semester"
            }
            EntityKind::Discontinuation => "discontinuations.policy_id",
            EntityKind::UniversityOfficial => {
                "university_officials.position_title, university_officials.full_name"
            }
            EntityKind::OfficeLocation => "office_locations.name",
            EntityKind::KnowledgeBase => "knowledge_base.category_id, knowledge_base.title",
            EntityKind::Faq => "faqs.question",
            EntityKind::Announcement => "announcements.title",
        }
    }

    /// Kinds this kind holds foreign references to.
    ///
    /// Any new kind with a foreign reference must list its referents here;
    /// the sequencer rejects plans that do not honour these edges.
    pub fn dependencies(&self) -> &'static [EntityKind] {
        match self {
            EntityKind::KnowledgeBase => &[EntityKind::KnowledgeCategory],
            EntityKind::Faq => &[EntityKind::KnowledgeCategory],
            EntityKind::ExamInformation => &[EntityKind::AcademicYear],
            EntityKind::Announcement => &[EntityKind::User],
            _ => &[],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical seeder for an entity kind.
///
/// The match is exhaustive, so adding a kind without a seeder does not compile.
pub fn seeder_for(kind: EntityKind) -> Box<dyn EntitySeeder> {
    match kind {
        EntityKind::SystemSetting => Box::new(SystemSettingSeeder),
        EntityKind::User => Box::new(UserSeeder),
        EntityKind::KnowledgeCategory => Box::new(KnowledgeCategorySeeder),
        EntityKind::BankAccount => Box::new(BankAccountSeeder),
        EntityKind::FinancialInformation => Box::new(FinancialInformationSeeder),
        EntityKind::AcademicYear => Box::new(AcademicYearSeeder),
        EntityKind::ExamInformation => Box::new(ExamInformationSeeder),
        EntityKind::Discontinuation => Box::new(DiscontinuationSeeder),
        EntityKind::UniversityOfficial => Box::new(UniversityOfficialSeeder),
        EntityKind::OfficeLocation => Box::new(OfficeLocationSeeder),
        EntityKind::KnowledgeBase => Box::new(KnowledgeBaseSeeder),
        EntityKind::Faq => Box::new(FaqSeeder),
        EntityKind::Announcement => Box::new(AnnouncementSeeder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_distinct() {
        let tables: HashSet<&str> = EntityKind::ALL.iter().map(|k| k.table()).collect();
        assert_eq!(tables.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_seeder_for_matches_kind() {
        for kind in EntityKind::ALL {
            assert_eq!(seeder_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_no_kind_depends_on_itself() {
        for kind in EntityKind::ALL {
            assert!(!kind.dependencies().contains(&kind), "{} is self-referential", kind);
        }
    }
}
