// 📚 Canonical Dataset - the fixed records every seed reproduces
//
// Static tables live in the submodules as constants. The only computed parts
// are the academic calendar (anchored at a base year) and announcement
// windows (anchored at a reference instant); both are resolved once per run
// so that every seeder and the clear engine see identical natural keys.

pub mod academics;
pub mod announcements;
pub mod directory;
pub mod finance;
pub mod identities;
pub mod knowledge;
pub mod settings;

pub use academics::{AcademicYearRecord, DiscontinuationRecord, ExamRecord, YearStatus};
pub use announcements::AnnouncementRecord;
pub use directory::{OfficeRecord, OfficialRecord};
pub use finance::{BankAccountRecord, FeeRecord};
pub use identities::{IdentityRecord, UserType, ADMIN_USERNAME};
pub use knowledge::{CategoryRecord, FaqRecord, KnowledgeEntryRecord};
pub use settings::{SettingRecord, API_KEY_PLACEHOLDER, API_KEY_SETTING};

use crate::config::SeedOptions;
use crate::entities::EntityKind;
use crate::error::{Result, SeedError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Bump whenever a canonical record is added, removed or re-keyed.
pub const DATASET_VERSION: &str = "2025.1";

#[derive(Debug, Clone)]
pub struct Dataset {
    pub base_year: i32,
    pub reference_time: DateTime<Utc>,
    pub settings: &'static [SettingRecord],
    pub identities: &'static [IdentityRecord],
    pub categories: &'static [CategoryRecord],
    pub knowledge_entries: &'static [KnowledgeEntryRecord],
    pub bank_accounts: &'static [BankAccountRecord],
    pub fees: &'static [FeeRecord],
    pub academic_years: Vec<AcademicYearRecord>,
    pub exams: Vec<ExamRecord>,
    pub discontinuations: &'static [DiscontinuationRecord],
    pub officials: &'static [OfficialRecord],
    pub offices: &'static [OfficeRecord],
    pub faqs: &'static [FaqRecord],
    pub announcements: &'static [AnnouncementRecord],
}

impl Dataset {
    pub fn canonical(base_year: i32, reference_time: DateTime<Utc>) -> Result<Self> {
        Ok(Dataset {
            base_year,
            reference_time,
            settings: settings::SYSTEM_SETTINGS,
            identities: identities::IDENTITIES,
            categories: knowledge::CATEGORIES,
            knowledge_entries: knowledge::KNOWLEDGE_ENTRIES,
            bank_accounts: finance::BANK_ACCOUNTS,
            fees: finance::FEES,
            academic_years: academics::academic_years(base_year)?,
            exams: academics::exams(base_year)?,
            discontinuations: academics::DISCONTINUATIONS,
            officials: directory::OFFICIALS,
            offices: directory::OFFICES,
            faqs: knowledge::FAQS,
            announcements: announcements::ANNOUNCEMENTS,
        })
    }

    pub fn from_options(options: &SeedOptions) -> Result<Self> {
        Self::canonical(options.base_year, options.reference_time)
    }

    /// Natural keys of every canonical record of `kind`, in table order.
    ///
    /// Composite keys are joined with " / ".
    pub fn natural_keys(&self, kind: EntityKind) -> Vec<String> {
        match kind {
            EntityKind::SystemSetting => self.settings.iter().map(|s| s.key.to_string()).collect(),
            EntityKind::User => self.identities.iter().map(|u| u.username.to_string()).collect(),
            EntityKind::KnowledgeCategory => {
                self.categories.iter().map(|c| c.name.to_string()).collect()
            }
            EntityKind::KnowledgeBase => self
                .knowledge_entries
                .iter()
                .map(|k| format!("{} / {}", k.category, k.title))
                .collect(),
            EntityKind::BankAccount => self
                .bank_accounts
                .iter()
                .map(|a| a.account_number.to_string())
                .collect(),
            EntityKind::FinancialInformation => self.fees.iter().map(fee_key).collect(),
            EntityKind::AcademicYear => self.academic_years.iter().map(|y| y.year.clone()).collect(),
            EntityKind::ExamInformation => self
                .exams
                .iter()
                .map(|e| format!("{} / {} / {}", e.academic_year, e.exam_type, e.semester))
                .collect(),
            EntityKind::Discontinuation => self
                .discontinuations
                .iter()
                .map(|d| d.policy_id.to_string())
                .collect(),
            EntityKind::UniversityOfficial => self
                .officials
                .iter()
                .map(|o| format!("{} / {}", o.position_title, o.full_name))
                .collect(),
            EntityKind::OfficeLocation => self.offices.iter().map(|o| o.name.to_string()).collect(),
            EntityKind::Faq => self.faqs.iter().map(|f| f.question.to_string()).collect(),
            EntityKind::Announcement => {
                self.announcements.iter().map(|a| a.title.to_string()).collect()
            }
        }
    }

    pub fn record_count(&self, kind: EntityKind) -> usize {
        self.natural_keys(kind).len()
    }

    pub fn total_records(&self) -> usize {
        EntityKind::ALL.iter().map(|k| self.record_count(*k)).sum()
    }

    /// Reject canonical tables that repeat a natural key.
    pub fn validate(&self) -> Result<()> {
        for kind in EntityKind::ALL {
            let mut seen = HashSet::new();
            for key in self.natural_keys(kind) {
                if !seen.insert(key.clone()) {
                    return Err(SeedError::DuplicateKey { entity: kind, key });
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn fee_key(fee: &FeeRecord) -> String {
    match fee.year_of_study {
        Some(year) => format!("{} / {} / year {}", fee.program, fee.payment_type, year),
        None => format!("{} / {} / all years", fee.program, fee.payment_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dataset() -> Dataset {
        let reference = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();
        Dataset::canonical(2025, reference).unwrap()
    }

    #[test]
    fn test_canonical_counts() {
        let data = dataset();
        let expected = [
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
        for (kind, count) in expected {
            assert_eq!(data.record_count(kind), count, "{}", kind);
        }
        assert_eq!(data.total_records(), 85);
    }

    #[test]
    fn test_canonical_data_has_unique_keys() {
        assert!(dataset().validate().is_ok());
    }

    #[test]
    fn test_duplicate_key_detected() {
        let mut data = dataset();
        data.academic_years.push(data.academic_years[0].clone());

        match data.validate() {
            Err(SeedError::DuplicateKey { entity, key }) => {
                assert_eq!(entity, EntityKind::AcademicYear);
                assert_eq!(key, "2025/2026");
            }
            other => panic!("expected DuplicateKey, got {:?}", other),
        }
    }

    #[test]
    fn test_references_point_at_canonical_records() {
        let data = dataset();
        let categories: HashSet<&str> = data.categories.iter().map(|c| c.name).collect();
        let usernames: HashSet<&str> = data.identities.iter().map(|u| u.username).collect();
        let years: HashSet<String> = data.academic_years.iter().map(|y| y.year.clone()).collect();

        assert!(data.knowledge_entries.iter().all(|k| categories.contains(k.category)));
        assert!(data.faqs.iter().all(|f| categories.contains(f.category)));
        assert!(data.announcements.iter().all(|a| usernames.contains(a.author)));
        assert!(data.exams.iter().all(|e| years.contains(&e.academic_year)));
    }

    #[test]
    fn test_academic_calendar_anchored_at_base_year() {
        let data = dataset();
        assert_eq!(data.academic_years[0].year, "2025/2026");
        assert_eq!(data.academic_years[0].status, YearStatus::Current);
        assert_eq!(data.academic_years[1].year, "2026/2027");
        assert_eq!(
            data.academic_years[1].semester_2_end,
            chrono::NaiveDate::from_ymd_opt(2027, 5, 15).unwrap()
        );
        assert!(data.exams.iter().all(|e| e.academic_year == "2025/2026"));
    }

    #[test]
    fn test_announcement_window_uses_reference_time() {
        let data = dataset();
        let registration = &data.announcements[0];
        let (start, end) = registration.window(data.reference_time);

        assert_eq!((data.reference_time - start).num_days(), 2);
        assert_eq!((end - data.reference_time).num_days(), 14);
    }

    #[test]
    fn test_api_key_is_placeholder() {
        let data = dataset();
        let api_key = data.settings.iter().find(|s| s.key == API_KEY_SETTING).unwrap();
        assert_eq!(api_key.value, API_KEY_PLACEHOLDER);
    }
}
