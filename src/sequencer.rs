// 🔀 Dependency Sequencer - the order seeders run in
//
// Every EntityKind declares the kinds it references. A plan is accepted only
// if each kind appears after all of its declared dependencies, so putting a
// new kind in the wrong slot fails before any write happens.

use crate::entities::{seeder_for, EntityKind};
use crate::error::{Result, SeedError};
use crate::seeder::EntitySeeder;
use std::collections::HashSet;

/// Canonical seed order.
///
/// Settings and identities first, then reference data with no foreign keys,
/// then the kinds that point back at categories, academic years and users.
pub const SEED_ORDER: [EntityKind; 13] = [
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

/// Check that `order` lists each kind once and after all its dependencies.
pub fn validate_order(order: &[EntityKind]) -> Result<()> {
    let mut seen: HashSet<EntityKind> = HashSet::new();

    for kind in order {
        for dependency in kind.dependencies() {
            if !seen.contains(dependency) {
                return Err(SeedError::OrderViolation {
                    entity: *kind,
                    dependency: *dependency,
                });
            }
        }
        if !seen.insert(*kind) {
            return Err(SeedError::Config(format!("{} appears twice in the seed plan", kind)));
        }
    }

    Ok(())
}

/// The order the clear engine walks: the exact reverse of `order`.
pub fn clear_order(order: &[EntityKind]) -> Vec<EntityKind> {
    order.iter().rev().copied().collect()
}

/// Kahn's algorithm over the declared dependency graph.
///
/// Ties are broken by position in `kinds`, so an already valid order comes
/// back unchanged. Returns None when the declared graph has a cycle or a
/// dependency outside `kinds`.
pub fn topological_order(kinds: &[EntityKind]) -> Option<Vec<EntityKind>> {
    let mut placed: HashSet<EntityKind> = HashSet::new();
    let mut order = Vec::with_capacity(kinds.len());

    while order.len() < kinds.len() {
        let next = kinds.iter().find(|kind| {
            !placed.contains(*kind) && kind.dependencies().iter().all(|d| placed.contains(d))
        })?;
        placed.insert(*next);
        order.push(*next);
    }

    Some(order)
}

// ============================================================================
// SEED PLAN
// ============================================================================

/// A validated, ordered list of seeders.
pub struct SeedPlan {
    seeders: Vec<Box<dyn EntitySeeder>>,
}

impl SeedPlan {
    /// The thirteen canonical seeders in SEED_ORDER.
    pub fn canonical() -> Result<Self> {
        Self::new(SEED_ORDER.iter().map(|kind| seeder_for(*kind)).collect())
    }

    pub fn new(seeders: Vec<Box<dyn EntitySeeder>>) -> Result<Self> {
        let order: Vec<EntityKind> = seeders.iter().map(|s| s.kind()).collect();
        validate_order(&order)?;
        Ok(SeedPlan { seeders })
    }

    pub fn order(&self) -> Vec<EntityKind> {
        self.seeders.iter().map(|s| s.kind()).collect()
    }

    pub fn seeders(&self) -> &[Box<dyn EntitySeeder>] {
        &self.seeders
    }

    /// Seeders in clear order (reverse of seed order).
    pub fn clear_sequence(&self) -> impl Iterator<Item = &dyn EntitySeeder> {
        self.seeders.iter().rev().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.seeders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_order_is_valid() {
        assert!(validate_order(&SEED_ORDER).is_ok());
    }

    #[test]
    fn test_seed_order_covers_every_kind() {
        let kinds: HashSet<EntityKind> = SEED_ORDER.iter().copied().collect();
        assert_eq!(kinds.len(), EntityKind::ALL.len());
        assert!(EntityKind::ALL.iter().all(|k| kinds.contains(k)));
    }

    #[test]
    fn test_seed_order_is_a_linearisation_of_the_graph() {
        let sorted = topological_order(&SEED_ORDER).expect("declared graph must be acyclic");
        assert_eq!(sorted, SEED_ORDER.to_vec());
    }

    #[test]
    fn test_topological_order_repairs_a_bad_order() {
        let reversed: Vec<EntityKind> = SEED_ORDER.iter().rev().copied().collect();
        assert!(validate_order(&reversed).is_err());

        let repaired = topological_order(&reversed).unwrap();
        assert!(validate_order(&repaired).is_ok());
    }

    #[test]
    fn test_order_violation_names_both_kinds() {
        let order = [EntityKind::KnowledgeBase, EntityKind::KnowledgeCategory];
        match validate_order(&order) {
            Err(SeedError::OrderViolation { entity, dependency }) => {
                assert_eq!(entity, EntityKind::KnowledgeBase);
                assert_eq!(dependency, EntityKind::KnowledgeCategory);
            }
            other => panic!("expected OrderViolation, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_kind_rejected() {
        let order = [EntityKind::User, EntityKind::User];
        assert!(matches!(validate_order(&order), Err(SeedError::Config(_))));
    }

    #[test]
    fn test_clear_order_is_exact_reverse() {
        let reversed = clear_order(&SEED_ORDER);
        assert_eq!(reversed.first(), Some(&EntityKind::Announcement));
        assert_eq!(reversed.last(), Some(&EntityKind::SystemSetting));
        assert_eq!(reversed.len(), SEED_ORDER.len());
    }

    #[test]
    fn test_canonical_plan() {
        let plan = SeedPlan::canonical().unwrap();
        assert_eq!(plan.len(), 13);
        assert_eq!(plan.order(), SEED_ORDER.to_vec());

        let clear: Vec<EntityKind> = plan.clear_sequence().map(|s| s.kind()).collect();
        assert_eq!(clear, clear_order(&SEED_ORDER));
    }

    #[test]
    fn test_custom_plan_validated() {
        let seeders = vec![seeder_for(EntityKind::Announcement), seeder_for(EntityKind::User)];
        assert!(SeedPlan::new(seeders).is_err());
    }
}
