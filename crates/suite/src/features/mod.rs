//! The scenario catalogue, one module per feature.
//!
//! Outlines (one field crossed with several violation kinds) are expanded
//! here into one concrete scenario per example row.

use crate::scenario::Scenario;

pub mod character_create;
pub mod character_get_by_id;
pub mod character_list;
pub mod character_update;
pub mod health;

/// Every scenario, grouped by feature in run order.
pub fn catalog() -> Vec<Scenario> {
    let mut scenarios = health::scenarios();
    scenarios.extend(character_list::scenarios());
    scenarios.extend(character_get_by_id::scenarios());
    scenarios.extend(character_create::scenarios());
    scenarios.extend(character_update::scenarios());
    scenarios
}

/// Scenarios whose id contains `filter`, or all of them.
pub fn select(filter: Option<&str>) -> Vec<Scenario> {
    catalog()
        .into_iter()
        .filter(|scenario| scenario.matches(filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn scenario_ids_are_unique() {
        let scenarios = catalog();
        let ids: HashSet<String> = scenarios.iter().map(Scenario::id).collect();
        assert_eq!(ids.len(), scenarios.len());
    }

    #[test]
    fn every_scenario_acts_and_asserts() {
        use crate::scenario::Keyword;

        for scenario in catalog() {
            let has = |keyword| scenario.steps.iter().any(|s| s.keyword == keyword);
            assert!(has(Keyword::When), "{} has no When", scenario.id());
            assert!(has(Keyword::Then), "{} has no Then", scenario.id());
        }
    }

    #[test]
    fn select_filters_by_feature() {
        let health = select(Some("health/"));
        assert!(!health.is_empty());
        assert!(health.iter().all(|s| s.feature == health::FEATURE));
    }
}
