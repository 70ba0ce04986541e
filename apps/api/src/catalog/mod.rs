//! Static reference data: strengths, domains and scenarios.

pub mod scenarios;
pub mod strengths;

use std::collections::HashSet;

pub use scenarios::{all_scenarios, find_scenario, Scenario};
pub use strengths::{all_strengths, find_strength, strengths_in, Domain, Strength};

/// Checks the static tables for mistakes introduced while editing copy.
/// Returns one human-readable line per problem; empty means healthy.
pub fn check_integrity() -> Vec<String> {
    let mut problems = Vec::new();

    if all_strengths().len() != 34 {
        problems.push(format!(
            "expected 34 strengths, found {}",
            all_strengths().len()
        ));
    }

    let mut seen = HashSet::new();
    for strength in all_strengths() {
        if !seen.insert(strength.id) {
            problems.push(format!("duplicate strength id '{}'", strength.id));
        }
        if strength.name.trim().is_empty() || strength.leverage.trim().is_empty() {
            problems.push(format!("strength '{}' has empty copy", strength.id));
        }
        if strength.id != strength.id.to_lowercase() {
            problems.push(format!("strength id '{}' must be lowercase", strength.id));
        }
    }

    for domain in Domain::ALL {
        if strengths_in(domain).next().is_none() {
            problems.push(format!("domain {} has no strengths", domain.label()));
        }
    }

    let mut seen = HashSet::new();
    for scenario in all_scenarios() {
        if !seen.insert(scenario.id) {
            problems.push(format!("duplicate scenario id '{}'", scenario.id));
        }
    }

    problems
}
