//! Context Generator: resolves a validated form into everything the generators need.
//!
//! Both the mock generator and the prompt builder read from `DiagnosisContext`,
//! so the two paths always see the same interpretation of the user's input.

use std::collections::BTreeMap;

use crate::analysis::confusion_parser::{parse_confusion, ConfusionProfile};
use crate::analysis::conflicts::{detect_strength_conflicts, StrengthConflict};
use crate::catalog::{find_scenario, find_strength, Domain, Scenario, Strength};
use crate::errors::AppError;
use crate::models::form::FormData;

#[derive(Debug, Clone)]
pub struct DiagnosisContext {
    pub scenario: &'static Scenario,
    /// In the order the user listed them; the first is treated as the top strength.
    pub strengths: Vec<&'static Strength>,
    pub domain_counts: BTreeMap<Domain, usize>,
    pub dominant_domain: Domain,
    pub missing_domains: Vec<Domain>,
    pub conflicts: Vec<StrengthConflict>,
    pub confusion_text: String,
    pub profile: ConfusionProfile,
    /// Stable seed for picking among template variants.
    pub seed: usize,
}

impl DiagnosisContext {
    pub fn top_strength(&self) -> &'static Strength {
        self.strengths[0]
    }

    /// Display names joined with the Chinese enumeration comma.
    pub fn strength_names(&self) -> String {
        self.strengths
            .iter()
            .map(|s| s.name)
            .collect::<Vec<_>>()
            .join("、")
    }

    pub fn strengths_in(&self, domain: Domain) -> Vec<&'static Strength> {
        self.strengths
            .iter()
            .copied()
            .filter(|s| s.domain == domain)
            .collect()
    }

    /// Domains with at least one selected strength, most represented first.
    pub fn ranked_domains(&self) -> Vec<Domain> {
        let mut ranked: Vec<Domain> = self
            .domain_counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(domain, _)| *domain)
            .collect();
        ranked.sort_by_key(|d| {
            let first_index = self
                .strengths
                .iter()
                .position(|s| s.domain == *d)
                .unwrap_or(usize::MAX);
            (std::cmp::Reverse(self.domain_counts[d]), first_index)
        });
        ranked
    }
}

/// Builds the context for an already validated form.
///
/// Returns `AppError::Validation` if an id slipped through unresolved, so callers
/// that skip validation still get a 400 instead of a panic.
pub fn build_context(form: &FormData) -> Result<DiagnosisContext, AppError> {
    let scenario = find_scenario(form.scenario.trim())
        .ok_or_else(|| AppError::Validation(format!("未知的场景：{}", form.scenario)))?;

    let strengths = form
        .strengths
        .iter()
        .map(|id| {
            find_strength(id).ok_or_else(|| AppError::Validation(format!("未知的优势：{id}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if strengths.is_empty() {
        return Err(AppError::Validation("请选择3到5个优势".to_string()));
    }

    let mut domain_counts: BTreeMap<Domain, usize> = Domain::ALL.iter().map(|d| (*d, 0)).collect();
    for strength in &strengths {
        *domain_counts.entry(strength.domain).or_insert(0) += 1;
    }

    let missing_domains = Domain::ALL
        .iter()
        .copied()
        .filter(|d| domain_counts[d] == 0)
        .collect();

    let confusion_text = form.confusion.trim().to_string();

    let mut context = DiagnosisContext {
        scenario,
        strengths,
        dominant_domain: Domain::Executing,
        domain_counts,
        missing_domains,
        conflicts: detect_strength_conflicts(&form.strengths),
        profile: parse_confusion(&confusion_text),
        seed: variant_seed(&confusion_text),
        confusion_text,
    };
    context.dominant_domain = context.ranked_domains()[0];

    Ok(context)
}

/// Platform-independent string hash (FNV-1a over UTF-8 bytes).
pub fn variant_seed(text: &str) -> usize {
    let hash = text
        .bytes()
        .fold(0x811c_9dc5_u32, |acc, b| (acc ^ b as u32).wrapping_mul(0x0100_0193));
    hash as usize
}
