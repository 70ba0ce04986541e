//! Verdict vocabulary and the validator for LLM-produced diagnoses.
//!
//! The model never talks to the user directly. Its JSON is parsed into a loose
//! `LlmDiagnosisDraft`, then `validate_draft` either rejects it or returns a
//! sanitized `ResultData`:
//! - verdict must be one of the fixed labels in `Verdict`
//! - hard-banned terms (clinical / fatalistic language) reject the whole draft
//! - absolutist wording is softened in place
//! - shape limits: non-empty copy, 3–5 non-blank actions, one tip per selected strength

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::confusion_parser::ConfusionCategory;
use crate::analysis::context::DiagnosisContext;
use crate::generation::mock_data::catalog_tip;
use crate::models::result::{AdvantageTip, Judgment, ResultData};

pub const MIN_ACTIONS: usize = 3;
pub const MAX_ACTIONS: usize = 5;

/// The only judgment labels a result may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "方向不清")]
    DirectionUnclear,
    #[serde(rename = "信息过载")]
    InfoOverload,
    #[serde(rename = "执行受阻")]
    ExecutionBlocked,
    #[serde(rename = "关系消耗")]
    RelationshipDrain,
    #[serde(rename = "能量透支")]
    EnergyDepleted,
    #[serde(rename = "自我怀疑")]
    SelfDoubt,
    #[serde(rename = "阶段性困惑")]
    TransitionalConfusion,
}

impl Verdict {
    pub const ALL: [Verdict; 7] = [
        Verdict::DirectionUnclear,
        Verdict::InfoOverload,
        Verdict::ExecutionBlocked,
        Verdict::RelationshipDrain,
        Verdict::EnergyDepleted,
        Verdict::SelfDoubt,
        Verdict::TransitionalConfusion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Verdict::DirectionUnclear => "方向不清",
            Verdict::InfoOverload => "信息过载",
            Verdict::ExecutionBlocked => "执行受阻",
            Verdict::RelationshipDrain => "关系消耗",
            Verdict::EnergyDepleted => "能量透支",
            Verdict::SelfDoubt => "自我怀疑",
            Verdict::TransitionalConfusion => "阶段性困惑",
        }
    }

    pub fn from_label(label: &str) -> Option<Verdict> {
        let label = label.trim();
        Verdict::ALL.into_iter().find(|v| v.label() == label)
    }

    pub fn for_category(category: ConfusionCategory) -> Verdict {
        match category {
            ConfusionCategory::InfoOverload => Verdict::InfoOverload,
            ConfusionCategory::DirectionLost => Verdict::DirectionUnclear,
            ConfusionCategory::ExecutionBlock => Verdict::ExecutionBlocked,
            ConfusionCategory::RelationshipStrain => Verdict::RelationshipDrain,
            ConfusionCategory::EnergyDrain => Verdict::EnergyDepleted,
            ConfusionCategory::SelfDoubt => Verdict::SelfDoubt,
            ConfusionCategory::General => Verdict::TransitionalConfusion,
        }
    }

    /// Labels joined for prompt text.
    pub fn vocabulary() -> String {
        Verdict::ALL
            .iter()
            .map(|v| v.label())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Terms that make a draft unusable: we do not diagnose, prescribe, or predict fate.
pub const BANNED_TERMS: &[&str] = &[
    "抑郁症",
    "焦虑症",
    "精神疾病",
    "心理疾病",
    "确诊",
    "药物",
    "吃药",
    "治疗",
    "自杀",
    "命中注定",
    "注定失败",
    "没救了",
];

/// Absolutist wording softened in place. Longer forms come first.
pub const SOFTENED_TERMS: &[(&str, &str)] = &[
    ("绝对", "往往"),
    ("必须", "可以优先"),
    ("一定会", "很可能会"),
    ("一定", "很可能"),
    ("永远", "长期"),
    ("从来不", "很少"),
    ("肯定会", "大概率会"),
    ("肯定是", "大概率是"),
    ("肯定要", "大概率要"),
];

/// Ordinary phrases that contain a softened term and must survive untouched.
pub const SOFTEN_GUARDS: &[&str] = &[
    "一定程度",
    "不一定",
    "说不定",
    "自我肯定",
    "得到肯定",
    "被肯定",
    "肯定自己",
    "肯定你",
    "肯定他",
    "肯定她",
];

/// Guards first, so a guard wins over a term starting at the same position.
static SOFTEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = SOFTEN_GUARDS
        .iter()
        .chain(SOFTENED_TERMS.iter().map(|(from, _)| from))
        .map(|term| regex::escape(term))
        .collect();
    Regex::new(&alternatives.join("|")).expect("valid regex")
});

#[derive(Debug, Error, PartialEq)]
pub enum VerdictError {
    #[error("verdict '{0}' is not in the allowed vocabulary")]
    UnknownVerdict(String),

    #[error("field '{field}' contains banned term '{term}'")]
    BannedTerm { field: &'static str, term: &'static str },

    #[error("field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("expected 3-5 actions, got {0}")]
    ActionCount(usize),
}

/// The loose JSON shape accepted from the model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LlmDiagnosisDraft {
    pub highlight: String,
    pub verdict: String,
    pub summary: String,
    pub blindspot: String,
    pub actions: Vec<String>,
    #[serde(alias = "advantage_tips")]
    pub advantage_tips: Vec<DraftTip>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftTip {
    #[serde(alias = "strength_id")]
    pub strength_id: String,
    pub tip: String,
}

pub fn validate_draft(
    draft: LlmDiagnosisDraft,
    ctx: &DiagnosisContext,
) -> Result<ResultData, VerdictError> {
    let verdict = Verdict::from_label(&draft.verdict)
        .ok_or_else(|| VerdictError::UnknownVerdict(draft.verdict.clone()))?;

    let highlight = checked_text("highlight", &draft.highlight)?;
    let summary = checked_text("summary", &draft.summary)?;
    let blindspot = checked_text("blindspot", &draft.blindspot)?;

    if draft.actions.iter().any(|a| a.trim().is_empty()) {
        return Err(VerdictError::EmptyField("actions"));
    }
    if !(MIN_ACTIONS..=MAX_ACTIONS).contains(&draft.actions.len()) {
        return Err(VerdictError::ActionCount(draft.actions.len()));
    }
    let actions = draft
        .actions
        .iter()
        .map(|a| checked_text("actions", a))
        .collect::<Result<Vec<_>, _>>()?;

    let mut advantage_tips = Vec::with_capacity(ctx.strengths.len());
    for strength in &ctx.strengths {
        let drafted = draft
            .advantage_tips
            .iter()
            .find(|t| t.strength_id == strength.id && !t.tip.trim().is_empty());
        let tip = match drafted {
            Some(t) => AdvantageTip {
                tip: checked_text("advantageTips", &t.tip)?,
                ..catalog_tip(strength)
            },
            None => catalog_tip(strength),
        };
        advantage_tips.push(tip);
    }

    Ok(ResultData {
        highlight,
        judgment: Judgment { verdict, summary },
        blindspot,
        actions,
        advantage_tips,
    })
}

/// Rejects empty or banned text, otherwise returns the softened, trimmed copy.
fn checked_text(field: &'static str, text: &str) -> Result<String, VerdictError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(VerdictError::EmptyField(field));
    }
    if let Some(term) = find_banned(text) {
        return Err(VerdictError::BannedTerm { field, term });
    }
    Ok(soften(text))
}

pub fn find_banned(text: &str) -> Option<&'static str> {
    BANNED_TERMS.iter().copied().find(|term| text.contains(term))
}

pub fn soften(text: &str) -> String {
    SOFTEN_PATTERN
        .replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            SOFTENED_TERMS
                .iter()
                .find(|(from, _)| *from == matched)
                .map_or(matched, |(_, to)| *to)
                .to_string()
        })
        .into_owned()
}
