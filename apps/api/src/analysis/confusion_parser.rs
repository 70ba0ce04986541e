//! Confusion Parser: turns the user's free-text confusion into a structured profile.
//!
//! Pure keyword / regex matching, no LLM call:
//! 1. Score each category by the number of distinct keywords found in the text
//! 2. Highest score wins; ties go to the category listed first in `ConfusionCategory::RANKED`
//! 3. No keyword hit at all → `General`, which selects the generic template branch
//!
//! Intensity, urgency and duration are extracted independently and only tune the copy.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfusionCategory {
    InfoOverload,
    DirectionLost,
    ExecutionBlock,
    RelationshipStrain,
    EnergyDrain,
    SelfDoubt,
    General,
}

impl ConfusionCategory {
    /// Tie-break order. `General` is never scored.
    pub const RANKED: [ConfusionCategory; 6] = [
        ConfusionCategory::InfoOverload,
        ConfusionCategory::DirectionLost,
        ConfusionCategory::ExecutionBlock,
        ConfusionCategory::RelationshipStrain,
        ConfusionCategory::EnergyDrain,
        ConfusionCategory::SelfDoubt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ConfusionCategory::InfoOverload => "信息与决策过载",
            ConfusionCategory::DirectionLost => "方向感缺失",
            ConfusionCategory::ExecutionBlock => "行动卡顿",
            ConfusionCategory::RelationshipStrain => "关系摩擦",
            ConfusionCategory::EnergyDrain => "能量透支",
            ConfusionCategory::SelfDoubt => "自我怀疑",
            ConfusionCategory::General => "综合困惑",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ConfusionCategory::InfoOverload => &[
                "信息", "决策", "选择太多", "纠结", "犹豫", "不知道选", "对比", "权衡", "选项",
                "两难",
            ],
            ConfusionCategory::DirectionLost => &[
                "方向", "迷茫", "意义", "目标", "不知道做什么", "未来", "规划", "转行", "适合什么",
            ],
            ConfusionCategory::ExecutionBlock => &[
                "拖延", "执行", "坚持", "动力", "行动", "开始不了", "半途而废", "效率", "deadline",
            ],
            ConfusionCategory::RelationshipStrain => &[
                "沟通", "关系", "同事", "领导", "冲突", "误解", "吵架", "伴侣", "父母", "朋友",
            ],
            ConfusionCategory::EnergyDrain => &[
                "累", "焦虑", "压力", "倦怠", "内耗", "失眠", "疲惫", "burnout", "透支",
            ],
            ConfusionCategory::SelfDoubt => &[
                "自信", "怀疑", "不够好", "比较", "否定", "自卑", "能力不足", "配不上",
            ],
            ConfusionCategory::General => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Structured reading of the confusion text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionProfile {
    pub category: ConfusionCategory,
    pub matched_keywords: Vec<String>,
    pub intensity: Intensity,
    pub urgent: bool,
    /// "已经3年" style durations, when mentioned.
    pub duration_years: Option<u32>,
}

static STRONG_ADVERBS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"非常|特别|极其|太|完全|彻底|真的很").expect("valid regex"));
static REPEATED_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[！!]{2,}|[？?]{2,}").expect("valid regex"));
static DESPAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"崩溃|受不了|绝望|撑不住").expect("valid regex"));
static URGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)马上|立刻|尽快|这周|下周|月底|截止|deadline").expect("valid regex")
});
/// ASCII digits only: full-width numerals never parse as `u32`.
static DURATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*年").expect("valid regex"));

pub fn parse_confusion(text: &str) -> ConfusionProfile {
    let lowered = text.to_lowercase();

    let mut best = ConfusionCategory::General;
    let mut best_hits: Vec<&'static str> = Vec::new();

    for category in ConfusionCategory::RANKED {
        let hits: Vec<&'static str> = category
            .keywords()
            .iter()
            .copied()
            .filter(|kw| lowered.contains(kw))
            .collect();
        // strictly greater keeps the earlier category on ties
        if hits.len() > best_hits.len() {
            best = category;
            best_hits = hits;
        }
    }

    ConfusionProfile {
        category: best,
        matched_keywords: best_hits.into_iter().map(str::to_string).collect(),
        intensity: detect_intensity(text),
        urgent: URGENT.is_match(text),
        duration_years: DURATION
            .captures_iter(text)
            .find_map(|c| c.get(1)?.as_str().parse().ok()),
    }
}

fn detect_intensity(text: &str) -> Intensity {
    let markers = STRONG_ADVERBS.find_iter(text).count()
        + REPEATED_PUNCT.find_iter(text).count()
        + DESPAIR.find_iter(text).count();

    match markers {
        0 => Intensity::Low,
        1..=2 => Intensity::Medium,
        _ => Intensity::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO_OVERLOAD: &str = "信息太多了，不知道怎么决策";
    const CAREER_LOST: &str = "工作已经3年了，越来越迷茫，不知道未来的方向在哪里";
    const BURNOUT: &str = "最近压力非常大，每天都很焦虑，真的很累，快崩溃了！！";
    const NOTHING: &str = "今天天气不错，随便写点什么";

    #[test]
    fn test_info_keywords_map_to_info_overload() {
        let profile = parse_confusion(INFO_OVERLOAD);
        assert_eq!(profile.category, ConfusionCategory::InfoOverload);
        assert!(profile.matched_keywords.contains(&"信息".to_string()));
        assert!(profile.matched_keywords.contains(&"决策".to_string()));
    }

    #[test]
    fn test_direction_keywords_and_duration() {
        let profile = parse_confusion(CAREER_LOST);
        assert_eq!(profile.category, ConfusionCategory::DirectionLost);
        assert_eq!(profile.duration_years, Some(3));
    }

    #[test]
    fn test_duration_skips_unparseable_matches() {
        assert_eq!(parse_confusion("读了３年书，又工作了2年").duration_years, Some(2));
        assert_eq!(
            parse_confusion("等了99999999999年，其实才4年").duration_years,
            Some(4)
        );
        assert_eq!(parse_confusion("熬了三年").duration_years, None);
    }

    #[test]
    fn test_no_keywords_falls_back_to_general() {
        let profile = parse_confusion(NOTHING);
        assert_eq!(profile.category, ConfusionCategory::General);
        assert!(profile.matched_keywords.is_empty());
        assert_eq!(profile.intensity, Intensity::Low);
        assert!(!profile.urgent);
    }

    #[test]
    fn test_high_intensity_from_markers() {
        let profile = parse_confusion(BURNOUT);
        assert_eq!(profile.category, ConfusionCategory::EnergyDrain);
        assert_eq!(profile.intensity, Intensity::High);
    }

    #[test]
    fn test_single_marker_is_medium() {
        let profile = parse_confusion("和领导沟通特别困难");
        assert_eq!(profile.category, ConfusionCategory::RelationshipStrain);
        assert_eq!(profile.intensity, Intensity::Medium);
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        // one InfoOverload hit (纠结) and one SelfDoubt hit (自卑)
        let profile = parse_confusion("我很纠结也有点自卑");
        assert_eq!(profile.category, ConfusionCategory::InfoOverload);
    }

    #[test]
    fn test_urgency_is_case_insensitive() {
        assert!(parse_confusion("项目 DEADLINE 就在眼前").urgent);
        assert!(parse_confusion("下周就要给答复").urgent);
    }

    #[test]
    fn test_english_keyword_matches_lowercased() {
        let profile = parse_confusion("Total BURNOUT lately");
        assert_eq!(profile.category, ConfusionCategory::EnergyDrain);
    }
}
