//! Strength tension detection: pairs of traits that pull in opposite directions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::find_strength;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthConflict {
    pub first: String,
    pub second: String,
    pub tension: String,
    pub advice: String,
}

struct TensionRule {
    a: &'static str,
    b: &'static str,
    tension: &'static str,
    advice: &'static str,
}

const TENSIONS: &[TensionRule] = &[
    TensionRule {
        a: "activator",
        b: "deliberative",
        tension: "一边想立刻动手，一边又想把风险看清楚",
        advice: "给审慎设一个时限，时限一到就让行动接管",
    },
    TensionRule {
        a: "command",
        b: "harmony",
        tension: "想直接推动局面，又不愿意破坏关系",
        advice: "先说共识，再用事实陈述分歧",
    },
    TensionRule {
        a: "focus",
        b: "adaptability",
        tension: "想锁定目标，又习惯随情况调整",
        advice: "锁定方向、放开路径，只在每周复盘时改目标",
    },
    TensionRule {
        a: "discipline",
        b: "adaptability",
        tension: "渴望稳定的节奏，又总被变化打断",
        advice: "给日程留出20%的弹性时间",
    },
    TensionRule {
        a: "competition",
        b: "includer",
        tension: "想赢过别人，又不想让任何人掉队",
        advice: "把竞争对象换成过去的自己",
    },
    TensionRule {
        a: "input",
        b: "focus",
        tension: "不停收集新信息，冲淡了对主线的投入",
        advice: "为每个目标只保留三个信息来源",
    },
    TensionRule {
        a: "futuristic",
        b: "context",
        tension: "一边憧憬未来，一边被过去的经验拉住",
        advice: "用过去验证可行性，用未来决定方向",
    },
    TensionRule {
        a: "ideation",
        b: "consistency",
        tension: "新点子层出不穷，却又希望规则一致",
        advice: "把新想法放进固定的评估流程里筛选",
    },
    TensionRule {
        a: "self-assurance",
        b: "deliberative",
        tension: "相信直觉，又忍不住反复推敲",
        advice: "重大决定用审慎，日常决定交给直觉",
    },
    TensionRule {
        a: "maximizer",
        b: "achiever",
        tension: "追求卓越需要慢工，追求完成需要快",
        advice: "先按成就完成初稿，再用完美打磨关键部分",
    },
    TensionRule {
        a: "significance",
        b: "harmony",
        tension: "想被看见，又怕出头带来摩擦",
        advice: "选择对团队也有价值的舞台去表现",
    },
];

/// Returns the tension pairs present in `ids`, using display names.
///
/// Order-insensitive; unknown ids are ignored; each pair is reported once.
pub fn detect_strength_conflicts(ids: &[String]) -> Vec<StrengthConflict> {
    let selected: HashSet<&str> = ids.iter().map(String::as_str).collect();

    TENSIONS
        .iter()
        .filter(|rule| selected.contains(rule.a) && selected.contains(rule.b))
        .filter_map(|rule| {
            let first = find_strength(rule.a)?;
            let second = find_strength(rule.b)?;
            Some(StrengthConflict {
                first: first.name.to_string(),
                second: second.name.to_string(),
                tension: rule.tension.to_string(),
                advice: rule.advice.to_string(),
            })
        })
        .collect()
}

/// Ids referenced by the tension table, for integrity checks.
pub fn referenced_ids() -> impl Iterator<Item = &'static str> {
    TENSIONS.iter().flat_map(|rule| [rule.a, rule.b])
}
