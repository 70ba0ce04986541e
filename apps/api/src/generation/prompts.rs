// Prompt constants for the diagnosis LLM path.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::analysis::context::DiagnosisContext;
use crate::generation::verdict::Verdict;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, SAFETY_INSTRUCTION};

/// Persona for the diagnosis call. `JSON_ONLY_SYSTEM` is appended at build time.
pub const DIAGNOSIS_SYSTEM: &str = "你是一位熟悉盖洛普优势理论（CliftonStrengths）的成长教练。\
    你根据用户的优势组合、所处场景和困惑描述，给出温和、具体的诊断和行动建议。";

/// Diagnosis prompt template.
/// Replace: {safety}, {scenario}, {strengths}, {domains}, {conflicts},
///          {category}, {keywords}, {confusion}, {verdicts}, {strength_ids}
pub const DIAGNOSIS_PROMPT_TEMPLATE: &str = r#"{safety}

场景：{scenario}

用户的优势（按重要性排序）：
{strengths}

优势领域分布：{domains}

优势之间的张力：{conflicts}

规则引擎的初步判断：{category}（命中关键词：{keywords}）

用户的困惑原文：
"""
{confusion}
"""

请返回如下结构的 JSON 对象（不要包含其他字段）：
{
  "highlight": "一句话点出这组优势在该场景下的最大亮点，必须提到至少一个优势名称",
  "verdict": "从以下词表中选择且只能选择一个：{verdicts}",
  "summary": "两到三句话解释为什么会有这个困惑",
  "blindspot": "这组优势在该场景下容易忽视的盲点",
  "actions": ["3到5条具体、可在一周内执行的行动"],
  "advantageTips": [
    {"strengthId": "优势 id，只能取自：{strength_ids}", "tip": "如何用这个优势应对当前困惑"}
  ]
}

硬性规则：
1. verdict 必须与词表中的某一项完全一致
2. actions 数量必须在3到5条之间
3. 每个优势最多一条 advantageTips"#;

pub fn diagnosis_system() -> String {
    format!("{DIAGNOSIS_SYSTEM} {JSON_ONLY_SYSTEM}")
}

/// Fills the diagnosis template from the shared context.
pub fn build_diagnosis_prompt(ctx: &DiagnosisContext) -> String {
    let strengths = ctx
        .strengths
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}. {}（{}，{}领域）",
                i + 1,
                s.name,
                s.english_name,
                s.domain.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let domains = ctx
        .domain_counts
        .iter()
        .map(|(d, n)| format!("{}×{}", d.label(), n))
        .collect::<Vec<_>>()
        .join("，");

    let conflicts = if ctx.conflicts.is_empty() {
        "无明显张力".to_string()
    } else {
        ctx.conflicts
            .iter()
            .map(|c| format!("{}与{}：{}", c.first, c.second, c.tension))
            .collect::<Vec<_>>()
            .join("；")
    };

    let keywords = if ctx.profile.matched_keywords.is_empty() {
        "无".to_string()
    } else {
        ctx.profile.matched_keywords.join("、")
    };

    let strength_ids = ctx
        .strengths
        .iter()
        .map(|s| s.id)
        .collect::<Vec<_>>()
        .join(", ");

    DIAGNOSIS_PROMPT_TEMPLATE
        .replace("{safety}", SAFETY_INSTRUCTION)
        .replace("{scenario}", ctx.scenario.title)
        .replace("{strengths}", &strengths)
        .replace("{domains}", &domains)
        .replace("{conflicts}", &conflicts)
        .replace("{category}", ctx.profile.category.label())
        .replace("{keywords}", &keywords)
        .replace("{verdicts}", &Verdict::vocabulary())
        .replace("{strength_ids}", &strength_ids)
        // last: user text must not be scanned for placeholders
        .replace("{confusion}", &ctx.confusion_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::context::build_context;
    use crate::models::form::FormData;

    fn ctx(confusion: &str) -> DiagnosisContext {
        build_context(&FormData {
            scenario: "workplace".to_string(),
            strengths: vec![
                "activator".to_string(),
                "deliberative".to_string(),
                "empathy".to_string(),
            ],
            confusion: confusion.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        let prompt = build_diagnosis_prompt(&ctx("和领导沟通总是有误解"));
        for key in [
            "{safety}",
            "{scenario}",
            "{strengths}",
            "{domains}",
            "{conflicts}",
            "{category}",
            "{keywords}",
            "{verdicts}",
            "{strength_ids}",
            "{confusion}",
        ] {
            assert!(!prompt.contains(key), "unfilled {key}");
        }
    }

    #[test]
    fn test_prompt_lists_full_verdict_vocabulary() {
        let prompt = build_diagnosis_prompt(&ctx("和领导沟通总是有误解"));
        for verdict in Verdict::ALL {
            assert!(prompt.contains(verdict.label()));
        }
    }

    #[test]
    fn test_prompt_mentions_strengths_and_conflict() {
        let prompt = build_diagnosis_prompt(&ctx("和领导沟通总是有误解"));
        assert!(prompt.contains("1. 行动（Activator，影响力领域）"));
        assert!(prompt.contains("行动与审慎"));
        assert!(prompt.contains("activator, deliberative, empathy"));
    }

    #[test]
    fn test_user_text_with_braces_is_kept_verbatim() {
        let prompt = build_diagnosis_prompt(&ctx("我写了 {verdicts} 这种东西会怎样"));
        assert!(prompt.contains("我写了 {verdicts} 这种东西会怎样"));
    }

    #[test]
    fn test_system_prompt_demands_json() {
        assert!(diagnosis_system().contains("valid JSON"));
    }
}
