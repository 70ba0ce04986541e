//! Request validation for the wizard form. Every message here is shown to the user.

use std::collections::HashSet;

use crate::catalog::{find_scenario, find_strength};
use crate::errors::AppError;
use crate::models::form::FormData;

pub const MIN_STRENGTHS: usize = 3;
pub const MAX_STRENGTHS: usize = 5;
pub const MIN_CONFUSION_CHARS: usize = 5;
pub const MAX_CONFUSION_CHARS: usize = 500;

/// Whether an endpoint needs the free-text confusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfusionRule {
    Required,
    Optional,
}

pub fn validate_form(form: &FormData, rule: ConfusionRule) -> Result<(), AppError> {
    validate_scenario(&form.scenario)?;
    validate_strengths(&form.strengths)?;
    validate_confusion(&form.confusion, rule)
}

fn validate_scenario(scenario: &str) -> Result<(), AppError> {
    let scenario = scenario.trim();
    if scenario.is_empty() {
        return Err(AppError::Validation("请选择一个场景".to_string()));
    }
    if find_scenario(scenario).is_none() {
        return Err(AppError::Validation(format!("未知的场景：{scenario}")));
    }
    Ok(())
}

fn validate_strengths(strengths: &[String]) -> Result<(), AppError> {
    if !(MIN_STRENGTHS..=MAX_STRENGTHS).contains(&strengths.len()) {
        return Err(AppError::Validation(format!(
            "请选择{MIN_STRENGTHS}到{MAX_STRENGTHS}个优势"
        )));
    }

    let mut seen = HashSet::new();
    for id in strengths {
        if !seen.insert(id.as_str()) {
            return Err(AppError::Validation(format!("优势不能重复选择：{id}")));
        }
        if find_strength(id).is_none() {
            return Err(AppError::Validation(format!("未知的优势：{id}")));
        }
    }
    Ok(())
}

fn validate_confusion(confusion: &str, rule: ConfusionRule) -> Result<(), AppError> {
    let trimmed = confusion.trim();
    let chars = trimmed.chars().count();

    if chars > MAX_CONFUSION_CHARS {
        return Err(AppError::Validation(format!(
            "困惑描述不能超过{MAX_CONFUSION_CHARS}字"
        )));
    }

    if rule == ConfusionRule::Optional && chars == 0 {
        return Ok(());
    }

    if chars == 0 {
        return Err(AppError::Validation("请描述你的困惑".to_string()));
    }
    if chars < MIN_CONFUSION_CHARS {
        return Err(AppError::Validation(format!(
            "困惑描述至少需要{MIN_CONFUSION_CHARS}个字"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(strengths: &[&str], confusion: &str) -> FormData {
        FormData {
            scenario: "career-choice".to_string(),
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            confusion: confusion.to_string(),
        }
    }

    fn message(result: Result<(), AppError>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let f = form(&["achiever", "input", "learner"], "不知道该不该换工作");
        assert!(validate_form(&f, ConfusionRule::Required).is_ok());
    }

    #[test]
    fn test_missing_scenario() {
        let mut f = form(&["achiever", "input", "learner"], "不知道该不该换工作");
        f.scenario = "  ".to_string();
        assert_eq!(
            message(validate_form(&f, ConfusionRule::Required)),
            "请选择一个场景"
        );
    }

    #[test]
    fn test_unknown_scenario() {
        let mut f = form(&["achiever", "input", "learner"], "不知道该不该换工作");
        f.scenario = "space".to_string();
        assert!(message(validate_form(&f, ConfusionRule::Required)).contains("space"));
    }

    #[test]
    fn test_too_few_strengths() {
        let f = form(&["achiever", "input"], "不知道该不该换工作");
        assert_eq!(
            message(validate_form(&f, ConfusionRule::Required)),
            "请选择3到5个优势"
        );
    }

    #[test]
    fn test_too_many_strengths() {
        let f = form(
            &["achiever", "input", "learner", "focus", "woo", "relator"],
            "不知道该不该换工作",
        );
        assert_eq!(
            message(validate_form(&f, ConfusionRule::Required)),
            "请选择3到5个优势"
        );
    }

    #[test]
    fn test_five_strengths_is_the_upper_bound() {
        let f = form(
            &["achiever", "input", "learner", "focus", "woo"],
            "不知道该不该换工作",
        );
        assert!(validate_form(&f, ConfusionRule::Required).is_ok());
    }

    #[test]
    fn test_duplicate_strength() {
        let f = form(&["achiever", "achiever", "learner"], "不知道该不该换工作");
        assert!(message(validate_form(&f, ConfusionRule::Required)).contains("重复"));
    }

    #[test]
    fn test_unknown_strength() {
        let f = form(&["achiever", "telepathy", "learner"], "不知道该不该换工作");
        assert_eq!(
            message(validate_form(&f, ConfusionRule::Required)),
            "未知的优势：telepathy"
        );
    }

    #[test]
    fn test_blank_confusion_when_required() {
        let f = form(&["achiever", "input", "learner"], "   ");
        assert_eq!(
            message(validate_form(&f, ConfusionRule::Required)),
            "请描述你的困惑"
        );
    }

    #[test]
    fn test_blank_confusion_allowed_when_optional() {
        let f = form(&["achiever", "input", "learner"], "");
        assert!(validate_form(&f, ConfusionRule::Optional).is_ok());
    }

    #[test]
    fn test_short_confusion_counts_chars_not_bytes() {
        // 4 CJK characters = 12 bytes, still too short
        let f = form(&["achiever", "input", "learner"], "很迷茫啊");
        assert!(message(validate_form(&f, ConfusionRule::Required)).contains("至少"));
    }

    #[test]
    fn test_long_confusion_rejected_even_when_optional() {
        let long = "迷".repeat(MAX_CONFUSION_CHARS + 1);
        let f = form(&["achiever", "input", "learner"], &long);
        assert!(message(validate_form(&f, ConfusionRule::Optional)).contains("500"));
    }
}
