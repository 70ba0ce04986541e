//! Plain-text rendering of a result for the share / copy button.

use crate::catalog::Scenario;
use crate::models::result::ResultData;

pub fn share_text(scenario: &Scenario, result: &ResultData) -> String {
    let mut lines = vec![
        format!("【{}｜{}】", scenario.title, result.judgment.verdict.label()),
        format!("✨ {}", result.highlight),
        format!("🔍 {}", result.judgment.summary),
        format!("⚠️ {}", result.blindspot),
        "行动清单：".to_string(),
    ];
    lines.extend(
        result
            .actions
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{}. {}", i + 1, a)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::context::build_context;
    use crate::catalog::find_scenario;
    use crate::generation::mock_data::generate_result;
    use crate::models::form::FormData;

    #[test]
    fn test_share_text_lists_numbered_actions() {
        let ctx = build_context(&FormData {
            scenario: "learning".to_string(),
            strengths: vec![
                "learner".to_string(),
                "focus".to_string(),
                "relator".to_string(),
            ],
            confusion: "学习总是拖延，没有动力".to_string(),
        })
        .unwrap();
        let result = generate_result(&ctx);
        let text = share_text(find_scenario("learning").unwrap(), &result);

        assert!(text.starts_with("【学习成长｜执行受阻】"));
        assert!(text.contains("1. "));
        assert!(text.contains(&format!("{}. ", result.actions.len())));
    }
}
