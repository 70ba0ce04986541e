use serde::{Deserialize, Serialize};

/// Request body shared by the generate, career and guide endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub confusion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_deserializes_full_body() {
        let json = r#"{
            "scenario": "career-choice",
            "strengths": ["achiever", "learner", "input"],
            "confusion": "信息太多，不知道怎么决策"
        }"#;
        let form: FormData = serde_json::from_str(json).unwrap();
        assert_eq!(form.scenario, "career-choice");
        assert_eq!(form.strengths.len(), 3);
        assert!(form.confusion.contains("决策"));
    }

    #[test]
    fn test_form_data_missing_confusion_defaults_to_empty() {
        let json = r#"{"scenario": "workplace", "strengths": ["focus"]}"#;
        let form: FormData = serde_json::from_str(json).unwrap();
        assert!(form.confusion.is_empty());
    }
}
