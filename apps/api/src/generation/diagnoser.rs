//! Diagnoser: pluggable backend that turns a `DiagnosisContext` into a `ResultData`.
//!
//! Default: `MockDiagnoser` (pure template filling, deterministic).
//! Optional: `LlmDiagnoser` (Claude, validated against the verdict vocabulary).
//!
//! `AppState` holds an `Arc<dyn Diagnoser>`, chosen at startup from `AI_PROVIDER`.
//! A diagnoser never fails: the LLM path falls back to the mock on any error.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::context::DiagnosisContext;
use crate::generation::mock_data::generate_result;
use crate::generation::prompts::{build_diagnosis_prompt, diagnosis_system};
use crate::generation::verdict::{validate_draft, LlmDiagnosisDraft, VerdictError};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::result::{ResultData, ResultSource};

#[derive(Debug, Clone)]
pub struct Diagnosis {
    pub result: ResultData,
    pub source: ResultSource,
}

#[async_trait]
pub trait Diagnoser: Send + Sync {
    async fn diagnose(&self, ctx: &DiagnosisContext) -> Diagnosis;

    /// Backend label for logs.
    fn backend(&self) -> &'static str;
}

pub struct MockDiagnoser;

#[async_trait]
impl Diagnoser for MockDiagnoser {
    async fn diagnose(&self, ctx: &DiagnosisContext) -> Diagnosis {
        Diagnosis {
            result: generate_result(ctx),
            source: ResultSource::Mock,
        }
    }

    fn backend(&self) -> &'static str {
        "mock"
    }
}

#[derive(Debug, Error)]
enum LlmDiagnosisError {
    #[error("LLM call failed: {0}")]
    Call(#[from] LlmError),

    #[error("LLM draft rejected: {0}")]
    Rejected(#[from] VerdictError),
}

/// Claude-backed diagnoser with silent fallback to the mock generator.
pub struct LlmDiagnoser {
    llm: LlmClient,
}

impl LlmDiagnoser {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn try_llm(&self, ctx: &DiagnosisContext) -> Result<ResultData, LlmDiagnosisError> {
        let prompt = build_diagnosis_prompt(ctx);
        let draft: LlmDiagnosisDraft = self.llm.complete_json(&prompt, &diagnosis_system()).await?;
        Ok(validate_draft(draft, ctx)?)
    }
}

#[async_trait]
impl Diagnoser for LlmDiagnoser {
    async fn diagnose(&self, ctx: &DiagnosisContext) -> Diagnosis {
        match self.try_llm(ctx).await {
            Ok(result) => {
                info!(
                    "LLM diagnosis accepted: verdict={}",
                    result.judgment.verdict.label()
                );
                Diagnosis {
                    result,
                    source: ResultSource::Ai,
                }
            }
            Err(e) => {
                warn!("{e}; falling back to mock generator");
                Diagnosis {
                    result: generate_result(ctx),
                    source: ResultSource::Mock,
                }
            }
        }
    }

    fn backend(&self) -> &'static str {
        "anthropic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::analysis::context::build_context;
    use crate::generation::verdict::Verdict;
    use crate::llm_client::stub_server::{messages_body, spawn_stub};
    use crate::models::form::FormData;

    fn ctx() -> DiagnosisContext {
        build_context(&FormData {
            scenario: "relationships".to_string(),
            strengths: vec![
                "harmony".to_string(),
                "empathy".to_string(),
                "command".to_string(),
            ],
            confusion: "和伴侣沟通总是吵架".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_diagnoser_reports_mock_source() {
        let c = ctx();
        let diagnosis = MockDiagnoser.diagnose(&c).await;
        assert_eq!(diagnosis.source, ResultSource::Mock);
        assert_eq!(diagnosis.result, generate_result(&c));
    }

    async fn diagnose_against_stub(status: StatusCode, text_block: &str) -> Diagnosis {
        let stub = spawn_stub(status, messages_body(text_block)).await;
        let llm = LlmClient::new("test-key".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url(&stub.base_url);
        LlmDiagnoser::new(llm).diagnose(&ctx()).await
    }

    fn draft_json(verdict: &str) -> String {
        json!({
            "highlight": "你的体谅让人愿意靠近",
            "verdict": verdict,
            "summary": "你在照顾对方情绪时忘了表达自己的需要",
            "blindspot": "习惯先退一步，久了会积累委屈",
            "actions": ["每天记录一次自己的真实感受", "约一次不谈分歧的散步", "用我字句表达一个需求"],
            "advantageTips": [{ "strengthId": "empathy", "tip": "先说出你感受到的，再说你需要的" }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_accepted_draft_reports_ai_source() {
        let diagnosis = diagnose_against_stub(StatusCode::OK, &draft_json("关系消耗")).await;
        assert_eq!(diagnosis.source, ResultSource::Ai);
        assert_eq!(diagnosis.result.judgment.verdict, Verdict::RelationshipDrain);
        assert_eq!(diagnosis.result.actions.len(), 3);
        assert_eq!(diagnosis.result.advantage_tips.len(), 3);
        assert_eq!(
            diagnosis.result.advantage_tips[1].tip,
            "先说出你感受到的，再说你需要的"
        );
    }

    #[tokio::test]
    async fn test_off_vocabulary_verdict_falls_back_to_mock() {
        let diagnosis = diagnose_against_stub(StatusCode::OK, &draft_json("情感危机")).await;
        assert_eq!(diagnosis.source, ResultSource::Mock);
        assert_eq!(diagnosis.result, generate_result(&ctx()));
    }

    #[tokio::test]
    async fn test_non_json_reply_falls_back_to_mock() {
        let diagnosis = diagnose_against_stub(StatusCode::OK, "抱歉，我无法给出建议。").await;
        assert_eq!(diagnosis.source, ResultSource::Mock);
        assert_eq!(diagnosis.result, generate_result(&ctx()));
    }

    #[tokio::test]
    async fn test_api_error_falls_back_to_mock() {
        let diagnosis = diagnose_against_stub(StatusCode::UNAUTHORIZED, "").await;
        assert_eq!(diagnosis.source, ResultSource::Mock);
    }

    #[test]
    fn test_backend_labels() {
        assert_eq!(MockDiagnoser.backend(), "mock");
    }

    #[test]
    fn test_rejected_draft_error_message_names_verdict() {
        let err = LlmDiagnosisError::from(VerdictError::UnknownVerdict("坏词".to_string()));
        assert!(err.to_string().contains("坏词"));
    }
}
