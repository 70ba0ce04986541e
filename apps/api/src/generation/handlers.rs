//! Axum route handlers for the generation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::context::{build_context, DiagnosisContext};
use crate::errors::AppError;
use crate::generation::mock_data::{generate_career, generate_guide};
use crate::generation::share::share_text;
use crate::models::form::FormData;
use crate::models::result::{CareerResult, GuideResult, ResultData, ResultSource};
use crate::state::AppState;
use crate::validation::{validate_form, ConfusionRule};

// ────────────────────────────────────────────────────────────────────────────
// Response envelope
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub request_id: Uuid,
    pub source: ResultSource,
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_text: Option<String>,
}

impl<T> ApiResponse<T> {
    fn new(data: T, source: ResultSource, share_text: Option<String>) -> Self {
        Self {
            success: true,
            data,
            meta: ResponseMeta {
                request_id: Uuid::new_v4(),
                source,
                generated_at: Utc::now(),
                share_text,
            },
        }
    }
}

/// Unwraps the body, validates it and builds the shared context.
fn prepare(
    payload: Result<Json<FormData>, JsonRejection>,
    rule: ConfusionRule,
) -> Result<DiagnosisContext, AppError> {
    let Json(form) = payload?;
    validate_form(&form, rule)?;
    build_context(&form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Diagnosis + action plan. Uses the configured diagnoser; the LLM path
/// falls back to templates on its own, so this only fails on bad input.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<FormData>, JsonRejection>,
) -> Result<Json<ApiResponse<ResultData>>, AppError> {
    let ctx = prepare(payload, ConfusionRule::Required)?;
    info!(
        "Generating diagnosis: scenario={} category={:?} backend={}",
        ctx.scenario.id,
        ctx.profile.category,
        state.diagnoser.backend()
    );

    let diagnosis = state.diagnoser.diagnose(&ctx).await;
    let share = share_text(ctx.scenario, &diagnosis.result);

    Ok(Json(ApiResponse::new(
        diagnosis.result,
        diagnosis.source,
        Some(share),
    )))
}

/// POST /api/career
///
/// Career directions derived from the domain distribution. Confusion is optional.
pub async fn handle_career(
    payload: Result<Json<FormData>, JsonRejection>,
) -> Result<Json<ApiResponse<CareerResult>>, AppError> {
    let ctx = prepare(payload, ConfusionRule::Optional)?;
    info!(
        "Generating career suggestions: dominant_domain={:?}",
        ctx.dominant_domain
    );
    Ok(Json(ApiResponse::new(
        generate_career(&ctx),
        ResultSource::Mock,
        None,
    )))
}

/// POST /api/guide
///
/// Four-week growth plan themed by the confusion category.
pub async fn handle_guide(
    payload: Result<Json<FormData>, JsonRejection>,
) -> Result<Json<ApiResponse<GuideResult>>, AppError> {
    let ctx = prepare(payload, ConfusionRule::Required)?;
    info!("Generating guide: category={:?}", ctx.profile.category);
    Ok(Json(ApiResponse::new(
        generate_guide(&ctx),
        ResultSource::Mock,
        None,
    )))
}
