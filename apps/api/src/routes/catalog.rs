use axum::Json;
use serde::Serialize;

use crate::catalog::{all_scenarios, all_strengths, Scenario, Strength};

#[derive(Debug, Serialize)]
pub struct ListResponse<T: 'static> {
    pub success: bool,
    pub data: &'static [T],
}

/// GET /api/strengths
pub async fn handle_list_strengths() -> Json<ListResponse<Strength>> {
    Json(ListResponse {
        success: true,
        data: all_strengths(),
    })
}

/// GET /api/scenarios
pub async fn handle_list_scenarios() -> Json<ListResponse<Scenario>> {
    Json(ListResponse {
        success: true,
        data: all_scenarios(),
    })
}
