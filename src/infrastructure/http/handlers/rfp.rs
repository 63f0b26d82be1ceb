//! RFP HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GenerateRfp;
use crate::infrastructure::http::dto::{GenerateRfpRequest, RfpDraftResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// 生成 RFP 草稿
pub async fn generate_rfp(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<GenerateRfpRequest>,
) -> Result<Json<RfpDraftResponse>, ApiError> {
    let command = GenerateRfp {
        goal: req.goal,
        scope: req.scope,
        budget: req.budget,
    };
    let result = state.generate_rfp_handler.handle(command).await?;

    Ok(Json(RfpDraftResponse {
        draft: result.draft,
    }))
}
