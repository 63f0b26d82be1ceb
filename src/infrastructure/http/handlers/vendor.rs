//! Vendor HTTP Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::SearchVendors;
use crate::infrastructure::http::dto::{VendorResponse, VendorSearchParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 供应商检索
pub async fn search_vendors(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<VendorResponse>>, ApiError> {
    let params = VendorSearchParams::from_pairs(pairs);
    let vendors = state
        .search_vendors_handler
        .handle(SearchVendors { query: params.q })
        .await?;

    Ok(Json(vendors.into_iter().map(VendorResponse::from).collect()))
}
