//! Lead HTTP Handlers - 订阅 / 联系 / 演示预约

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{RequestDemo, SubmitContact, Subscribe};
use crate::infrastructure::http::dto::{
    ContactRequest, DemoRequestBody, StatusResponse, SubscribeRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// 邮件订阅
pub async fn subscribe(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SubscribeRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state
        .subscribe_handler
        .handle(Subscribe { email: req.email })
        .await?;

    Ok(Json(StatusResponse::SUBSCRIBED))
}

/// 联系留言
pub async fn contact(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ContactRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let command = SubmitContact {
        name: req.name,
        email: req.email,
        message: req.message,
    };
    state.submit_contact_handler.handle(command).await?;

    Ok(Json(StatusResponse::RECEIVED))
}

/// 预约演示
pub async fn request_demo(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<DemoRequestBody>,
) -> Result<Json<StatusResponse>, ApiError> {
    let command = RequestDemo {
        name: req.name,
        email: req.email,
        company: req.company,
        size: req.size,
        message: req.message,
    };
    state.request_demo_handler.handle(command).await?;

    Ok(Json(StatusResponse::QUEUED))
}
