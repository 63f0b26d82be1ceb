//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping             GET   健康检查
//! - /api/subscribe        POST  邮件订阅
//! - /api/contact          POST  联系留言
//! - /api/demo             POST  预约演示
//! - /api/vendors/search   GET   供应商检索（?q=）
//! - /api/rfps/generate    POST  生成 RFP 草稿
//!
//! 其余路径由 server 挂载的静态前端处理

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有 API 路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/subscribe", post(handlers::subscribe))
        .route("/contact", post(handlers::contact))
        .route("/demo", post(handlers::request_demo))
        .route("/vendors/search", get(handlers::search_vendors))
        .route("/rfps/generate", post(handlers::generate_rfp))
}
