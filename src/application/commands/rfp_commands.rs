//! RFP Commands

use uuid::Uuid;

/// 生成 RFP 草稿命令
#[derive(Debug, Clone)]
pub struct GenerateRfp {
    pub goal: String,
    pub scope: Option<String>,
    pub budget: Option<String>,
}

/// 生成 RFP 草稿响应
#[derive(Debug, Clone)]
pub struct GenerateRfpResponse {
    pub id: Uuid,
    pub draft: String,
}
