//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::Vendor;

// ============================================================================
// 通用响应
// ============================================================================

/// 固定确认响应 `{status}`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const SUBSCRIBED: Self = Self { status: "subscribed" };
    pub const RECEIVED: Self = Self { status: "received" };
    pub const QUEUED: Self = Self { status: "queued" };
}

// ============================================================================
// Lead DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DemoRequestBody {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Vendor DTOs
// ============================================================================

/// 检索参数；`q` 重复出现时取第一个
#[derive(Debug, Default)]
pub struct VendorSearchParams {
    pub q: Option<String>,
}

impl VendorSearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));
        Self { q }
    }
}

#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub summary: String,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            domain: vendor.domain,
            summary: vendor.summary,
        }
    }
}

// ============================================================================
// RFP DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateRfpRequest {
    pub goal: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RfpDraftResponse {
    pub draft: String,
}
