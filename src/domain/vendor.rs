//! Vendor Context - 静态供应商目录

use serde::Serialize;

/// 供应商
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub summary: String,
}

impl Vendor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        domain: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain: domain.into(),
            summary: summary.into(),
        }
    }

    /// 大小写不敏感的子串匹配（name / domain / summary 任一命中）
    ///
    /// `needle` 必须已转为小写
    pub fn matches_query(&self, needle: &str) -> bool {
        [&self.name, &self.domain, &self.summary]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// 启动时加载的参考供应商数据
pub fn seed_vendors() -> Vec<Vendor> {
    vec![
        Vendor::new(
            "v-001",
            "KYCify",
            "KYC / Identity",
            "Specialized fintech KYC provider, scalable APIs.",
        ),
        Vendor::new(
            "v-002",
            "CloudPay Solutions",
            "Payments",
            "Payment gateway integrator with reconciliation.",
        ),
        Vendor::new(
            "v-003",
            "InfraOpt",
            "DevOps",
            "Managed infra and CI/CD for enterprise workloads.",
        ),
    ]
}
