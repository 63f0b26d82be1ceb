//! Vendor Queries

/// 供应商检索查询
///
/// `query` 为空（或仅空白）时返回全部供应商
#[derive(Debug, Clone, Default)]
pub struct SearchVendors {
    pub query: Option<String>,
}
