//! Static Vendor Catalog

use async_trait::async_trait;

use crate::application::ports::{RepositoryError, VendorCatalogPort};
use crate::domain::{seed_vendors, Vendor};

/// 启动时装载、之后只读的供应商目录
pub struct StaticVendorCatalog {
    vendors: Vec<Vendor>,
}

impl StaticVendorCatalog {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// 使用参考数据初始化
    pub fn seeded() -> Self {
        Self::new(seed_vendors())
    }
}

#[async_trait]
impl VendorCatalogPort for StaticVendorCatalog {
    async fn find_all(&self) -> Result<Vec<Vendor>, RepositoryError> {
        Ok(self.vendors.clone())
    }
}
