//! Repository Ports - 出站端口
//!
//! 每个实体一个 Repository，同步粒度为单个方法
//! 具体实现在 infrastructure 层（当前为内存实现）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ContactMessage, DemoRequest, Subscriber, Vendor};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

// ============================================================================
// Subscriber Repository
// ============================================================================

/// Subscriber Repository Port
///
/// 以小写邮箱为键，重复写入直接覆盖
#[async_trait]
pub trait SubscriberRepositoryPort: Send + Sync {
    /// 插入或覆盖订阅者
    async fn upsert(&self, subscriber: &Subscriber) -> Result<(), RepositoryError>;

    /// 获取所有订阅者
    async fn find_all(&self) -> Result<Vec<Subscriber>, RepositoryError>;

    /// 订阅者数量
    async fn count(&self) -> Result<usize, RepositoryError>;
}

// ============================================================================
// Contact Repository
// ============================================================================

/// Contact Repository Port（只追加）
#[async_trait]
pub trait ContactRepositoryPort: Send + Sync {
    async fn append(&self, contact: &ContactMessage) -> Result<(), RepositoryError>;

    async fn find_all(&self) -> Result<Vec<ContactMessage>, RepositoryError>;
}

// ============================================================================
// Demo Request Repository
// ============================================================================

/// Demo Request Repository Port（只追加）
#[async_trait]
pub trait DemoRequestRepositoryPort: Send + Sync {
    async fn append(&self, demo: &DemoRequest) -> Result<(), RepositoryError>;

    async fn find_all(&self) -> Result<Vec<DemoRequest>, RepositoryError>;
}

// ============================================================================
// Vendor Catalog
// ============================================================================

/// Vendor Catalog Port（只读）
#[async_trait]
pub trait VendorCatalogPort: Send + Sync {
    /// 按种子顺序返回全部供应商
    async fn find_all(&self) -> Result<Vec<Vendor>, RepositoryError>;
}
