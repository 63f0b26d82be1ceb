//! Audit Log Port - 审计日志
//!
//! 只追加、无上限、无消费者

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{AuditEntry, AuditEvent};

/// Audit Log Port
#[async_trait]
pub trait AuditLogPort: Send + Sync {
    /// 追加一条审计记录，时间戳由实现分配且单调不减
    async fn record(&self, event: AuditEvent) -> Result<AuditEntry, RepositoryError>;

    /// 按写入顺序返回全部审计记录
    async fn list(&self) -> Result<Vec<AuditEntry>, RepositoryError>;
}
