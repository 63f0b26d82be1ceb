//! In-Memory Audit Log

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;

use super::poisoned;
use crate::application::ports::{AuditLogPort, RepositoryError};
use crate::domain::{AuditEntry, AuditEvent};

/// 内存审计日志：只追加、无上限
#[derive(Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLogPort for InMemoryAuditLog {
    async fn record(&self, event: AuditEvent) -> Result<AuditEntry, RepositoryError> {
        let mut entries = self.entries.lock().map_err(poisoned)?;

        // 时间戳在锁内分配，并且不早于上一条（系统时钟回拨时保持单调）
        let now = Utc::now();
        let timestamp = match entries.last() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        let entry = AuditEntry::new(event, timestamp);
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<AuditEntry>, RepositoryError> {
        Ok(self.entries.lock().map_err(poisoned)?.clone())
    }
}
