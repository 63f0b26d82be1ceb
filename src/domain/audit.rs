//! Audit - 审计事件
//!
//! 仅作参考记录，不参与任何业务决策

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::lead::{ContactMessage, DemoRequest, Subscriber};

/// 审计事件载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum AuditEvent {
    Subscribe(Subscriber),
    Contact(ContactMessage),
    DemoRequest(DemoRequest),
    RfpGenerated { id: Uuid, goal: String },
}

impl AuditEvent {
    /// 事件名称
    pub fn name(&self) -> &'static str {
        match self {
            AuditEvent::Subscribe(_) => "subscribe",
            AuditEvent::Contact(_) => "contact",
            AuditEvent::DemoRequest(_) => "demo_request",
            AuditEvent::RfpGenerated { .. } => "rfp_generated",
        }
    }
}

/// 审计条目
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AuditEvent,
}

impl AuditEntry {
    pub fn new(event: AuditEvent, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, event }
    }

    pub fn event_name(&self) -> &'static str {
        self.event.name()
    }
}
