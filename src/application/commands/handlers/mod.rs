//! Command Handlers

mod lead_handlers;
mod rfp_handlers;

pub use lead_handlers::{RequestDemoHandler, SubmitContactHandler, SubscribeHandler};
pub use rfp_handlers::GenerateRfpHandler;

use crate::application::ports::AuditLogPort;
use crate::domain::AuditEvent;

/// 写入审计记录；失败只记日志，不影响请求结果
pub(crate) async fn record_audit(audit_log: &dyn AuditLogPort, event: AuditEvent) {
    let name = event.name();
    if let Err(e) = audit_log.record(event).await {
        tracing::warn!(event = name, error = %e, "Failed to record audit entry");
    }
}
