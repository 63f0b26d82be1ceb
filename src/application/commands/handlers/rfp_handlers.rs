//! RFP Command Handlers

use std::sync::Arc;
use uuid::Uuid;

use super::record_audit;
use crate::application::commands::{GenerateRfp, GenerateRfpResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::AuditLogPort;
use crate::domain::lead::{optional_text, required_text};
use crate::domain::{build_rfp_draft, AuditEvent, RfpBrief};

/// GenerateRfp Handler
pub struct GenerateRfpHandler {
    audit_log: Arc<dyn AuditLogPort>,
}

impl GenerateRfpHandler {
    pub fn new(audit_log: Arc<dyn AuditLogPort>) -> Self {
        Self { audit_log }
    }

    pub async fn handle(
        &self,
        command: GenerateRfp,
    ) -> Result<GenerateRfpResponse, ApplicationError> {
        let brief = RfpBrief {
            goal: required_text("goal", command.goal)?,
            scope: optional_text(command.scope),
            budget: optional_text(command.budget),
        };

        let draft = build_rfp_draft(&brief);
        let id = Uuid::new_v4();

        record_audit(
            self.audit_log.as_ref(),
            AuditEvent::RfpGenerated {
                id,
                goal: brief.goal.clone(),
            },
        )
        .await;

        tracing::info!(rfp_id = %id, "RFP draft generated");

        Ok(GenerateRfpResponse { id, draft })
    }
}
