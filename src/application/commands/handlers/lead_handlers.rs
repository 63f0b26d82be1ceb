//! Lead Command Handlers

use std::sync::Arc;

use super::record_audit;
use crate::application::commands::{RequestDemo, SubmitContact, Subscribe};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AuditLogPort, ContactRepositoryPort, DemoRequestRepositoryPort, SubscriberRepositoryPort,
};
use crate::domain::{AuditEvent, ContactMessage, DemoRequest, Subscriber};

// ============================================================================
// Subscribe
// ============================================================================

/// Subscribe Handler
pub struct SubscribeHandler {
    subscriber_repo: Arc<dyn SubscriberRepositoryPort>,
    audit_log: Arc<dyn AuditLogPort>,
}

impl SubscribeHandler {
    pub fn new(
        subscriber_repo: Arc<dyn SubscriberRepositoryPort>,
        audit_log: Arc<dyn AuditLogPort>,
    ) -> Self {
        Self {
            subscriber_repo,
            audit_log,
        }
    }

    pub async fn handle(&self, command: Subscribe) -> Result<Subscriber, ApplicationError> {
        let subscriber = Subscriber::new(command.email)?;

        self.subscriber_repo.upsert(&subscriber).await?;
        record_audit(
            self.audit_log.as_ref(),
            AuditEvent::Subscribe(subscriber.clone()),
        )
        .await;

        tracing::info!(email = %subscriber.email, "Subscriber stored");

        Ok(subscriber)
    }
}

// ============================================================================
// SubmitContact
// ============================================================================

/// SubmitContact Handler
pub struct SubmitContactHandler {
    contact_repo: Arc<dyn ContactRepositoryPort>,
    audit_log: Arc<dyn AuditLogPort>,
}

impl SubmitContactHandler {
    pub fn new(
        contact_repo: Arc<dyn ContactRepositoryPort>,
        audit_log: Arc<dyn AuditLogPort>,
    ) -> Self {
        Self {
            contact_repo,
            audit_log,
        }
    }

    pub async fn handle(
        &self,
        command: SubmitContact,
    ) -> Result<ContactMessage, ApplicationError> {
        let contact = ContactMessage::new(command.name, command.email, command.message)?;

        self.contact_repo.append(&contact).await?;
        record_audit(self.audit_log.as_ref(), AuditEvent::Contact(contact.clone())).await;

        tracing::info!(name = %contact.name, email = %contact.email, "Contact message received");

        Ok(contact)
    }
}

// ============================================================================
// RequestDemo
// ============================================================================

/// RequestDemo Handler
pub struct RequestDemoHandler {
    demo_repo: Arc<dyn DemoRequestRepositoryPort>,
    audit_log: Arc<dyn AuditLogPort>,
}

impl RequestDemoHandler {
    pub fn new(
        demo_repo: Arc<dyn DemoRequestRepositoryPort>,
        audit_log: Arc<dyn AuditLogPort>,
    ) -> Self {
        Self {
            demo_repo,
            audit_log,
        }
    }

    pub async fn handle(&self, command: RequestDemo) -> Result<DemoRequest, ApplicationError> {
        let demo = DemoRequest::new(
            command.name,
            command.email,
            command.company,
            command.size,
            command.message,
        )?;

        self.demo_repo.append(&demo).await?;
        record_audit(self.audit_log.as_ref(), AuditEvent::DemoRequest(demo.clone())).await;

        tracing::info!(
            email = %demo.email,
            company = %demo.company,
            "Demo request queued"
        );

        Ok(demo)
    }
}
