//! Application State
//!
//! 持有所有 Port 与 Command/Query Handlers，经 axum `State` 注入到各 handler

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GenerateRfpHandler, RequestDemoHandler, SubmitContactHandler, SubscribeHandler,
    // Query handlers
    SearchVendorsHandler,
    // Ports
    AuditLogPort, ContactRepositoryPort, DemoRequestRepositoryPort, SubscriberRepositoryPort,
    VendorCatalogPort,
};
use crate::infrastructure::memory::{
    InMemoryAuditLog, InMemoryContactRepository, InMemoryDemoRequestRepository,
    InMemorySubscriberRepository, StaticVendorCatalog,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub subscriber_repo: Arc<dyn SubscriberRepositoryPort>,
    pub contact_repo: Arc<dyn ContactRepositoryPort>,
    pub demo_repo: Arc<dyn DemoRequestRepositoryPort>,
    pub vendor_catalog: Arc<dyn VendorCatalogPort>,
    pub audit_log: Arc<dyn AuditLogPort>,

    // ========== Command Handlers ==========
    pub subscribe_handler: SubscribeHandler,
    pub submit_contact_handler: SubmitContactHandler,
    pub request_demo_handler: RequestDemoHandler,
    pub generate_rfp_handler: GenerateRfpHandler,

    // ========== Query Handlers ==========
    pub search_vendors_handler: SearchVendorsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        subscriber_repo: Arc<dyn SubscriberRepositoryPort>,
        contact_repo: Arc<dyn ContactRepositoryPort>,
        demo_repo: Arc<dyn DemoRequestRepositoryPort>,
        vendor_catalog: Arc<dyn VendorCatalogPort>,
        audit_log: Arc<dyn AuditLogPort>,
    ) -> Self {
        Self {
            // Ports
            subscriber_repo: subscriber_repo.clone(),
            contact_repo: contact_repo.clone(),
            demo_repo: demo_repo.clone(),
            vendor_catalog: vendor_catalog.clone(),
            audit_log: audit_log.clone(),

            // Command handlers
            subscribe_handler: SubscribeHandler::new(subscriber_repo, audit_log.clone()),
            submit_contact_handler: SubmitContactHandler::new(contact_repo, audit_log.clone()),
            request_demo_handler: RequestDemoHandler::new(demo_repo, audit_log.clone()),
            generate_rfp_handler: GenerateRfpHandler::new(audit_log),

            // Query handlers
            search_vendors_handler: SearchVendorsHandler::new(vendor_catalog),
        }
    }

    /// 全内存实现 + 参考供应商数据
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemorySubscriberRepository::new()),
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(InMemoryDemoRequestRepository::new()),
            Arc::new(StaticVendorCatalog::seeded()),
            Arc::new(InMemoryAuditLog::new()),
        )
    }
}
