//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口，内存实现可替换为持久化实现

mod audit_log;
mod repositories;

pub use audit_log::AuditLogPort;
pub use repositories::{
    ContactRepositoryPort, DemoRequestRepositoryPort, RepositoryError, SubscriberRepositoryPort,
    VendorCatalogPort,
};
