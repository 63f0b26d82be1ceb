//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口定义（各实体 Repository、VendorCatalog、AuditLog）
//! - commands: 命令及处理器（订阅、留言、演示预约、RFP 生成）
//! - queries: 查询及处理器（供应商检索）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

pub use commands::{
    // Lead commands
    RequestDemo,
    SubmitContact,
    Subscribe,
    // RFP commands
    GenerateRfp,
    GenerateRfpResponse,
    // Handlers
    handlers::{GenerateRfpHandler, RequestDemoHandler, SubmitContactHandler, SubscribeHandler},
};

pub use error::ApplicationError;

pub use ports::{
    AuditLogPort, ContactRepositoryPort, DemoRequestRepositoryPort, RepositoryError,
    SubscriberRepositoryPort, VendorCatalogPort,
};

pub use queries::{handlers::SearchVendorsHandler, SearchVendors};
