//! Vendo - 营销站点后端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Lead: 订阅、联系留言、演示预约
//! - Vendor: 静态供应商目录
//! - RFP: 草稿模板
//! - Audit: 审计事件
//!
//! 应用层 (application/):
//! - Ports: 各实体 Repository、VendorCatalog、AuditLog
//! - Commands / Queries: 用例处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + 静态前端托管
//! - Memory: 所有 Port 的内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
