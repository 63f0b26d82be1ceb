//! Domain Layer - 领域层
//!
//! 包含:
//! - Lead Context: 订阅、联系、演示预约等线索收集
//! - Vendor Context: 静态供应商目录与检索
//! - RFP Context: RFP 草稿模板
//! - Audit: 审计事件

pub mod audit;
pub mod lead;
pub mod rfp;
pub mod vendor;

pub use audit::{AuditEntry, AuditEvent};
pub use lead::{ContactMessage, DemoRequest, EmailAddress, LeadError, Subscriber};
pub use rfp::{build_rfp_draft, RfpBrief, NOT_SPECIFIED};
pub use vendor::{seed_vendors, Vendor};
