//! 应用层 - 查询（读操作）

mod vendor_queries;

pub mod handlers;

pub use vendor_queries::*;
