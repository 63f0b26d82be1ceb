//! 基础设施层
//!
//! - http: axum 路由、中间件、服务器
//! - memory: 内存 Repository 实现

pub mod http;
pub mod memory;
