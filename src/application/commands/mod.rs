//! 应用层 - 命令（写操作）

mod lead_commands;
mod rfp_commands;

pub mod handlers;

pub use lead_commands::*;
pub use rfp_commands::*;
