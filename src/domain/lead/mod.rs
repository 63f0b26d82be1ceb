//! Lead Context - 线索限界上下文
//!
//! 职责:
//! - 邮件订阅（按小写邮箱去重，后写覆盖）
//! - 联系留言
//! - 演示预约

mod entities;
mod errors;
mod value_objects;

pub use entities::{ContactMessage, DemoRequest, Subscriber};
pub use errors::LeadError;
pub use value_objects::{optional_text, required_text, EmailAddress};
