//! Lead Context - Entities

use serde::Serialize;

use super::{optional_text, required_text, EmailAddress, LeadError};

/// 邮件订阅者
///
/// 不变量:
/// - email 始终为小写形式
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscriber {
    pub email: EmailAddress,
}

impl Subscriber {
    pub fn new(email: impl Into<String>) -> Result<Self, LeadError> {
        let email = EmailAddress::parse("email", email)?.normalized();
        Ok(Self { email })
    }
}

/// 联系留言
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, LeadError> {
        Ok(Self {
            name: required_text("name", name)?,
            email: EmailAddress::parse("email", email)?,
            message: required_text("message", message)?,
        })
    }
}

/// 演示预约
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoRequest {
    pub name: String,
    pub email: EmailAddress,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DemoRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        size: Option<String>,
        message: Option<String>,
    ) -> Result<Self, LeadError> {
        Ok(Self {
            name: required_text("name", name)?,
            email: EmailAddress::parse("email", email)?,
            company: required_text("company", company)?,
            size: optional_text(size),
            message: optional_text(message),
        })
    }
}
