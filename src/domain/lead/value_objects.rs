//! Lead Context - Value Objects

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::LeadError;

/// WHATWG HTML 规范中 `input[type=email]` 使用的邮箱语法
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// 邮箱地址
///
/// 不变量:
/// - 已去除首尾空白
/// - 符合 HTML 邮箱语法
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(field: &'static str, raw: impl Into<String>) -> Result<Self, LeadError> {
        let raw = raw.into();
        let value = raw.trim();
        if value.is_empty() {
            return Err(LeadError::MissingField(field));
        }
        if !EMAIL_PATTERN.is_match(value) {
            return Err(LeadError::InvalidEmail {
                field,
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// 小写形式，作为订阅者的唯一键
    pub fn normalized(&self) -> EmailAddress {
        Self(self.0.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 必填文本字段：空串或纯空白视为缺失
pub fn required_text(field: &'static str, value: impl Into<String>) -> Result<String, LeadError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(LeadError::MissingField(field));
    }
    Ok(value)
}

/// 可选文本字段：空串归一为 None
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
