//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Debug,
    Release,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Debug => "debug",
            RunMode::Release => "release",
        }
    }
}

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 运行模式（debug / release）
    #[serde(default)]
    pub mode: RunMode,

    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 实际生效的日志级别：显式配置优先，否则按运行模式决定
    pub fn log_level(&self) -> &str {
        match self.log.level.as_deref() {
            Some(level) if !level.is_empty() => level,
            _ => match self.mode {
                RunMode::Debug => "debug",
                RunMode::Release => "info",
            },
        }
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 前端构建产物目录
    #[serde(default = "default_frontend_path")]
    pub frontend_path: PathBuf,

    /// 允许的跨域来源；为空时允许所有来源
    #[serde(default)]
    pub frontend_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_frontend_path() -> PathBuf {
    PathBuf::from("./frontend/build")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            frontend_path: default_frontend_path(),
            frontend_origin: String::new(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 跨域来源，空串视为未设置
    pub fn origin(&self) -> Option<&str> {
        Some(self.frontend_origin.trim()).filter(|o| !o.is_empty())
    }
}

/// 日志配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// 日志级别；未设置时由运行模式决定
    #[serde(default)]
    pub level: Option<String>,
}
