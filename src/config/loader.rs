//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 部署环境沿用的裸环境变量（PORT / FRONTEND_PATH / FRONTEND_ORIGIN / GIN_MODE）
//! 2. `VENDO_` 前缀环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 裸环境变量 → 配置键
///
/// 同一配置键出现多次时后者覆盖前者，`GIN_MODE` 优先于别名 `APP_MODE`
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("FRONTEND_PATH", "server.frontend_path"),
    ("FRONTEND_ORIGIN", "server.frontend_origin"),
    ("APP_MODE", "mode"),
    ("GIN_MODE", "mode"),
];

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `GIN_MODE=release`
/// - `FRONTEND_ORIGIN=https://vendo.example`
/// - `VENDO_SERVER__HOST=127.0.0.1`
/// - `VENDO_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let env: HashMap<String, String> = std::env::vars().collect();
    load_config_from(None, &env)
}

/// 将 .env 文件读入进程环境，已存在的变量不会被覆盖
///
/// 返回实际读取的文件路径；文件不存在时返回 `Ok(None)`
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::LoadError(format!("Failed to read .env: {}", e))),
    }
}

/// 从指定配置文件与环境变量集合加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
/// - `env` - 环境变量快照
pub fn load_config_from(
    config_path: Option<&Path>,
    env: &HashMap<String, String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("mode", "debug")?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.frontend_path", "./frontend/build")?
        .set_default("server.frontend_origin", "")?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量，层级分隔符为 __
    builder = builder.add_source(
        Environment::with_prefix("VENDO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(Some(env.clone())),
    );

    // 4. 裸环境变量（最高优先级）
    for (var, key) in LEGACY_ENV_KEYS {
        if let Some(value) = env.get(*var).filter(|v| !v.is_empty()) {
            builder = builder.set_override(*key, value.as_str())?;
        }
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if let Some(origin) = config.server.origin() {
        if http::HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::ValidationError(format!(
                "Frontend origin is not a valid header value: {:?}",
                origin
            )));
        }
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Mode: {}", config.mode.as_str());
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Frontend Path: {}", config.server.frontend_path.display());
    match config.server.origin() {
        Some(origin) => tracing::info!("CORS Origin: {}", origin),
        None => tracing::warn!("CORS Origin: * (unset, development only)"),
    }
    tracing::info!("Log Level: {}", config.log_level());
    tracing::info!("=================================");
}
