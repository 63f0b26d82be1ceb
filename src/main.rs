//! Vendo - 营销站点后端
//!
//! 订阅 / 联系 / 演示预约收集、供应商检索、RFP 草稿生成，并托管前端构建产物

use vendo::config::{load_config, load_env_file, print_config};
use vendo::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 读取 .env（不存在时仅记录，不视为错误）
    let env_file = load_env_file(None);

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},vendo={},tower_http=debug",
        config.log_level(),
        config.log_level()
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Vendo backend v{}", env!("CARGO_PKG_VERSION"));
    match env_file {
        Ok(Some(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Ok(None) => tracing::info!("No .env file found, using process environment"),
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
    print_config(&config);

    // 内存存储，进程退出即丢失
    let state = AppState::in_memory();

    let server_config = ServerConfig::new(&config.server.host, config.server.port).with_frontend(
        &config.server.frontend_path,
        config.server.origin().map(str::to_string),
    );
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
