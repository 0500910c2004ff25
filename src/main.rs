// ==========================================
// 校园招聘就业管理系统 - HTTP 服务主入口
// ==========================================
// 技术栈: axum + Rust + SQLite
// ==========================================

use anyhow::Context;
use placement_tracker::app::{build_router, AppState};
use placement_tracker::config::AppConfig;
use placement_tracker::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("加载配置失败")?;

    // 初始化日志系统
    logging::init(config.log_format);
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{}", placement_tracker::APP_NAME);
    tracing::info!("系统版本: {}", placement_tracker::VERSION);
    tracing::info!("==================================================");
    tracing::info!(db_path = %config.db_path, locale = %config.locale, log_format = %config.log_format, "使用配置");

    let state = AppState::new(config.db_path.clone())
        .with_context(|| format!("无法初始化AppState: {}", config.db_path))?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("无法监听地址: {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "HTTP 服务已启动");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP 服务异常退出")?;

    tracing::info!("HTTP 服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "无法监听退出信号");
        std::future::pending::<()>().await;
    }
}
