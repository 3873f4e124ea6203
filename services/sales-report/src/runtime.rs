//! 服务运行时

use salesdesk_config::AppConfig;
use salesdesk_telemetry::{init_tracing, init_tracing_json};
use tracing::{error, info};

/// 配置目录的环境变量，未设置时使用 `config`
pub const CONFIG_DIR_ENV: &str = "SALESDESK_CONFIG_DIR";

/// 服务运行时配置
pub struct RuntimeConfig {
    pub config_dir: String,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self {
            config_dir: std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "config".to_string()),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            config_dir: "config".to_string(),
        }
    }
}

/// 初始化 tracing，生产环境或显式开启时输出 JSON
pub fn init_runtime(config: &AppConfig) {
    if config.is_production() || config.telemetry.json_logs {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}

/// 等待关闭信号
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
