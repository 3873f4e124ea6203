//! PostgreSQL 连接管理

use salesdesk_errors::AppResult;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::{PostgresConfig, map_sqlx_error};

/// 创建 PostgreSQL 连接池
///
/// 每个请求从池中取出的 `PoolConnection` 在 drop 时归还，
/// 因此任何提前返回的路径都会释放连接。
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .connect_with(config.connect_options())
        .await
        .map_err(map_sqlx_error("create connection pool"))?;

    info!(
        host = %config.host,
        database = %config.database,
        ssl_mode = config.ssl_mode.as_str(),
        max_connections = config.pool_max,
        "PostgreSQL connection pool created"
    );

    Ok(pool)
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(map_sqlx_error("health check"))?;
    Ok(())
}
