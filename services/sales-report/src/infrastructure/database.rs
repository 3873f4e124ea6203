//! 数据库连接

use std::time::Duration;

use async_trait::async_trait;
use salesdesk_adapter_postgres::{PostgresConfig, SslMode, check_connection, create_pool};
use salesdesk_config::DatabaseConfig;
use salesdesk_errors::AppResult;
use sqlx::PgPool;

use crate::domain::StoreProbe;

/// 把配置文件中的数据库段转换为连接参数
pub fn postgres_config(config: &DatabaseConfig, app_name: &str) -> AppResult<PostgresConfig> {
    let ssl_mode: SslMode = config.ssl_mode.parse()?;

    Ok(PostgresConfig::from_components(
        &config.host,
        config.port,
        &config.database,
        &config.username,
    )
    .with_password(config.password.clone())
    .with_ssl_mode(ssl_mode)
    .with_ssl_root_cert(config.ssl_root_cert.clone())
    .with_pool(0, config.max_connections)
    .with_connect_timeout(Duration::from_secs(config.connect_timeout_secs))
    .with_application_name(app_name))
}

pub async fn connect(config: &DatabaseConfig, app_name: &str) -> AppResult<PgPool> {
    create_pool(&postgres_config(config, app_name)?).await
}

/// `/ready` 使用的连通性探测
pub struct PostgresProbe {
    pool: PgPool,
}

impl PostgresProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreProbe for PostgresProbe {
    async fn ping(&self) -> AppResult<()> {
        check_connection(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::{ExposeSecret, Secret};

    fn database_config(ssl_mode: &str) -> DatabaseConfig {
        DatabaseConfig {
            host: "db.internal".to_string(),
            port: 5433,
            username: "sales".to_string(),
            password: Secret::new("s3cret".to_string()),
            database: "salesdesk".to_string(),
            ssl_mode: ssl_mode.to_string(),
            ssl_root_cert: Some("/etc/ssl/rds.pem".to_string()),
            max_connections: 12,
            connect_timeout_secs: 3,
        }
    }

    #[test]
    fn test_postgres_config_from_database_section() {
        let pg = postgres_config(&database_config("verify-full"), "sales-report").unwrap();

        assert_eq!(pg.host, "db.internal");
        assert_eq!(pg.port, 5433);
        assert_eq!(pg.database, "salesdesk");
        assert_eq!(pg.ssl_mode, SslMode::VerifyFull);
        assert_eq!(pg.ssl_root_cert.as_deref(), Some("/etc/ssl/rds.pem"));
        assert_eq!(pg.pool_max, 12);
        assert_eq!(pg.connect_timeout, Duration::from_secs(3));
        assert_eq!(pg.application_name.as_deref(), Some("sales-report"));
        assert_eq!(
            pg.password.as_ref().map(|p| p.expose_secret().as_str()),
            Some("s3cret")
        );
    }

    #[test]
    fn test_unknown_ssl_mode_is_rejected() {
        assert!(postgres_config(&database_config("sometimes"), "sales-report").is_err());
    }
}
