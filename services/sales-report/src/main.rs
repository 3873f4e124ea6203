//! Sales Report Service
//!
//! 销售记录、销售目标、员工目录的 HTTP 服务

use std::net::SocketAddr;
use std::sync::Arc;

use salesdesk_config::AppConfig;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use sales_report::api::{self, AppState};
use sales_report::application::{EmployeeService, SalesService, TargetService};
use sales_report::infrastructure::persistence::{
    PostgresEmployeeRepository, PostgresSalesReportRepository, PostgresSalesTargetRepository,
    schema,
};
use sales_report::infrastructure::{PostgresProbe, connect};
use sales_report::runtime::{RuntimeConfig, init_runtime, shutdown_signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let runtime = RuntimeConfig::from_env();
    let config = AppConfig::load(&runtime.config_dir)?;
    init_runtime(&config);

    let pool = connect(&config.database, &config.app_name).await?;

    if config.bootstrap.enabled {
        let report = schema::bootstrap_plan(config.bootstrap.seed_demo_data)
            .run(&pool)
            .await?;
        info!(
            schema_steps = report.schema_steps,
            seeded = ?report.seeded,
            "Database ready"
        );
    }

    let mut state = AppState::new(
        SalesService::new(Arc::new(PostgresSalesReportRepository::new(pool.clone()))),
        TargetService::new(Arc::new(PostgresSalesTargetRepository::new(pool.clone()))),
        EmployeeService::new(Arc::new(PostgresEmployeeRepository::new(pool.clone()))),
        Arc::new(PostgresProbe::new(pool.clone())),
    );

    match salesdesk_telemetry::init_metrics() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => warn!(error = %e, "Prometheus recorder not installed"),
    }

    let app = api::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Sales report service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Sales report service stopped");
    Ok(())
}
