//! 启动时建表与初始数据
//!
//! 只做 "不存在则创建 + 空表时写入一次初始数据"，没有版本与回滚。

use salesdesk_errors::{AppError, AppResult};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::map_sqlx_error;

/// 多实例同时启动时串行化建表
const BOOTSTRAP_LOCK_KEY: i64 = 0x5a1e_5de5;

/// 建表步骤（每步一条语句）
#[derive(Debug, Clone)]
pub struct SchemaStep {
    pub name: String,
    pub sql: String,
}

/// 初始数据步骤，仅在目标表为空时执行
#[derive(Debug, Clone)]
pub struct SeedStep {
    pub name: String,
    pub table: String,
    pub sql: String,
}

/// 执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub schema_steps: usize,
    pub seeded: Vec<String>,
}

/// 建表计划
#[derive(Debug, Clone, Default)]
pub struct SchemaBootstrap {
    steps: Vec<SchemaStep>,
    seeds: Vec<SeedStep>,
}

impl SchemaBootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加建表语句，应使用 `IF NOT EXISTS`
    pub fn with_step(mut self, name: impl Into<String>, sql: impl Into<String>) -> Self {
        self.steps.push(SchemaStep {
            name: name.into(),
            sql: sql.into(),
        });
        self
    }

    /// 追加初始数据
    pub fn with_seed(
        mut self,
        name: impl Into<String>,
        table: impl Into<String>,
        sql: impl Into<String>,
    ) -> Self {
        self.seeds.push(SeedStep {
            name: name.into(),
            table: table.into(),
            sql: sql.into(),
        });
        self
    }

    pub fn steps(&self) -> &[SchemaStep] {
        &self.steps
    }

    pub fn seeds(&self) -> &[SeedStep] {
        &self.seeds
    }

    /// 在一个事务内执行全部步骤
    pub async fn run(&self, pool: &PgPool) -> AppResult<BootstrapReport> {
        for seed in &self.seeds {
            if !is_plain_identifier(&seed.table) {
                return Err(AppError::internal(format!(
                    "Invalid seed table name: {}",
                    seed.table
                )));
            }
        }

        let mut tx = pool
            .begin()
            .await
            .map_err(map_sqlx_error("begin schema bootstrap"))?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(BOOTSTRAP_LOCK_KEY)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error("acquire bootstrap lock"))?;

        let mut report = BootstrapReport::default();

        for step in &self.steps {
            sqlx::query(&step.sql)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error("apply schema step"))?;
            debug!(step = %step.name, "Schema step applied");
            report.schema_steps += 1;
        }

        for seed in &self.seeds {
            let check_sql = format!("SELECT EXISTS(SELECT 1 FROM {})", seed.table);
            let (has_rows,): (bool,) = sqlx::query_as(&check_sql)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx_error("check seed table"))?;

            if has_rows {
                debug!(seed = %seed.name, table = %seed.table, "Table not empty, skipping seed");
                continue;
            }

            sqlx::query(&seed.sql)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error("apply seed"))?;
            info!(seed = %seed.name, table = %seed.table, "Inserted initial data");
            report.seeded.push(seed.name.clone());
        }

        tx.commit()
            .await
            .map_err(map_sqlx_error("commit schema bootstrap"))?;

        info!(
            schema_steps = report.schema_steps,
            seeded = report.seeded.len(),
            "Schema bootstrap completed"
        );
        Ok(report)
    }
}

/// 表名只允许字母、数字、下划线
fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
