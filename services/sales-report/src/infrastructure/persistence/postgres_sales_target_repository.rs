//! PostgreSQL 销售目标仓储实现

use async_trait::async_trait;
use chrono::NaiveDate;
use salesdesk_adapter_postgres::map_sqlx_error;
use salesdesk_errors::AppResult;
use sqlx::{FromRow, PgPool};

use crate::domain::{NewSalesTarget, SalesTarget, SalesTargetRepository, TargetScope};

/// 实际销售额：同店铺、同月份的销售合计
const MONTHLY_ACTUAL: &str = r#"
SELECT COALESCE(SUM(s.amount), 0)::BIGINT
FROM sales_report s
WHERE s.location_id = $2
  AND date_trunc('month', s.sales_date) = date_trunc('month', $1::date)
"#;

pub struct PostgresSalesTargetRepository {
    pool: PgPool,
}

impl PostgresSalesTargetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalesTargetRepository for PostgresSalesTargetRepository {
    async fn list(&self, scope: TargetScope) -> AppResult<Vec<SalesTarget>> {
        let rows = match scope {
            TargetScope::All => {
                sqlx::query_as::<_, SalesTargetRow>(
                    r#"
                    SELECT id, target_date, location_id, target_amount, actual_amount, memo
                    FROM sales_target
                    ORDER BY target_date, id
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
            TargetScope::Location(location_id) => {
                sqlx::query_as::<_, SalesTargetRow>(
                    r#"
                    SELECT id, target_date, location_id, target_amount, actual_amount, memo
                    FROM sales_target
                    WHERE location_id = $1
                    ORDER BY target_date, id
                    "#,
                )
                .bind(location_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx_error("list sales targets"))?;

        Ok(rows.into_iter().map(SalesTarget::from).collect())
    }

    async fn insert(&self, target: &NewSalesTarget) -> AppResult<i64> {
        let sql = format!(
            r#"
            INSERT INTO sales_target (target_date, location_id, target_amount, actual_amount, memo)
            VALUES ($1, $2, $3, ({}), $4)
            RETURNING id
            "#,
            MONTHLY_ACTUAL
        );

        let (id,): (i64,) = sqlx::query_as(&sql)
            .bind(target.target_date)
            .bind(target.location_id)
            .bind(target.target_amount)
            .bind(&target.memo)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error("insert sales target"))?;

        Ok(id)
    }

    async fn refresh_actual_amount(
        &self,
        location_id: i32,
        month_of: NaiveDate,
    ) -> AppResult<u64> {
        let sql = format!(
            r#"
            UPDATE sales_target
            SET actual_amount = ({})
            WHERE location_id = $2
              AND date_trunc('month', target_date) = date_trunc('month', $1::date)
            "#,
            MONTHLY_ACTUAL
        );

        let result = sqlx::query(&sql)
            .bind(month_of)
            .bind(location_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error("refresh actual amount"))?;

        Ok(result.rows_affected())
    }
}

#[derive(Debug, FromRow)]
struct SalesTargetRow {
    id: i64,
    target_date: NaiveDate,
    location_id: i32,
    target_amount: i64,
    actual_amount: Option<i64>,
    memo: Option<String>,
}

impl From<SalesTargetRow> for SalesTarget {
    fn from(row: SalesTargetRow) -> Self {
        Self {
            id: row.id,
            target_date: row.target_date,
            location_id: row.location_id,
            target_amount: row.target_amount,
            actual_amount: row.actual_amount,
            memo: row.memo,
        }
    }
}
