//! PostgreSQL 销售记录仓储实现

use async_trait::async_trait;
use chrono::NaiveDate;
use salesdesk_adapter_postgres::map_sqlx_error;
use salesdesk_errors::{AppError, AppResult};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::domain::{NewSalesReport, SalesFilter, SalesReport, SalesReportRepository};
use crate::error::DomainError;

const SELECT_SALES: &str = r#"SELECT s.id, s.sales_date, s.location_id, s.amount, s.sales_channel, s.category, s.tactics, s.employee_number, s.memo, e.employee_name FROM sales_report s LEFT JOIN employees e ON e.employee_number = s.employee_number WHERE "#;

/// 按过滤模式拼接查询，所有值都以参数绑定
pub fn sales_query(filter: &SalesFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_SALES);

    match *filter {
        SalesFilter::DayAtLocation { date, location_id } => {
            builder.push("s.sales_date = ");
            builder.push_bind(date);
            builder.push(" AND s.location_id = ");
            builder.push_bind(location_id);
        }
        SalesFilter::RangeAtLocation {
            from,
            until,
            location_id,
        } => {
            builder.push("s.sales_date BETWEEN ");
            builder.push_bind(from);
            builder.push(" AND ");
            builder.push_bind(until);
            builder.push(" AND s.location_id = ");
            builder.push_bind(location_id);
        }
        SalesFilter::Range { from, until } => {
            builder.push("s.sales_date BETWEEN ");
            builder.push_bind(from);
            builder.push(" AND ");
            builder.push_bind(until);
        }
    }

    builder.push(" ORDER BY s.sales_date, s.id");
    builder
}

pub struct PostgresSalesReportRepository {
    pool: PgPool,
}

impl PostgresSalesReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalesReportRepository for PostgresSalesReportRepository {
    async fn find(&self, filter: &SalesFilter) -> AppResult<Vec<SalesReport>> {
        let rows = sales_query(filter)
            .build_query_as::<SalesReportRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error("find sales reports"))?;

        rows.into_iter().map(SalesReportRow::into_report).collect()
    }

    async fn insert(&self, report: &NewSalesReport) -> AppResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO sales_report
                (sales_date, location_id, amount, sales_channel, category, tactics, employee_number, memo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(report.sales_date)
        .bind(report.location_id)
        .bind(report.amount)
        .bind(report.sales_channel.as_str())
        .bind(report.category.as_str())
        .bind(report.tactics.as_str())
        .bind(report.employee_number)
        .bind(&report.memo)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error("insert sales report"))?;

        Ok(id)
    }
}

#[derive(Debug, FromRow)]
struct SalesReportRow {
    id: i64,
    sales_date: NaiveDate,
    location_id: i32,
    amount: i64,
    sales_channel: String,
    category: String,
    tactics: String,
    employee_number: i32,
    memo: Option<String>,
    employee_name: Option<String>,
}

impl SalesReportRow {
    /// 表上有 CHECK 约束，这里解析失败说明数据被绕过约束写入
    fn into_report(self) -> AppResult<SalesReport> {
        let id = self.id;
        let decode = move |e: DomainError| {
            AppError::store_rejected(format!("decode sales report {}: {}", id, e))
        };

        Ok(SalesReport {
            id: self.id,
            sales_date: self.sales_date,
            location_id: self.location_id,
            amount: self.amount,
            sales_channel: self.sales_channel.parse().map_err(decode)?,
            category: self.category.parse().map_err(decode)?,
            tactics: self.tactics.parse().map_err(decode)?,
            employee_number: self.employee_number,
            memo: self.memo,
            employee_name: self.employee_name,
        })
    }
}
