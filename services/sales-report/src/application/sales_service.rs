//! 销售记录服务

use std::sync::Arc;

use salesdesk_errors::AppResult;
use tracing::{debug, info};

use super::dto::SendSalesRequest;
use crate::domain::{SalesFilter, SalesFilterParams, SalesReport, SalesReportRepository};

pub struct SalesService {
    reports: Arc<dyn SalesReportRepository>,
}

impl SalesService {
    pub fn new(reports: Arc<dyn SalesReportRepository>) -> Self {
        Self { reports }
    }

    /// 按查询参数选择过滤模式并读取
    pub async fn find_sales(&self, params: &SalesFilterParams) -> AppResult<Vec<SalesReport>> {
        let filter = SalesFilter::resolve(params)?;
        debug!(mode = filter.mode(), "Resolved sales filter");

        let reports = self.reports.find(&filter).await?;
        debug!(mode = filter.mode(), rows = reports.len(), "Sales reports loaded");
        Ok(reports)
    }

    /// 写入一条销售记录，返回生成的 ID
    pub async fn send_sales(&self, request: SendSalesRequest) -> AppResult<i64> {
        let report = request.into_new_report()?;
        let id = self.reports.insert(&report).await?;

        info!(
            id,
            sales_date = %report.sales_date,
            location_id = report.location_id,
            "Sales report recorded"
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockSalesReportRepository;
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use salesdesk_errors::AppError;

    #[tokio::test]
    async fn test_find_sales_passes_resolved_filter() {
        let mut repo = MockSalesReportRepository::new();
        repo.expect_find()
            .with(eq(SalesFilter::DayAtLocation {
                date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
                location_id: 1,
            }))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = SalesService::new(Arc::new(repo));
        let params = SalesFilterParams {
            sales_date: Some("2025-03-02".to_string()),
            location_id: Some("1".to_string()),
            ..Default::default()
        };

        assert!(service.find_sales(&params).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_sales_without_filter_never_queries() {
        let mut repo = MockSalesReportRepository::new();
        repo.expect_find().times(0);

        let service = SalesService::new(Arc::new(repo));
        let err = service
            .find_sales(&SalesFilterParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_send_sales_missing_amount_never_inserts() {
        let mut repo = MockSalesReportRepository::new();
        repo.expect_insert().times(0);

        let service = SalesService::new(Arc::new(repo));
        let request = SendSalesRequest {
            sales_date: Some("2025-03-02".to_string()),
            location_id: Some("1".to_string()),
            ..Default::default()
        };

        let err = service.send_sales(request).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains("amount"));
    }

    #[tokio::test]
    async fn test_send_sales_returns_generated_id() {
        let mut repo = MockSalesReportRepository::new();
        repo.expect_insert()
            .withf(|report| report.amount == 1200 && report.employee_number == 8)
            .times(1)
            .returning(|_| Ok(31));

        let service = SalesService::new(Arc::new(repo));
        let request = SendSalesRequest {
            sales_date: Some("2025-03-02".to_string()),
            location_id: Some("1".to_string()),
            amount: Some("1200".to_string()),
            sales_channel: Some("CVS".to_string()),
            category: Some("Food".to_string()),
            tactics: Some("End".to_string()),
            employee_number: Some("8".to_string()),
            memo: None,
        };

        assert_eq!(service.send_sales(request).await.unwrap(), 31);
    }
}
