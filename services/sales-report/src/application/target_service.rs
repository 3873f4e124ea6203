//! 销售目标服务

use std::sync::Arc;

use salesdesk_errors::{AppError, AppResult};
use tracing::info;

use super::dto::{PostSalesTargetRequest, UpdateActualAmountRequest};
use crate::domain::input::{parse_date, parse_number, require_all, required};
use crate::domain::{SalesTarget, SalesTargetRepository, TargetScope};

pub struct TargetService {
    targets: Arc<dyn SalesTargetRepository>,
}

impl TargetService {
    pub fn new(targets: Arc<dyn SalesTargetRepository>) -> Self {
        Self { targets }
    }

    pub async fn list_targets(&self, location_id: Option<&str>) -> AppResult<Vec<SalesTarget>> {
        let scope = TargetScope::parse(location_id)?;
        self.targets.list(scope).await
    }

    pub async fn create_target(&self, request: PostSalesTargetRequest) -> AppResult<i64> {
        let target = request.into_new_target()?;
        let id = self.targets.insert(&target).await?;

        info!(
            id,
            target_date = %target.target_date,
            location_id = target.location_id,
            "Sales target created"
        );
        Ok(id)
    }

    /// 重新汇总当月实际销售额，没有匹配的目标时返回 NotFound
    pub async fn refresh_actual_amount(&self, request: UpdateActualAmountRequest) -> AppResult<u64> {
        require_all(&[
            ("location_id", request.location_id.as_deref()),
            ("sales_date", request.sales_date.as_deref()),
        ])?;
        let location_id: i32 = parse_number(
            "location_id",
            required("location_id", request.location_id.as_deref())?,
        )?;
        let month_of = parse_date(
            "sales_date",
            required("sales_date", request.sales_date.as_deref())?,
        )?;

        let updated = self
            .targets
            .refresh_actual_amount(location_id, month_of)
            .await?;

        if updated == 0 {
            return Err(AppError::not_found(format!(
                "No sales target for location {} in {}",
                location_id,
                month_of.format("%Y-%m")
            )));
        }

        info!(location_id, month = %month_of.format("%Y-%m"), updated, "Actual amount refreshed");
        Ok(updated)
    }
}
