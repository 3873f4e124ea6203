//! 仓储接口

use async_trait::async_trait;
use chrono::NaiveDate;
use salesdesk_errors::AppResult;

use super::employee::{Employee, EmployeeProfile, EmployeeUpdate, NewEmployee};
use super::sales_filter::SalesFilter;
use super::sales_report::{NewSalesReport, SalesReport};
use super::sales_target::{NewSalesTarget, SalesTarget, TargetScope};

/// 销售记录仓储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesReportRepository: Send + Sync {
    /// 按条件查询，结果按日期、ID 排序
    async fn find(&self, filter: &SalesFilter) -> AppResult<Vec<SalesReport>>;

    /// 写入一条记录，返回生成的 ID
    async fn insert(&self, report: &NewSalesReport) -> AppResult<i64>;
}

/// 销售目标仓储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalesTargetRepository: Send + Sync {
    async fn list(&self, scope: TargetScope) -> AppResult<Vec<SalesTarget>>;

    /// 写入目标，同时计算当月实际销售额
    async fn insert(&self, target: &NewSalesTarget) -> AppResult<i64>;

    /// 重新计算某店铺某月所有目标的实际销售额，返回更新行数
    async fn refresh_actual_amount(&self, location_id: i32, month_of: NaiveDate)
    -> AppResult<u64>;
}

/// 员工仓储
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Employee>>;

    async fn insert(&self, employee: &NewEmployee) -> AppResult<()>;

    /// 返回受影响行数
    async fn update(&self, update: &EmployeeUpdate) -> AppResult<u64>;

    /// 返回受影响行数
    async fn delete(&self, employee_number: i32) -> AppResult<u64>;

    async fn find_profile_by_address(&self, address: &str) -> AppResult<Option<EmployeeProfile>>;
}

/// 存储连通性探测
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreProbe: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}
