//! 销售目标

use chrono::NaiveDate;
use serde::Serialize;

use super::input::{parse_number, present};
use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesTarget {
    pub id: i64,
    pub target_date: NaiveDate,
    pub location_id: i32,
    pub target_amount: i64,
    /// 目标当月的实际销售额，写入或刷新时计算
    pub actual_amount: Option<i64>,
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSalesTarget {
    pub target_date: NaiveDate,
    pub location_id: i32,
    pub target_amount: i64,
    pub memo: Option<String>,
}

/// 目标列表的店铺范围
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetScope {
    All,
    Location(i32),
}

impl TargetScope {
    /// 未提供或 `all` 表示全部店铺
    pub fn parse(value: Option<&str>) -> Result<Self, DomainError> {
        match present(value) {
            None => Ok(Self::All),
            Some(v) if v.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(v) => parse_number("location_id", v).map(Self::Location),
        }
    }
}
