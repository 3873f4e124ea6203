//! 销售查询条件解析
//!
//! 四个可选参数按固定顺序匹配，先命中的分支生效：
//! 1. 日期 + 店铺
//! 2. 日期区间 + 店铺
//! 3. 日期区间（全部店铺）
//! 4. 其余组合一律拒绝

use chrono::NaiveDate;
use serde::Deserialize;

use super::input::{parse_date, parse_number, present};
use crate::error::DomainError;

/// 查询参数原样接收，解析前都是字符串
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesFilterParams {
    pub sales_date: Option<String>,
    pub location_id: Option<String>,
    pub sales_date_from: Option<String>,
    pub sales_date_until: Option<String>,
}

/// 解析后的查询条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesFilter {
    DayAtLocation {
        date: NaiveDate,
        location_id: i32,
    },
    RangeAtLocation {
        from: NaiveDate,
        until: NaiveDate,
        location_id: i32,
    },
    /// 区间查询，不限店铺
    Range { from: NaiveDate, until: NaiveDate },
}

impl SalesFilter {
    /// 选出匹配的分支后才解析该分支用到的参数
    ///
    /// `from > until` 不做校验，直接交给数据库比较。
    pub fn resolve(params: &SalesFilterParams) -> Result<Self, DomainError> {
        let date = present(params.sales_date.as_deref());
        let location = present(params.location_id.as_deref());
        let from = present(params.sales_date_from.as_deref());
        let until = present(params.sales_date_until.as_deref());

        match (date, location, from, until) {
            (Some(date), Some(location), _, _) => Ok(Self::DayAtLocation {
                date: parse_date("sales_date", date)?,
                location_id: parse_number("location_id", location)?,
            }),
            (_, Some(location), Some(from), Some(until)) => Ok(Self::RangeAtLocation {
                from: parse_date("sales_date_from", from)?,
                until: parse_date("sales_date_until", until)?,
                location_id: parse_number("location_id", location)?,
            }),
            (_, None, Some(from), Some(until)) => Ok(Self::Range {
                from: parse_date("sales_date_from", from)?,
                until: parse_date("sales_date_until", until)?,
            }),
            _ => Err(DomainError::InsufficientFilter),
        }
    }

    /// 日志用的模式名
    pub fn mode(&self) -> &'static str {
        match self {
            Self::DayAtLocation { .. } => "day_at_location",
            Self::RangeAtLocation { .. } => "range_at_location",
            Self::Range { .. } => "range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(
        date: Option<&str>,
        location: Option<&str>,
        from: Option<&str>,
        until: Option<&str>,
    ) -> SalesFilterParams {
        SalesFilterParams {
            sales_date: date.map(String::from),
            location_id: location.map(String::from),
            sales_date_from: from.map(String::from),
            sales_date_until: until.map(String::from),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_at_location() {
        let filter = SalesFilter::resolve(&params(Some("2025-03-02"), Some("1"), None, None));
        assert_eq!(
            filter,
            Ok(SalesFilter::DayAtLocation {
                date: day(2025, 3, 2),
                location_id: 1
            })
        );
    }

    #[test]
    fn test_range_at_location() {
        let filter = SalesFilter::resolve(&params(
            None,
            Some("3"),
            Some("2025-03-01"),
            Some("2025-03-31"),
        ));
        assert_eq!(
            filter,
            Ok(SalesFilter::RangeAtLocation {
                from: day(2025, 3, 1),
                until: day(2025, 3, 31),
                location_id: 3
            })
        );
    }

    #[test]
    fn test_range_for_all_locations() {
        let filter =
            SalesFilter::resolve(&params(None, None, Some("2025-03-01"), Some("2025-03-31")));
        assert_eq!(
            filter,
            Ok(SalesFilter::Range {
                from: day(2025, 3, 1),
                until: day(2025, 3, 31)
            })
        );
    }

    #[test]
    fn test_unmatched_combinations_are_rejected() {
        let cases = [
            params(None, None, None, None),
            params(Some("2025-03-02"), None, None, None),
            params(None, Some("1"), None, None),
            params(None, Some("1"), Some("2025-03-01"), None),
            params(None, None, None, Some("2025-03-31")),
            params(Some("2025-03-02"), None, Some("2025-03-01"), None),
        ];

        for case in cases {
            assert_eq!(
                SalesFilter::resolve(&case),
                Err(DomainError::InsufficientFilter),
                "{:?}",
                case
            );
        }
    }

    #[test]
    fn test_day_branch_wins_over_range() {
        let filter = SalesFilter::resolve(&params(
            Some("2025-03-02"),
            Some("1"),
            Some("2025-01-01"),
            Some("2025-12-31"),
        ))
        .unwrap();
        assert_eq!(filter.mode(), "day_at_location");
    }

    #[test]
    fn test_later_branch_fields_are_not_parsed() {
        // 第一分支命中后不会解析区间参数
        let filter = SalesFilter::resolve(&params(
            Some("2025-03-02"),
            Some("1"),
            Some("not-a-date"),
            None,
        ));
        assert!(filter.is_ok());
    }

    #[test]
    fn test_blank_values_count_as_absent() {
        let filter = SalesFilter::resolve(&params(
            Some(" "),
            Some(""),
            Some("2025-03-01"),
            Some("2025-03-31"),
        ))
        .unwrap();
        assert_eq!(filter.mode(), "range");
    }

    #[test]
    fn test_reversed_range_passes_through() {
        let filter =
            SalesFilter::resolve(&params(None, None, Some("2025-03-31"), Some("2025-03-01")));
        assert_eq!(
            filter,
            Ok(SalesFilter::Range {
                from: day(2025, 3, 31),
                until: day(2025, 3, 1)
            })
        );
    }

    #[test]
    fn test_malformed_values_are_invalid() {
        assert!(matches!(
            SalesFilter::resolve(&params(Some("03/02/2025"), Some("1"), None, None)),
            Err(DomainError::InvalidValue { field: "sales_date", .. })
        ));
        assert!(matches!(
            SalesFilter::resolve(&params(Some("2025-03-02"), Some("shibuya"), None, None)),
            Err(DomainError::InvalidValue { field: "location_id", .. })
        ));
    }
}
